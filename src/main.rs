use anyhow::Result;
use bookindex::generate::{GenerateOptions, generate};
use bookindex::output::Reporter;
use bookindex::utils::BookLayout;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "bookindex")]
#[command(about = "Regenerate the number, topic and author indexes of a proof book")]
struct Cli {
    /// Book root containing the proof, definition and index directories
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Only parse documents and check the table of contents
    #[arg(long)]
    check: bool,

    /// When to color the report
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let layout = BookLayout::open(&cli.root)?;
    let mut reporter = Reporter::stdout(cli.color.into());
    let options = GenerateOptions {
        check_only: cli.check,
    };

    generate(&layout, options, &mut reporter)?;

    Ok(())
}
