//! Run report printed while generating the indexes

use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Console progress and diagnostics of one generator run
pub struct Reporter<W: WriteColor> {
    out: W,
}

impl Reporter<StandardStream> {
    pub fn stdout(choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(choice))
    }
}

impl Reporter<Buffer> {
    /// Uncolored in-memory reporter
    pub fn buffer() -> Self {
        Self::new(Buffer::no_color())
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(self.out.as_slice()).into_owned()
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(self.out, "-> {}:", name)?;
        self.out.reset()
    }

    /// Section header, e.g. `2a."Proof_by_Number.md":`
    pub fn section(&mut self, label: &str, file_name: &str) -> io::Result<()> {
        writeln!(self.out)?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(self.out, "{}", label)?;
        self.out.reset()?;
        writeln!(self.out, "\"{}\":", file_name)
    }

    pub fn item(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "   - {}", message)
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        write!(self.out, "   - ")?;
        self.out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.out, "{}", message)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        write!(self.out, "   - ")?;
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(self.out, "WARNING:")?;
        self.out.reset()?;
        writeln!(self.out, " {}", message)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
