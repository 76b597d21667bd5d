//! # bookindex - index pages for a book of proofs
//!
//! A book keeps proofs under `P/` and definitions under `D/`, one markdown
//! document each, every document opening with a small metadata header
//! (`proof_id`/`def_id`, `shortcut`, `title`, `author`, `username`, `date`).
//! This crate rebuilds the six listing pages under `I/`:
//!
//! - `Proof_by_Number.md`, `Definition_by_Number.md` - table by identifier
//! - `Proof_by_Topic.md`, `Definition_by_Topic.md` - alphabetical by title
//! - `Proof_by_Author.md`, `Definition_by_Author.md` - grouped by contributor
//!
//! and warns about documents not linked from `I/Table_of_Contents.md`.
//!
//! ## Architecture
//!
//! - [`record`] - Record types and header parsing
//! - [`scan`] - Collection directory listing
//! - [`store`] - In-memory record store with sorted views
//! - [`xref`] - Table of contents cross-reference check
//! - [`render`] - The by-number, by-topic and by-author renderers
//! - [`generate`] - The end-to-end pipeline
//! - [`output`] - Run report
//! - [`utils`] - Layout configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use bookindex::generate::{generate, GenerateOptions};
//! use bookindex::output::Reporter;
//! use bookindex::utils::BookLayout;
//! use std::path::Path;
//! use termcolor::ColorChoice;
//!
//! let layout = BookLayout::open(Path::new(".")).unwrap();
//! let mut reporter = Reporter::stdout(ColorChoice::Auto);
//! let summary = generate(&layout, GenerateOptions::default(), &mut reporter).unwrap();
//! println!("{} warnings", summary.warnings);
//! ```

pub mod generate;
pub mod output;
pub mod record;
pub mod render;
pub mod scan;
pub mod store;
pub mod utils;
pub mod xref;
