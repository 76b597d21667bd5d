//! The generator pipeline: scan, parse, check, render, write.

use crate::output::Reporter;
use crate::record::{Collection, Record, parse_header};
use crate::render::{self, IndexKind};
use crate::scan::list_documents;
use crate::store::RecordStore;
use crate::utils::BookLayout;
use crate::xref::TableOfContents;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use termcolor::WriteColor;

const GENERATOR_NAME: &str = "Book Index Generator";

/// Options for one generator run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Parse and cross-check only, leave the index documents untouched
    pub check_only: bool,
}

/// What a run did
#[derive(Debug, Default)]
pub struct RunSummary {
    pub proofs: usize,
    pub definitions: usize,
    /// Records missing from the table of contents
    pub warnings: usize,
    pub written: Vec<PathBuf>,
}

/// Both collections of a book
#[derive(Debug, Clone)]
pub struct Book {
    pub proofs: RecordStore,
    pub definitions: RecordStore,
}

impl Book {
    pub fn load(layout: &BookLayout) -> Result<Self> {
        Ok(Self {
            proofs: load_collection(layout, Collection::Proof)?,
            definitions: load_collection(layout, Collection::Definition)?,
        })
    }

    pub fn store(&self, collection: Collection) -> &RecordStore {
        match collection {
            Collection::Proof => &self.proofs,
            Collection::Definition => &self.definitions,
        }
    }
}

/// Parse one document file
pub fn load_record(path: &Path, collection: Collection) -> Result<Record> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_header(&text, collection)
        .with_context(|| format!("Invalid header in {}", path.display()))
}

/// Parse every document of `collection` into a fresh store
pub fn load_collection(layout: &BookLayout, collection: Collection) -> Result<RecordStore> {
    let dir = layout.collection_dir(collection);
    let mut store = RecordStore::new(collection);

    for path in list_documents(&dir, &layout.config.extension)? {
        let record = load_record(&path, collection)?;
        store
            .insert(record)
            .with_context(|| format!("Rejected {}", path.display()))?;
    }

    Ok(store)
}

/// Run the whole pipeline for the book at `layout`
pub fn generate<W: WriteColor>(
    layout: &BookLayout,
    options: GenerateOptions,
    reporter: &mut Reporter<W>,
) -> Result<RunSummary> {
    let book = Book::load(layout)?;

    reporter.banner(GENERATOR_NAME)?;
    for collection in Collection::ALL {
        reporter.item(&format!(
            "{} files found in {} directory!",
            book.store(collection).len(),
            collection.noun()
        ))?;
    }

    let mut summary = RunSummary {
        proofs: book.proofs.len(),
        definitions: book.definitions.len(),
        ..RunSummary::default()
    };

    // 1. Table of contents
    let toc_path = layout.table_of_contents();
    reporter.section("1. ", &file_label(&toc_path))?;
    let toc = TableOfContents::load(&toc_path)?;
    for collection in Collection::ALL {
        let store = book.store(collection);
        let report = toc.check(store);
        for warning in report.warnings() {
            reporter.warning(&warning)?;
        }
        summary.warnings += report.missing.len();
        if report.is_complete() {
            reporter.success(&format!(
                "{} {} found in table of contents!",
                report.included,
                collection.plural()
            ))?;
        }
    }

    if options.check_only {
        reporter.flush()?;
        return Ok(summary);
    }

    // 2-4. Listings, proofs before definitions within each kind
    let index_dir = layout.index_dir();
    for kind in IndexKind::ALL {
        for collection in Collection::ALL {
            let document = render::render(book.store(collection), kind)
                .with_context(|| format!("Failed to render {}", render::page_title(collection, kind)))?;
            reporter.section(&section_label(kind, collection), &document.file_name())?;
            let path = document.write_to(&index_dir)?;
            reporter.success("successfully written to disk!")?;
            summary.written.push(path);
        }
    }

    reporter.flush()?;
    Ok(summary)
}

/// `2a.` for proofs by number, `3b.` for definitions by topic, ...
fn section_label(kind: IndexKind, collection: Collection) -> String {
    let letter = match collection {
        Collection::Proof => 'a',
        Collection::Definition => 'b',
    };
    format!("{}{}.", kind.section(), letter)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
