//! Table of contents cross-reference check
//!
//! Every record must be linked from the master index as
//! `(/<tag>/<shortcut>)`. The check is a literal substring search per line.

use crate::record::{Collection, Record};
use crate::store::RecordStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Lines of the master index document
#[derive(Debug, Clone)]
pub struct TableOfContents {
    lines: Vec<String>,
}

impl TableOfContents {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::from_text(&text))
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Whether any line links to `shortcut` in `collection`
    pub fn links_to(&self, collection: Collection, shortcut: &str) -> bool {
        let target = format!("({})", collection.link(shortcut));
        self.lines.iter().any(|line| line.contains(&target))
    }

    /// Check every record of `store` against the index
    pub fn check<'a>(&self, store: &'a RecordStore) -> CrossRefReport<'a> {
        let collection = store.collection();
        let mut report = CrossRefReport {
            collection,
            included: 0,
            missing: Vec::new(),
        };

        for record in store.by_number() {
            if self.links_to(collection, &record.shortcut) {
                report.included += 1;
            } else {
                report.missing.push(record);
            }
        }

        report
    }
}

/// Outcome of checking one collection
#[derive(Debug)]
pub struct CrossRefReport<'a> {
    pub collection: Collection,
    pub included: usize,
    /// Unlinked records, ascending by number
    pub missing: Vec<&'a Record>,
}

impl CrossRefReport<'_> {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// One warning line per unlinked record
    pub fn warnings(&self) -> Vec<String> {
        self.missing
            .iter()
            .map(|r| {
                format!(
                    "{} \"{}\" is not in table of contents!",
                    self.collection.noun(),
                    r.shortcut
                )
            })
            .collect()
    }
}
