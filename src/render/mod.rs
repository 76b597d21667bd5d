//! Index document rendering
//!
//! Each renderer is a pure function from a [`RecordStore`] to the full text
//! of one listing document. Writing happens separately so a document is
//! always replaced in a single write.

pub mod by_author;
pub mod by_number;
pub mod by_topic;

use crate::record::{Collection, Record};
use crate::store::RecordStore;
use anyhow::{Context, Result};
use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

/// The three listing orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Number,
    Topic,
    Author,
}

impl IndexKind {
    pub const ALL: [IndexKind; 3] = [IndexKind::Number, IndexKind::Topic, IndexKind::Author];

    pub fn name(&self) -> &'static str {
        match self {
            IndexKind::Number => "Number",
            IndexKind::Topic => "Topic",
            IndexKind::Author => "Author",
        }
    }

    /// Section number in the run report
    pub fn section(&self) -> usize {
        match self {
            IndexKind::Number => 2,
            IndexKind::Topic => 3,
            IndexKind::Author => 4,
        }
    }
}

/// A rendered listing document, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    pub collection: Collection,
    pub kind: IndexKind,
    pub content: String,
}

impl IndexDocument {
    /// Page title, e.g. `Proof by Number`
    pub fn title(&self) -> String {
        page_title(self.collection, self.kind)
    }

    /// Output file name, e.g. `Proof_by_Number.md`
    pub fn file_name(&self) -> String {
        format!("{}.md", self.title().replace(' ', "_"))
    }

    /// Replace the document in `index_dir` with the rendered content
    pub fn write_to(&self, index_dir: &Path) -> Result<PathBuf> {
        let path = index_dir.join(self.file_name());
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

pub fn page_title(collection: Collection, kind: IndexKind) -> String {
    format!("{} by {}", collection.display_name(), kind.name())
}

/// Render one listing of `store`
pub fn render(store: &RecordStore, kind: IndexKind) -> Result<IndexDocument, fmt::Error> {
    let collection = store.collection();
    let mut content = front_matter(&page_title(collection, kind));
    match kind {
        IndexKind::Number => by_number::render_into(&mut content, store)?,
        IndexKind::Topic => by_topic::render_into(&mut content, store)?,
        IndexKind::Author => by_author::render_into(&mut content, store)?,
    }
    Ok(IndexDocument {
        collection,
        kind,
        content,
    })
}

fn front_matter(title: &str) -> String {
    format!("---\nlayout: page\ntitle: \"{}\"\n---\n\n", title)
}

/// `- [title](/P/shortcut)`
fn write_list_item(out: &mut String, collection: Collection, record: &Record) -> fmt::Result {
    writeln!(
        out,
        "- [{}]({})",
        record.title,
        collection.link(&record.shortcut)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{record, store};

    #[test]
    fn test_file_names() {
        let s = store(Collection::Definition, vec![]);
        let names: Vec<_> = IndexKind::ALL
            .iter()
            .map(|&kind| render(&s, kind).unwrap().file_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "Definition_by_Number.md",
                "Definition_by_Topic.md",
                "Definition_by_Author.md"
            ]
        );
    }

    #[test]
    fn test_every_document_starts_with_front_matter() {
        let s = store(
            Collection::Proof,
            vec![record("P1", "bayes", "Bayes' theorem", "alice")],
        );
        for kind in IndexKind::ALL {
            let doc = render(&s, kind).unwrap();
            let expected = format!("---\nlayout: page\ntitle: \"Proof by {}\"\n---\n\n", kind.name());
            assert!(doc.content.starts_with(&expected), "{}", doc.content);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = store(
            Collection::Proof,
            vec![
                record("P2", "b", "Same", "x"),
                record("P1", "a", "Same", "y"),
            ],
        );
        let b = store(
            Collection::Proof,
            vec![
                record("P1", "a", "Same", "y"),
                record("P2", "b", "Same", "x"),
            ],
        );
        for kind in IndexKind::ALL {
            assert_eq!(render(&a, kind).unwrap(), render(&b, kind).unwrap());
        }
    }

    #[test]
    fn test_write_replaces_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Proof_by_Topic.md");
        fs::write(&path, "stale content that is much longer than the new one\n".repeat(20)).unwrap();

        let s = store(Collection::Proof, vec![record("P1", "a", "Alpha", "x")]);
        let doc = render(&s, IndexKind::Topic).unwrap();
        let written = doc.write_to(dir.path()).unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), doc.content);
    }
}
