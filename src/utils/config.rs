use crate::record::Collection;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional layout file at the book root
pub const CONFIG_FILE: &str = "bookindex.json";

/// Directory layout of a book, relative to its root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookConfig {
    /// Directory holding proof documents
    #[serde(default = "default_proof_dir")]
    pub proof_dir: String,

    /// Directory holding definition documents
    #[serde(default = "default_definition_dir")]
    pub definition_dir: String,

    /// Directory receiving the generated index documents
    #[serde(default = "default_index_dir")]
    pub index_dir: String,

    /// Master index file name inside `index_dir`
    #[serde(default = "default_table_of_contents")]
    pub table_of_contents: String,

    /// Marker a file name must contain to count as a document
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_proof_dir() -> String {
    "P".to_string()
}

fn default_definition_dir() -> String {
    "D".to_string()
}

fn default_index_dir() -> String {
    "I".to_string()
}

fn default_table_of_contents() -> String {
    "Table_of_Contents.md".to_string()
}

fn default_extension() -> String {
    ".md".to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            proof_dir: default_proof_dir(),
            definition_dir: default_definition_dir(),
            index_dir: default_index_dir(),
            table_of_contents: default_table_of_contents(),
            extension: default_extension(),
        }
    }
}

impl BookConfig {
    /// Load `bookindex.json` from the book root, or defaults if absent
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: BookConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn collection_dir(&self, collection: Collection) -> &str {
        match collection {
            Collection::Proof => &self.proof_dir,
            Collection::Definition => &self.definition_dir,
        }
    }
}

/// A book root with its resolved layout
#[derive(Debug, Clone)]
pub struct BookLayout {
    pub root: PathBuf,
    pub config: BookConfig,
}

impl BookLayout {
    pub fn open(root: &Path) -> Result<Self> {
        let config = BookConfig::load(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(self.config.collection_dir(collection))
    }

    pub fn index_dir(&self) -> PathBuf {
        self.root.join(&self.config.index_dir)
    }

    pub fn table_of_contents(&self) -> PathBuf {
        self.index_dir().join(&self.config.table_of_contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_config_default() {
        let config = BookConfig::default();
        assert_eq!(config.collection_dir(Collection::Proof), "P");
        assert_eq!(config.collection_dir(Collection::Definition), "D");
        assert_eq!(config.index_dir, "I");
        assert_eq!(config.table_of_contents, "Table_of_Contents.md");
        assert_eq!(config.extension, ".md");
    }

    #[test]
    fn test_book_config_partial_json() {
        let json = r#"{"index_dir": "index"}"#;
        let config: BookConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.index_dir, "index");
        assert_eq!(config.proof_dir, "P");
    }

    #[test]
    fn test_book_config_empty_json() {
        let config: BookConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn test_layout_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let layout = BookLayout::open(dir.path()).unwrap();

        assert_eq!(layout.collection_dir(Collection::Proof), dir.path().join("P"));
        assert_eq!(
            layout.table_of_contents(),
            dir.path().join("I").join("Table_of_Contents.md")
        );
    }

    #[test]
    fn test_layout_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"definition_dir": "defs", "table_of_contents": "toc.md"}"#,
        )
        .unwrap();
        let layout = BookLayout::open(dir.path()).unwrap();

        assert_eq!(
            layout.collection_dir(Collection::Definition),
            dir.path().join("defs")
        );
        assert_eq!(layout.table_of_contents(), dir.path().join("I").join("toc.md"));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();
        assert!(BookLayout::open(dir.path()).is_err());
    }
}
