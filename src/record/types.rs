use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Timestamp format of the `date:` header field
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date format used in rendered index rows
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// The two independent document collections of the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Proof,
    Definition,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Proof, Collection::Definition];

    /// Header marker carrying the document identifier
    pub fn id_marker(&self) -> &'static str {
        match self {
            Collection::Proof => "proof_id:",
            Collection::Definition => "def_id:",
        }
    }

    /// Letter used as source directory name and public link prefix
    pub fn tag(&self) -> char {
        match self {
            Collection::Proof => 'P',
            Collection::Definition => 'D',
        }
    }

    /// Name used in index titles and file names
    pub fn display_name(&self) -> &'static str {
        match self {
            Collection::Proof => "Proof",
            Collection::Definition => "Definition",
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            Collection::Proof => "proof",
            Collection::Definition => "definition",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Collection::Proof => "proofs",
            Collection::Definition => "definitions",
        }
    }

    /// Noun agreeing with `count`
    pub fn noun_for(&self, count: usize) -> &'static str {
        if count == 1 { self.noun() } else { self.plural() }
    }

    /// Public link target of a document, e.g. `/P/bayes-th`
    pub fn link(&self, shortcut: &str) -> String {
        format!("/{}/{}", self.tag(), shortcut)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Document identifier: a single letter prefix followed by an integer (`P12`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId {
    raw: String,
    number: u32,
}

impl RecordId {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Identifier does not have the letter + integer shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier \"{0}\"")]
pub struct InvalidId(pub String);

impl FromStr for RecordId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let prefix = chars.next().ok_or_else(|| InvalidId(s.to_string()))?;
        if !prefix.is_ascii_alphabetic() {
            return Err(InvalidId(s.to_string()));
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidId(s.to_string()));
        }
        let number = digits.parse().map_err(|_| InvalidId(s.to_string()))?;
        Ok(Self {
            raw: s.to_string(),
            number,
        })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parsed header of one proof or definition document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub shortcut: String,
    pub title: String,
    pub author: String,
    /// Attribution handle, never empty
    pub username: String,
    pub date: NaiveDateTime,
}

impl Record {
    /// First character of the title, the by-topic group key
    pub fn initial(&self) -> Option<char> {
        self.title.chars().next()
    }

    pub fn day(&self) -> String {
        self.date.format(DAY_FORMAT).to_string()
    }
}
