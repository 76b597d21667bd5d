//! Metadata header parsing
//!
//! Documents start with `key: value` lines. Only lines beginning with one of
//! the known markers are read; everything else is ignored, so the header may
//! be interleaved with other content. A repeated marker overwrites the
//! earlier value.

use crate::record::types::{Collection, DATE_FORMAT, InvalidId, Record, RecordId};
use chrono::NaiveDateTime;
use thiserror::Error;

/// Username used when neither `username:` nor `author:` carries a value
pub const UNKNOWN_USER: &str = "unknown";

const SHORTCUT: &str = "shortcut:";
const TITLE: &str = "title:";
const AUTHOR: &str = "author:";
const USERNAME: &str = "username:";
const DATE: &str = "date:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("missing header field `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    #[error("date \"{0}\" does not match YYYY-MM-DD HH:MM:SS")]
    InvalidDate(String),
}

/// Field values collected during the header pass
#[derive(Debug, Default)]
struct HeaderFields {
    id: Option<String>,
    shortcut: Option<String>,
    title: Option<String>,
    author: Option<String>,
    username: Option<String>,
    date: Option<String>,
}

impl HeaderFields {
    fn accept(&mut self, id_marker: &str, line: &str) {
        let slot = if let Some(rest) = line.strip_prefix(id_marker) {
            Some((&mut self.id, rest))
        } else if let Some(rest) = line.strip_prefix(SHORTCUT) {
            Some((&mut self.shortcut, rest))
        } else if let Some(rest) = line.strip_prefix(TITLE) {
            Some((&mut self.title, rest))
        } else if let Some(rest) = line.strip_prefix(AUTHOR) {
            Some((&mut self.author, rest))
        } else if let Some(rest) = line.strip_prefix(USERNAME) {
            Some((&mut self.username, rest))
        } else {
            line.strip_prefix(DATE).map(|rest| (&mut self.date, rest))
        };

        if let Some((field, rest)) = slot {
            *field = Some(field_value(rest));
        }
    }

    fn into_record(self) -> Result<Record, HeaderError> {
        let id: RecordId = required(self.id, "id")?.parse()?;
        let shortcut = required(self.shortcut, "shortcut")?;
        let title = required(self.title, "title")?;
        let raw_date = required(self.date, "date")?;
        let date = NaiveDateTime::parse_from_str(&raw_date, DATE_FORMAT)
            .map_err(|_| HeaderError::InvalidDate(raw_date.clone()))?;

        let author = self.author.unwrap_or_default();
        let username = resolve_username(self.username.as_deref(), &author);

        Ok(Record {
            id,
            shortcut,
            title,
            author,
            username,
            date,
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, HeaderError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(HeaderError::MissingField(name))
}

/// Value after a marker: one separating space and quotes removed
fn field_value(rest: &str) -> String {
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    rest.trim_end_matches(['\r', '\n']).replace('"', "")
}

/// Username falls back to the author, then to [`UNKNOWN_USER`]
pub fn resolve_username(username: Option<&str>, author: &str) -> String {
    match username {
        Some(name) if !name.is_empty() => name.to_string(),
        _ if !author.is_empty() => author.to_string(),
        _ => UNKNOWN_USER.to_string(),
    }
}

/// Parse the metadata header of one document of `collection`
pub fn parse_header(text: &str, collection: Collection) -> Result<Record, HeaderError> {
    let id_marker = collection.id_marker();
    let mut fields = HeaderFields::default();

    for line in text.lines() {
        fields.accept(id_marker, line);
    }

    fields.into_record()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROOF: &str = r#"---
layout: proof
mathjax: true

author: "Joram Soch"
affiliation: "BCCN Berlin"
e_mail: "joram.soch@bccn-berlin.de"
date: 2019-09-27 12:55:00

title: "Bayes' theorem"
chapter: "General Theorems"

proof_id: "P4"
shortcut: "bayes-th"
username: "JoramSoch"
---


**Theorem:** Let $A$ and $B$ be arbitrary statements.
"#;

    #[test]
    fn test_parse_proof_header() {
        let record = parse_header(PROOF, Collection::Proof).unwrap();
        assert_eq!(record.id.as_str(), "P4");
        assert_eq!(record.id.number(), 4);
        assert_eq!(record.shortcut, "bayes-th");
        assert_eq!(record.title, "Bayes' theorem");
        assert_eq!(record.author, "Joram Soch");
        assert_eq!(record.username, "JoramSoch");
        assert_eq!(record.day(), "2019-09-27");
    }

    #[test]
    fn test_definition_uses_def_id() {
        let text = "def_id: \"D3\"\nshortcut: \"ent\"\ntitle: \"Entropy\"\ndate: 2020-01-02 03:04:05\n";
        let record = parse_header(text, Collection::Definition).unwrap();
        assert_eq!(record.id.as_str(), "D3");

        // proof_id is not the marker for definitions
        let err = parse_header(&text.replace("def_id", "proof_id"), Collection::Definition);
        assert_eq!(err, Err(HeaderError::MissingField("id")));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let text = "proof_id: P1\ntitle: First\nshortcut: a\ntitle: Second\ndate: 2020-01-01 00:00:00\n";
        let record = parse_header(text, Collection::Proof).unwrap();
        assert_eq!(record.title, "Second");
    }

    #[test]
    fn test_markers_must_start_the_line() {
        let text = "proof_id: P1\nshortcut: a\ntitle: Real\n  title: Indented\nsubtitle: Other\ndate: 2020-01-01 00:00:00\n";
        let record = parse_header(text, Collection::Proof).unwrap();
        assert_eq!(record.title, "Real");
    }

    #[test]
    fn test_username_falls_back_to_author() {
        let text = "proof_id: P1\nshortcut: a\ntitle: T\nauthor: \"Ann Author\"\nusername: \"\"\ndate: 2020-01-01 00:00:00\n";
        let record = parse_header(text, Collection::Proof).unwrap();
        assert_eq!(record.username, "Ann Author");
    }

    #[test]
    fn test_username_falls_back_to_unknown() {
        let text = "proof_id: P1\nshortcut: a\ntitle: T\nauthor: \"\"\ndate: 2020-01-01 00:00:00\n";
        let record = parse_header(text, Collection::Proof).unwrap();
        assert_eq!(record.username, UNKNOWN_USER);
        assert_eq!(record.author, "");
    }

    #[test]
    fn test_resolve_username() {
        assert_eq!(resolve_username(Some("bob"), "Bob B"), "bob");
        assert_eq!(resolve_username(Some(""), "Bob B"), "Bob B");
        assert_eq!(resolve_username(None, "Bob B"), "Bob B");
        assert_eq!(resolve_username(None, ""), "unknown");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "proof_id: P2\r\nshortcut: \"x\"\r\ntitle: \"T\"\r\ndate: 2021-05-06 07:08:09\r\n";
        let record = parse_header(text, Collection::Proof).unwrap();
        assert_eq!(record.shortcut, "x");
        assert_eq!(record.day(), "2021-05-06");
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let text = "proof_id: P1\nshortcut: a\ntitle: T\ndate: 2020-01-01\n";
        let err = parse_header(text, Collection::Proof).unwrap_err();
        assert_eq!(err, HeaderError::InvalidDate("2020-01-01".to_string()));
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let text = "proof_id: P1\ntitle: T\ndate: 2020-01-01 00:00:00\n";
        assert_eq!(
            parse_header(text, Collection::Proof),
            Err(HeaderError::MissingField("shortcut"))
        );

        let text = "proof_id: P1\nshortcut: a\ntitle: \"\"\ndate: 2020-01-01 00:00:00\n";
        assert_eq!(
            parse_header(text, Collection::Proof),
            Err(HeaderError::MissingField("title"))
        );
    }

    #[test]
    fn test_invalid_identifier() {
        let text = "proof_id: X\nshortcut: a\ntitle: T\ndate: 2020-01-01 00:00:00\n";
        assert!(matches!(
            parse_header(text, Collection::Proof),
            Err(HeaderError::InvalidId(_))
        ));
    }
}
