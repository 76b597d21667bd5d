//! In-memory record store for one collection
//!
//! The store keeps records in insertion order and hands out explicitly
//! sorted views. Nothing downstream depends on insertion order.

use crate::record::{Collection, Record};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Two identifiers with the same number, e.g. `P1` and `P01`
    #[error("duplicate {collection} identifier {id} (number {number} is taken by {existing})")]
    DuplicateId {
        collection: Collection,
        id: String,
        number: u32,
        existing: String,
    },
}

/// All records of one collection, keyed by identifier number
#[derive(Debug, Clone)]
pub struct RecordStore {
    collection: Collection,
    records: Vec<Record>,
    by_number: HashMap<u32, usize>,
}

impl RecordStore {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            records: Vec::new(),
            by_number: HashMap::new(),
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn insert(&mut self, record: Record) -> Result<(), StoreError> {
        let number = record.id.number();
        if let Some(&idx) = self.by_number.get(&number) {
            return Err(StoreError::DuplicateId {
                collection: self.collection,
                id: record.id.to_string(),
                number,
                existing: self.records[idx].id.to_string(),
            });
        }
        self.by_number.insert(number, self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ascending by the numeric part of their identifier
    pub fn by_number(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.id.number());
        sorted
    }

    /// Records ascending by title, ties broken by identifier number
    pub fn by_title(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sort_by_title(&mut sorted);
        sorted
    }

    /// Distinct usernames, ascending
    pub fn usernames(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.username.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Records attributed to `username`, ascending by title
    pub fn by_user(&self, username: &str) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self
            .records
            .iter()
            .filter(|r| r.username == username)
            .collect();
        sort_by_title(&mut sorted);
        sorted
    }
}

fn sort_by_title(records: &mut [&Record]) {
    records.sort_by(|a, b| {
        a.title
            .cmp(&b.title)
            .then_with(|| a.id.number().cmp(&b.id.number()))
    });
}
