//! Alphabetical list grouped by the first character of the title

use super::write_list_item;
use crate::store::RecordStore;
use std::fmt::{self, Write as _};

pub(super) fn render_into(out: &mut String, store: &RecordStore) -> fmt::Result {
    let collection = store.collection();
    out.push('\n');

    let mut current: Option<char> = None;
    for record in store.by_title() {
        let initial = record.initial();
        if current.is_none() || initial != current {
            if current.is_some() {
                out.push('\n');
            }
            // Titles are never empty after parsing
            if let Some(c) = initial {
                write!(out, "### {}\n\n", c)?;
            }
            current = initial;
        }
        write_list_item(out, collection, record)?;
    }
    Ok(())
}
