//! Table of records ordered by identifier number

use crate::store::RecordStore;
use std::fmt::{self, Write as _};

// Both collections share the `Theorem` column label
const TABLE_HEADER: &str = "| ID | Shortcut | Theorem | Author | Date |\n\
                            |:-- |:-------- |:------- |:------ |:---- |\n";

pub(super) fn render_into(out: &mut String, store: &RecordStore) -> fmt::Result {
    let collection = store.collection();

    out.push('\n');
    out.push_str(TABLE_HEADER);

    for record in store.by_number() {
        writeln!(
            out,
            "| {} | {} | [{}]({}) | {} | {} |",
            record.id,
            record.shortcut,
            record.title,
            collection.link(&record.shortcut),
            record.username,
            record.day()
        )?;
    }
    Ok(())
}
