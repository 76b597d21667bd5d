//! Records grouped under their contributor

use super::write_list_item;
use crate::store::RecordStore;
use std::fmt::{self, Write as _};

pub(super) fn render_into(out: &mut String, store: &RecordStore) -> fmt::Result {
    let collection = store.collection();

    for username in store.usernames() {
        let records = store.by_user(username);
        write!(
            out,
            "\n### {} ({} {})\n\n",
            username,
            records.len(),
            collection.noun_for(records.len())
        )?;
        for record in records {
            write_list_item(out, collection, record)?;
        }
    }
    Ok(())
}
