use super::{Removal, MSG_REMOVED};
use crate::error::Result;
use crate::store::DataStore;
use crate::view::{ClickTarget, Severity, View};
use chrono::{DateTime, Utc};
use tracing::info;

/// Handle a click on the list.
///
/// Only a row's delete control does anything. The store is updated first using
/// the row's isbn key, then the row leaves the table, so a storage failure
/// leaves both sides as they were.
pub fn run<S: DataStore>(
    store: &mut S,
    view: &mut View,
    target: ClickTarget,
    now: DateTime<Utc>,
) -> Result<Option<Removal>> {
    let ClickTarget::DeleteControl { row } = target else {
        return Ok(None);
    };
    let Some(isbn) = view.rows().get(row).map(|r| r.isbn.clone()) else {
        return Ok(None);
    };

    let removed = store.remove_by_isbn(&isbn)?;
    let Some(row) = view.remove_row(target) else {
        return Ok(None);
    };
    view.notify(MSG_REMOVED, Severity::Success, now);

    info!(isbn = %isbn, removed, "book removed");
    Ok(Some(Removal { row, removed }))
}
