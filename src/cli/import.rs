//! CLI command for importing a combined JSON export

use std::path::Path;

use tracing::info;

use crate::error::{EventDeskError, EventDeskResult};
use crate::export::read_collections_json;
use crate::storage::{Collections, SnapshotStore};

/// Replace the local snapshots with the contents of `file`
pub fn handle_import(store: &SnapshotStore, file: &Path) -> EventDeskResult<Collections> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        EventDeskError::Io(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let collections = read_collections_json(&contents)?;
    store.save_all(&collections)?;

    info!(
        file = %file.display(),
        events = collections.events.len(),
        budget_items = collections.budget_items.len(),
        guests = collections.guests.len(),
        vendors = collections.vendors.len(),
        "imported snapshot"
    );

    println!(
        "Imported {} events, {} budget items, {} guests, {} vendors",
        collections.events.len(),
        collections.budget_items.len(),
        collections.guests.len(),
        collections.vendors.len()
    );

    Ok(collections)
}
