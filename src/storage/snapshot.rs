//! JSON snapshot store
//!
//! Reads the four collections from `data/*.json`. Each file holds either a bare
//! JSON array or the backend's paginated envelope `{"results": [...]}`, so a
//! response body saved straight from the API can be dropped in unchanged.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::paths::EventDeskPaths;
use crate::error::{EventDeskError, EventDeskResult};
use crate::models::{BudgetItem, Event, Guest, Vendor};

use super::file_io::{read_json_required, write_json_atomic};
use super::{CollectionLoader, Collections};

/// Collection loader backed by JSON files in the data directory
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    paths: EventDeskPaths,
}

impl SnapshotStore {
    pub fn new(paths: EventDeskPaths) -> Self {
        Self { paths }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &EventDeskPaths {
        &self.paths
    }

    /// Create the data directory and empty snapshot files that don't exist yet
    pub fn initialize(&self) -> EventDeskResult<()> {
        self.paths.ensure_directories()?;

        for path in self.snapshot_files() {
            if !path.exists() {
                write_json_atomic(&path, &Vec::<Value>::new())?;
            }
        }

        Ok(())
    }

    /// Replace all four snapshot files
    pub fn save_all(&self, collections: &Collections) -> EventDeskResult<()> {
        write_json_atomic(self.paths.events_file(), &collections.events)?;
        write_json_atomic(self.paths.budget_items_file(), &collections.budget_items)?;
        write_json_atomic(self.paths.guests_file(), &collections.guests)?;
        write_json_atomic(self.paths.vendors_file(), &collections.vendors)?;
        Ok(())
    }

    fn snapshot_files(&self) -> [PathBuf; 4] {
        [
            self.paths.events_file(),
            self.paths.budget_items_file(),
            self.paths.guests_file(),
            self.paths.vendors_file(),
        ]
    }
}

impl CollectionLoader for SnapshotStore {
    fn events(&self) -> EventDeskResult<Vec<Event>> {
        read_collection(&self.paths.events_file())
    }

    fn budget_items(&self) -> EventDeskResult<Vec<BudgetItem>> {
        read_collection(&self.paths.budget_items_file())
    }

    fn guests(&self) -> EventDeskResult<Vec<Guest>> {
        read_collection(&self.paths.guests_file())
    }

    fn vendors(&self) -> EventDeskResult<Vec<Vendor>> {
        read_collection(&self.paths.vendors_file())
    }
}

/// Read one collection file; a missing file is an empty collection
fn read_collection<T: DeserializeOwned>(path: &Path) -> EventDeskResult<Vec<T>> {
    if !path.exists() {
        warn!(path = %path.display(), "snapshot file missing, treating as empty");
        return Ok(Vec::new());
    }

    let raw: Value = read_json_required(path)?;
    let records = unwrap_envelope(raw).map_err(|shape| {
        EventDeskError::Storage(format!(
            "{} must contain a JSON array or an object with \"results\", found {}",
            path.display(),
            shape
        ))
    })?;

    let items: Vec<T> = serde_json::from_value(records).map_err(|e| {
        EventDeskError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), count = items.len(), "loaded snapshot");
    Ok(items)
}

fn unwrap_envelope(raw: Value) -> Result<Value, &'static str> {
    match raw {
        Value::Array(_) => Ok(raw),
        Value::Object(mut map) => match map.remove("results") {
            Some(results @ Value::Array(_)) => Ok(results),
            Some(_) => Err("a non-array \"results\" field"),
            None => Err("an object without \"results\""),
        },
        Value::Null => Ok(Value::Array(Vec::new())),
        _ => Err("a scalar"),
    }
}
