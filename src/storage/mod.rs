//! Storage layer for EventDesk
//!
//! The report builders never fetch anything themselves. A [`CollectionLoader`]
//! delivers the four collections as flat lists, and the resulting
//! [`Collections`] snapshot is handed to reports by reference.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json_required, write_json_atomic};
pub use snapshot::SnapshotStore;

use serde::{Deserialize, Serialize};

use crate::error::EventDeskResult;
use crate::models::{BudgetItem, Event, EventId, Guest, Vendor};
use crate::reports::filter::scope_to_event;

/// Source of the four collections the reports are computed from
pub trait CollectionLoader {
    fn events(&self) -> EventDeskResult<Vec<Event>>;

    fn budget_items(&self) -> EventDeskResult<Vec<BudgetItem>>;

    fn guests(&self) -> EventDeskResult<Vec<Guest>>;

    fn vendors(&self) -> EventDeskResult<Vec<Vendor>>;

    /// Load every collection into one snapshot
    fn load_all(&self) -> EventDeskResult<Collections> {
        Ok(Collections {
            events: self.events()?,
            budget_items: self.budget_items()?,
            guests: self.guests()?,
            vendors: self.vendors()?,
        })
    }
}

/// An owned snapshot of everything the planner has recorded
///
/// Also the shape of a combined export file accepted by `import`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collections {
    #[serde(default)]
    pub events: Vec<Event>,

    #[serde(default)]
    pub budget_items: Vec<BudgetItem>,

    #[serde(default)]
    pub guests: Vec<Guest>,

    #[serde(default)]
    pub vendors: Vec<Vendor>,
}

impl Collections {
    /// Find an event by id
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Budget items belonging to one event, in their original order
    pub fn budget_items_for(&self, id: EventId) -> Vec<&BudgetItem> {
        scope_to_event(&self.budget_items, id)
    }

    /// Guests belonging to one event, in their original order
    pub fn guests_for(&self, id: EventId) -> Vec<&Guest> {
        scope_to_event(&self.guests, id)
    }

    /// True when no collection holds any record
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
            && self.budget_items.is_empty()
            && self.guests.is_empty()
            && self.vendors.is_empty()
    }
}

impl CollectionLoader for Collections {
    fn events(&self) -> EventDeskResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn budget_items(&self) -> EventDeskResult<Vec<BudgetItem>> {
        Ok(self.budget_items.clone())
    }

    fn guests(&self) -> EventDeskResult<Vec<Guest>> {
        Ok(self.guests.clone())
    }

    fn vendors(&self) -> EventDeskResult<Vec<Vendor>> {
        Ok(self.vendors.clone())
    }

    fn load_all(&self) -> EventDeskResult<Collections> {
        Ok(self.clone())
    }
}
