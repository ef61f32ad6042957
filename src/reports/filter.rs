//! Event scoping
//!
//! Budget items and guests each belong to exactly one event; the per-event
//! report only ever sees the records whose owning event matches.

use crate::models::{BudgetItem, EventId, Guest};

/// A record owned by a single event
pub trait EventScoped {
    fn event_id(&self) -> EventId;
}

impl EventScoped for BudgetItem {
    fn event_id(&self) -> EventId {
        self.event
    }
}

impl EventScoped for Guest {
    fn event_id(&self) -> EventId {
        self.event
    }
}

/// Records belonging to `event`, in their original relative order
///
/// An id that matches nothing (including negative ids) yields an empty list.
pub fn scope_to_event<T: EventScoped>(records: &[T], event: EventId) -> Vec<&T> {
    records.iter().filter(|r| r.event_id() == event).collect()
}
