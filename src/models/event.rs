//! Event model
//!
//! An event being planned: its category, date, venue, allocated budget, and
//! lifecycle status.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::choice::define_choice;
use super::de::null_as_default;
use super::ids::EventId;
use super::money::Money;

define_choice! {
    /// Kind of event
    EventCategory {
        Wedding => "wedding", "Wedding";
        Corporate => "corporate", "Corporate Event";
        Community => "community", "Community Event";
        Social => "social", "Social Event";
        Birthday => "birthday", "Birthday Party";
        Anniversary => "anniversary", "Anniversary";
        Conference => "conference", "Conference";
        Seminar => "seminar", "Seminar";
        Other => "other", "Other";
    }
}

define_choice! {
    /// Lifecycle status of an event
    EventStatus {
        Planning => "planning", "Planning";
        Confirmed => "confirmed", "Confirmed";
        Active => "active", "Active";
        Completed => "completed", "Completed";
        Cancelled => "cancelled", "Cancelled";
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Planning
    }
}

impl EventStatus {
    /// Position in the planning sequence planning < confirmed < active < completed
    ///
    /// Cancelled and unrecognized statuses are not part of the sequence.
    pub fn stage(&self) -> Option<u32> {
        match self {
            Self::Planning => Some(1),
            Self::Confirmed => Some(2),
            Self::Active => Some(3),
            Self::Completed => Some(4),
            Self::Cancelled | Self::Unrecognized(_) => None,
        }
    }

    /// Number of stages in the planning sequence
    pub const STAGE_COUNT: u32 = 4;
}

/// An event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    pub id: EventId,

    /// Event name
    pub name: String,

    pub category: EventCategory,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Date the event takes place
    pub date: NaiveDate,

    /// Start time, when known
    #[serde(default)]
    pub time: Option<NaiveTime>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub venue: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,

    /// Total allocated funds
    #[serde(default)]
    pub budget: Money,

    #[serde(default)]
    pub expected_guests: u32,

    #[serde(default)]
    pub status: EventStatus,

    #[serde(default, deserialize_with = "null_as_default")]
    pub special_requirements: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_person: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_phone: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_email: String,

    /// When the event was created
    pub created_at: DateTime<Utc>,

    /// When the event was last modified
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new event in the planning stage
    pub fn new(
        id: impl Into<EventId>,
        name: impl Into<String>,
        category: EventCategory,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            date,
            time: None,
            venue: String::new(),
            address: String::new(),
            budget: Money::zero(),
            expected_guests: 0,
            status: EventStatus::default(),
            special_requirements: String::new(),
            contact_person: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whole days from `today` until the event (negative once it has passed)
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }

    /// Confirmed or underway
    pub fn is_active(&self) -> bool {
        matches!(self.status, EventStatus::Confirmed | EventStatus::Active)
    }

    pub fn is_completed(&self) -> bool {
        self.status == EventStatus::Completed
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_event_defaults() {
        let event = Event::new(1, "Gala", EventCategory::Corporate, date(2025, 6, 1));
        assert_eq!(event.status, EventStatus::Planning);
        assert!(event.budget.is_zero());
        assert_eq!(event.to_string(), "Gala - 2025-06-01");
    }

    #[test]
    fn test_days_until() {
        let event = Event::new(1, "Gala", EventCategory::Corporate, date(2025, 6, 1));
        assert_eq!(event.days_until(date(2025, 5, 22)), 10);
        assert_eq!(event.days_until(date(2025, 6, 1)), 0);
        assert_eq!(event.days_until(date(2025, 6, 4)), -3);
    }

    #[test]
    fn test_active_statuses() {
        let mut event = Event::new(1, "Gala", EventCategory::Corporate, date(2025, 6, 1));
        assert!(!event.is_active());
        event.status = EventStatus::Confirmed;
        assert!(event.is_active());
        event.status = EventStatus::Active;
        assert!(event.is_active());
        event.status = EventStatus::Completed;
        assert!(!event.is_active());
        assert!(event.is_completed());
    }

    #[test]
    fn test_status_stages() {
        assert_eq!(EventStatus::Planning.stage(), Some(1));
        assert_eq!(
            EventStatus::Completed.stage(),
            Some(EventStatus::STAGE_COUNT)
        );
        assert_eq!(EventStatus::Cancelled.stage(), None);
        assert_eq!(EventStatus::from("postponed").stage(), None);
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": 3,
            "name": "Rahman Wedding",
            "category": "wedding",
            "description": "",
            "date": "2025-12-20",
            "time": "18:30:00",
            "venue": "Radisson Blu",
            "address": null,
            "budget": "500000.00",
            "expected_guests": 300,
            "status": "confirmed",
            "contact_email": null,
            "created_at": "2025-01-10T09:15:00.123456Z",
            "updated_at": "2025-02-01T10:00:00Z"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, EventId::new(3));
        assert_eq!(event.category, EventCategory::Wedding);
        assert_eq!(event.status, EventStatus::Confirmed);
        assert_eq!(event.budget, Money::from_units(500000));
        assert_eq!(event.time, NaiveTime::from_hms_opt(18, 30, 0));
        assert_eq!(event.address, "");
    }

    #[test]
    fn test_unknown_category_survives_round_trip() {
        let mut event = Event::new(
            1,
            "Launch",
            EventCategory::from("product_launch"),
            date(2025, 1, 1),
        );
        event.status = EventStatus::from("postponed");

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.category.as_str(), "product_launch");
        assert_eq!(back.status.as_str(), "postponed");
    }
}
