//! Guest model
//!
//! An invited guest, their RSVP, how many people they bring, and whether they
//! showed up.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::choice::define_choice;
use super::de::null_as_default;
use super::ids::{EventId, GuestId};

define_choice! {
    /// Relationship of the guest to the host
    GuestCategory {
        Family => "family", "Family";
        Friends => "friends", "Friends";
        Colleagues => "colleagues", "Colleagues";
        Vip => "vip", "VIP";
        Vendors => "vendors", "Vendors";
        Other => "other", "Other";
    }
}

define_choice! {
    /// Guest's response to the invitation
    RsvpStatus {
        Pending => "pending", "Pending";
        Confirmed => "confirmed", "Confirmed";
        Declined => "declined", "Declined";
        Maybe => "maybe", "Maybe";
    }
}

impl Default for RsvpStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A guest invited to one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Unique identifier
    pub id: GuestId,

    /// Owning event
    pub event: EventId,

    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,

    pub category: GuestCategory,

    #[serde(default)]
    pub rsvp_status: RsvpStatus,

    /// Additional attendees this guest brings
    #[serde(default)]
    pub plus_ones: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub dietary_restrictions: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,

    #[serde(default)]
    pub invitation_sent: bool,

    #[serde(default)]
    pub invitation_sent_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub checked_in: bool,

    #[serde(default)]
    pub check_in_time: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Guest {
    /// Create a new guest with a pending RSVP
    pub fn new(
        id: impl Into<GuestId>,
        event: impl Into<EventId>,
        name: impl Into<String>,
        category: GuestCategory,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            event: event.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            category,
            rsvp_status: RsvpStatus::default(),
            plus_ones: 0,
            dietary_restrictions: String::new(),
            notes: String::new(),
            invitation_sent: false,
            invitation_sent_date: None,
            checked_in: false,
            check_in_time: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The guest plus everyone they bring
    pub fn total_attendees(&self) -> u32 {
        1 + self.plus_ones
    }

    pub fn is_confirmed(&self) -> bool {
        self.rsvp_status == RsvpStatus::Confirmed
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plus_ones > 0 {
            write!(f, "{} (+{})", self.name, self.plus_ones)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_attendees() {
        let mut guest = Guest::new(1, 1, "Nadia", GuestCategory::Family);
        assert_eq!(guest.total_attendees(), 1);
        guest.plus_ones = 2;
        assert_eq!(guest.total_attendees(), 3);
        assert_eq!(guest.to_string(), "Nadia (+2)");
    }

    #[test]
    fn test_deserialize_with_null_email() {
        let json = r#"{
            "id": 5,
            "event": 3,
            "name": "Karim",
            "email": null,
            "phone": "+8801700000000",
            "category": "vip",
            "rsvp_status": "confirmed",
            "plus_ones": 1,
            "checked_in": true,
            "created_at": "2025-02-01T08:00:00Z",
            "updated_at": "2025-02-01T08:00:00Z"
        }"#;

        let guest: Guest = serde_json::from_str(json).unwrap();
        assert_eq!(guest.email, "");
        assert_eq!(guest.category, GuestCategory::Vip);
        assert!(guest.is_confirmed());
        assert!(guest.checked_in);
        assert_eq!(guest.total_attendees(), 2);
    }
}
