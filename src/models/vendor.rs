//! Vendor model
//!
//! The planner's vendor directory: who provides what, at what price level,
//! and how well they have performed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::choice::define_choice;
use super::de::{lenient_f64, null_as_default};
use super::ids::VendorId;

define_choice! {
    /// Service a vendor provides
    VendorCategory {
        Catering => "catering", "Catering";
        Photography => "photography", "Photography";
        Decoration => "decoration", "Decoration";
        Entertainment => "entertainment", "Entertainment";
        Venue => "venue", "Venue";
        Transportation => "transportation", "Transportation";
        Flowers => "flowers", "Flowers";
        Makeup => "makeup", "Makeup & Beauty";
        Sound => "sound", "Sound & Lighting";
        Security => "security", "Security";
        Other => "other", "Other";
    }
}

define_choice! {
    /// Price level of a vendor
    PriceRange {
        Budget => "budget", "Budget";
        MidRange => "mid_range", "Mid Range";
        Premium => "premium", "Premium";
        Luxury => "luxury", "Luxury";
    }
}

/// Highest rating a vendor can hold
pub const MAX_RATING: f64 = 5.0;

/// A vendor in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Unique identifier
    pub id: VendorId,

    pub name: String,

    pub category: VendorCategory,

    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,

    /// Rating as stored; use [`Vendor::rating`] for the clamped value
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: f64,

    pub price_range: PriceRange,

    #[serde(default, deserialize_with = "null_as_default")]
    pub services: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,

    #[serde(default)]
    pub is_preferred: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Vendor {
    /// Create a new vendor at the budget price level
    pub fn new(id: impl Into<VendorId>, name: impl Into<String>, category: VendorCategory) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            category,
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            website: String::new(),
            rating: 0.0,
            price_range: PriceRange::Budget,
            services: String::new(),
            notes: String::new(),
            is_preferred: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rating clamped to 0..=5
    pub fn rating(&self) -> f64 {
        if self.rating.is_nan() {
            0.0
        } else {
            self.rating.clamp(0.0, MAX_RATING)
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.category.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_is_clamped() {
        let mut vendor = Vendor::new(1, "Bloom", VendorCategory::Flowers);
        vendor.rating = 7.2;
        assert_eq!(vendor.rating(), 5.0);
        vendor.rating = -1.0;
        assert_eq!(vendor.rating(), 0.0);
        vendor.rating = 4.25;
        assert_eq!(vendor.rating(), 4.25);
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": 2,
            "name": "Dhaka Sound Co",
            "category": "sound",
            "email": "",
            "phone": "01800000000",
            "address": "Gulshan",
            "website": "",
            "rating": "4.50",
            "price_range": "mid_range",
            "services": "PA, lighting",
            "notes": "",
            "is_preferred": true,
            "created_at": "2024-11-01T00:00:00Z",
            "updated_at": "2024-11-01T00:00:00Z"
        }"#;

        let vendor: Vendor = serde_json::from_str(json).unwrap();
        assert_eq!(vendor.category, VendorCategory::Sound);
        assert_eq!(vendor.price_range, PriceRange::MidRange);
        assert_eq!(vendor.rating(), 4.5);
        assert!(vendor.is_preferred);
        assert_eq!(vendor.to_string(), "Dhaka Sound Co - Sound & Lighting");
    }
}
