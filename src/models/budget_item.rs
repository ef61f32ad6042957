//! Budget item model
//!
//! A single line of an event's budget: what it is for, what was estimated,
//! what has actually been spent, and where payment stands.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::choice::define_choice;
use super::de::null_as_default;
use super::ids::{BudgetItemId, EventId, VendorId};
use super::money::Money;
use super::vendor::Vendor;

define_choice! {
    /// What a budget line pays for
    BudgetCategory {
        Venue => "venue", "Venue";
        Catering => "catering", "Catering";
        Decoration => "decoration", "Decoration";
        Photography => "photography", "Photography";
        Entertainment => "entertainment", "Entertainment";
        Transportation => "transportation", "Transportation";
        Flowers => "flowers", "Flowers";
        Invitations => "invitations", "Invitations";
        Gifts => "gifts", "Gifts";
        Miscellaneous => "miscellaneous", "Miscellaneous";
    }
}

define_choice! {
    /// Payment state of a budget line
    PaymentStatus {
        Pending => "pending", "Pending";
        Paid => "paid", "Paid";
        Partial => "partial", "Partially Paid";
        Overdue => "overdue", "Overdue";
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A budget line item belonging to exactly one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier
    pub id: BudgetItemId,

    /// Owning event
    pub event: EventId,

    pub category: BudgetCategory,

    pub item_name: String,

    pub estimated_cost: Money,

    /// Amount spent so far; absent or null means nothing spent
    #[serde(default)]
    pub actual_cost: Money,

    /// Free-text vendor name
    #[serde(default, deserialize_with = "null_as_default")]
    pub vendor: String,

    /// Reference into the vendor directory
    #[serde(default)]
    pub vendor_id: Option<VendorId>,

    #[serde(default)]
    pub status: PaymentStatus,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl BudgetItem {
    /// Create a new pending budget item
    pub fn new(
        id: impl Into<BudgetItemId>,
        event: impl Into<EventId>,
        category: BudgetCategory,
        item_name: impl Into<String>,
        estimated_cost: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            event: event.into(),
            category,
            item_name: item_name.into(),
            estimated_cost,
            actual_cost: Money::zero(),
            vendor: String::new(),
            vendor_id: None,
            status: PaymentStatus::default(),
            due_date: None,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Actual minus estimated; positive means over budget
    pub fn variance(&self) -> Money {
        self.actual_cost - self.estimated_cost
    }

    /// Percentage of the estimate spent (0 when nothing was estimated)
    pub fn cost_ratio(&self) -> f64 {
        if self.estimated_cost.is_zero() {
            0.0
        } else {
            self.actual_cost.cents() as f64 / self.estimated_cost.cents() as f64 * 100.0
        }
    }

    /// Vendor name for display: free text wins, then the referenced vendor
    pub fn vendor_display<'a>(&'a self, vendors: &'a [Vendor]) -> Option<&'a str> {
        let free_text = self.vendor.trim();
        if !free_text.is_empty() {
            return Some(free_text);
        }

        let vendor_id = self.vendor_id?;
        vendors
            .iter()
            .find(|v| v.id == vendor_id)
            .map(|v| v.name.as_str())
    }
}

impl fmt::Display for BudgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.item_name, self.category.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VendorCategory;

    #[test]
    fn test_variance_and_ratio() {
        let mut item = BudgetItem::new(
            1,
            1,
            BudgetCategory::Catering,
            "Dinner",
            Money::from_units(1000),
        );
        item.actual_cost = Money::from_units(800);

        assert_eq!(item.variance(), Money::from_units(-200));
        assert!((item.cost_ratio() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_with_zero_estimate() {
        let mut item = BudgetItem::new(1, 1, BudgetCategory::Gifts, "Favors", Money::zero());
        item.actual_cost = Money::from_units(50);
        assert_eq!(item.cost_ratio(), 0.0);
    }

    #[test]
    fn test_vendor_display_prefers_free_text() {
        let vendor = Vendor::new(7, "Lens & Light", VendorCategory::Photography);
        let vendors = vec![vendor];

        let mut item = BudgetItem::new(
            1,
            1,
            BudgetCategory::Photography,
            "Shoot",
            Money::from_units(300),
        );
        assert_eq!(item.vendor_display(&vendors), None);

        item.vendor_id = Some(VendorId::new(7));
        assert_eq!(item.vendor_display(&vendors), Some("Lens & Light"));

        item.vendor = "  Studio Nine ".into();
        assert_eq!(item.vendor_display(&vendors), Some("Studio Nine"));

        item.vendor = String::new();
        item.vendor_id = Some(VendorId::new(99));
        assert_eq!(item.vendor_display(&vendors), None);
    }

    #[test]
    fn test_deserialize_null_actual_cost() {
        let json = r#"{
            "id": 10,
            "event": 3,
            "category": "venue",
            "item_name": "Hall rental",
            "estimated_cost": "1000.00",
            "actual_cost": null,
            "vendor": "",
            "status": "overdue",
            "due_date": null,
            "notes": "",
            "created_at": "2025-01-10T09:15:00Z",
            "updated_at": "2025-01-10T09:15:00Z"
        }"#;

        let item: BudgetItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.event, EventId::new(3));
        assert!(item.actual_cost.is_zero());
        assert_eq!(item.status, PaymentStatus::Overdue);
        assert_eq!(item.estimated_cost, Money::from_units(1000));
    }
}
