//! Aggregation over budget items, guests, and vendors
//!
//! Sums, counts, and rates. Every rate is a plain percentage in `0..=100`
//! (unrounded) and falls back to zero when its denominator is zero.

use serde::Serialize;

use crate::models::{BudgetItem, Guest, Money, PaymentStatus, RsvpStatus, Vendor};

/// `part / whole * 100`, or 0 when `whole` is not positive
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Totals and counts over a set of budget items
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BudgetStats {
    pub total_estimated: Money,
    pub total_actual: Money,
    pub total_items: usize,
    pub paid_items: usize,
    pub pending_items: usize,
    pub overdue_items: usize,
    /// Actual minus estimated; positive means over budget
    pub variance: Money,
    /// Actual as a percentage of estimated
    pub budget_utilization: f64,
}

impl BudgetStats {
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a BudgetItem>,
    {
        let mut stats = Self::default();

        for item in items {
            stats.total_items += 1;
            stats.total_estimated += item.estimated_cost;
            stats.total_actual += item.actual_cost;

            match item.status {
                PaymentStatus::Paid => stats.paid_items += 1,
                PaymentStatus::Pending => stats.pending_items += 1,
                PaymentStatus::Overdue => stats.overdue_items += 1,
                _ => {}
            }
        }

        stats.variance = stats.total_actual - stats.total_estimated;
        stats.budget_utilization = utilization(stats.total_actual, stats.total_estimated);
        stats
    }

    /// True when more has been spent than estimated
    pub fn is_over_budget(&self) -> bool {
        self.variance.is_positive()
    }
}

/// Spent as a percentage of estimated
pub(crate) fn utilization(actual: Money, estimated: Money) -> f64 {
    percentage(actual.cents() as f64, estimated.cents() as f64)
}

/// Headcounts and rates over a set of guests
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GuestStats {
    pub total_guests: usize,
    /// Guests plus their plus-ones
    pub total_attendees: u64,
    pub confirmed_guests: usize,
    pub pending_guests: usize,
    pub declined_guests: usize,
    pub checked_in_guests: usize,
    pub confirmed_attendees: u64,
    /// Checked-in guests plus their plus-ones
    pub checked_in_attendees: u64,
    /// Confirmed over all invited guests
    pub rsvp_rate: f64,
    /// Checked in over all invited guests
    pub attendance_rate: f64,
}

impl GuestStats {
    pub fn from_guests<'a, I>(guests: I) -> Self
    where
        I: IntoIterator<Item = &'a Guest>,
    {
        let mut stats = Self::default();

        for guest in guests {
            let attendees = u64::from(guest.total_attendees());
            stats.total_guests += 1;
            stats.total_attendees += attendees;

            match guest.rsvp_status {
                RsvpStatus::Confirmed => {
                    stats.confirmed_guests += 1;
                    stats.confirmed_attendees += attendees;
                }
                RsvpStatus::Pending => stats.pending_guests += 1,
                RsvpStatus::Declined => stats.declined_guests += 1,
                _ => {}
            }

            if guest.checked_in {
                stats.checked_in_guests += 1;
                stats.checked_in_attendees += attendees;
            }
        }

        let total = stats.total_guests as f64;
        stats.rsvp_rate = percentage(stats.confirmed_guests as f64, total);
        stats.attendance_rate = percentage(stats.checked_in_guests as f64, total);
        stats
    }
}

/// Directory-wide vendor figures
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VendorStats {
    pub total_vendors: usize,
    pub preferred_vendors: usize,
    pub preferred_rate: f64,
    /// Mean of the clamped ratings, 0 when there are no vendors
    pub average_rating: f64,
}

impl VendorStats {
    pub fn from_vendors<'a, I>(vendors: I) -> Self
    where
        I: IntoIterator<Item = &'a Vendor>,
    {
        let mut stats = Self::default();
        let mut rating_sum = 0.0;

        for vendor in vendors {
            stats.total_vendors += 1;
            rating_sum += vendor.rating();
            if vendor.is_preferred {
                stats.preferred_vendors += 1;
            }
        }

        if stats.total_vendors > 0 {
            stats.average_rating = rating_sum / stats.total_vendors as f64;
        }
        stats.preferred_rate =
            percentage(stats.preferred_vendors as f64, stats.total_vendors as f64);
        stats
    }
}
