//! Core data models for EventDesk
//!
//! Read-only snapshots of the planner's data: events, their budget items and
//! guests, and the vendor directory. Nothing in the report layer mutates them.

pub mod budget_item;
mod choice;
pub(crate) mod de;
pub mod event;
pub mod guest;
pub mod ids;
pub mod money;
pub mod month;
pub mod vendor;

pub use budget_item::{BudgetCategory, BudgetItem, PaymentStatus};
pub use event::{Event, EventCategory, EventStatus};
pub use guest::{Guest, GuestCategory, RsvpStatus};
pub use ids::{BudgetItemId, EventId, GuestId, VendorId};
pub use money::Money;
pub use month::MonthKey;
pub use vendor::{PriceRange, Vendor, VendorCategory};
