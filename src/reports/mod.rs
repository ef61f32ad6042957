//! Reports module for EventDesk
//!
//! Pure computations over the loaded collections: scoping records to an event,
//! aggregating them, grouping them by category or month, and assembling the
//! per-event, overall, vendor, and dashboard reports. Nothing here performs
//! I/O or holds state between calls.

pub mod aggregate;
pub mod event_report;
pub mod event_summary;
pub mod filter;
pub mod group;
pub mod overall_report;
pub mod vendor_report;

pub use aggregate::{percentage, BudgetStats, GuestStats, VendorStats};
pub use event_report::{
    BudgetCategoryRow, BudgetSection, EventAnalyticsReport, GuestCategoryRow, GuestSection,
    MonthlyGuests, MonthlySpend, ProgressSection,
};
pub use event_summary::{DashboardReport, EventSummaryReport, EventSummaryRow};
pub use filter::{scope_to_event, EventScoped};
pub use group::{group_by, group_by_month, seeded_group_by, Group};
pub use overall_report::{
    CategoryCount, MonthlyCount, OverallAnalyticsReport, OverallStats, RecentEvent, StatusCount,
};
pub use vendor_report::{PriceRangeCount, VendorCategoryRow, VendorReport};

use serde::Serialize;

use crate::models::MonthKey;

/// How far back the monthly timelines reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrendWindow {
    /// Every month that has a record
    All,
    /// The last `months` calendar months, current month included
    Trailing { months: u32 },
}

impl TrendWindow {
    /// Whether `month` falls inside the window ending at `current`
    pub fn contains(&self, month: MonthKey, current: MonthKey) -> bool {
        match *self {
            Self::All => true,
            Self::Trailing { months } => {
                months > 0 && month <= current && month >= current.months_back(months - 1)
            }
        }
    }
}

impl Default for TrendWindow {
    fn default() -> Self {
        Self::Trailing { months: 12 }
    }
}

/// Tunables shared by the report builders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub trend_window: TrendWindow,

    /// Number of most-recently-created events listed in the overall report
    pub recent_limit: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            trend_window: TrendWindow::default(),
            recent_limit: 5,
        }
    }
}
