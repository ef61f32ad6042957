//! Display formatting for terminal output
//!
//! Tables for event and vendor listings, a detail view for a single event,
//! and the small formatting helpers the reports share.

pub mod event;
pub mod report;
pub mod vendor;

pub use event::{format_event_details, format_event_list};
pub use report::{
    double_separator, format_bar, format_date, format_percentage, format_variance, separator,
    truncate,
};
pub use vendor::format_vendor_list;
