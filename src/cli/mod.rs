//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report layer.

pub mod event;
pub mod import;
pub mod report;
pub mod vendor;

pub use event::{handle_event_command, EventCommands};
pub use import::handle_import;
pub use report::{handle_dashboard, handle_report_command, OutputFormat, ReportCommands};
pub use vendor::{handle_vendor_command, VendorCommands};
