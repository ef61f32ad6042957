//! EventDesk - analytics for event planners
//!
//! Loads snapshots of a planner's events, budget items, guests, and vendors
//! and turns them into per-event and cross-event reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (events, budget items, guests, vendors)
//! - `storage`: Collection loading and JSON snapshot files
//! - `reports`: Scoping, aggregation, grouping, and report assembly
//! - `display`: Terminal tables and formatting helpers
//! - `export`: JSON and YAML serialization of reports
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use eventdesk::clock::SystemClock;
//! use eventdesk::config::{paths::EventDeskPaths, settings::Settings};
//! use eventdesk::storage::{CollectionLoader, SnapshotStore};
//! use eventdesk::reports::OverallAnalyticsReport;
//!
//! let paths = EventDeskPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let collections = SnapshotStore::new(paths).load_all()?;
//! let options = settings.report_options();
//! let report = OverallAnalyticsReport::generate(&collections, &options, &SystemClock);
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{EventDeskError, EventDeskResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, logging to stderr
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level for this
/// crate (0 = warn, 1 = info, 2+ = debug).
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let level = match verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("eventdesk={}", level)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
