//! User settings for EventDesk
//!
//! Manages display preferences and the policy knobs the report builders
//! consume: the trailing window for monthly timelines and the number of
//! recent events listed in the overall report.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::EventDeskPaths;
use crate::error::EventDeskError;
use crate::export::ExportFormat;
use crate::reports::{ReportOptions, TrendWindow};
use crate::storage::write_json_atomic;

/// User settings for EventDesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of trailing calendar months shown in timelines (0 = all months)
    #[serde(default = "default_trend_window_months")]
    pub trend_window_months: u32,

    /// Number of most-recently-created events in the overall report
    #[serde(default = "default_recent_events_limit")]
    pub recent_events_limit: usize,

    /// Format used by `report` commands when writing to a file without `--format`
    #[serde(default)]
    pub default_export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "৳".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_trend_window_months() -> u32 {
    12
}

fn default_recent_events_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            trend_window_months: default_trend_window_months(),
            recent_events_limit: default_recent_events_limit(),
            default_export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &EventDeskPaths) -> Result<Self, EventDeskError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                EventDeskError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                EventDeskError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EventDeskPaths) -> Result<(), EventDeskError> {
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)
            .map_err(|e| EventDeskError::Config(format!("Failed to write settings file: {}", e)))
    }

    /// The trailing window applied to monthly timelines
    pub fn trend_window(&self) -> TrendWindow {
        if self.trend_window_months == 0 {
            TrendWindow::All
        } else {
            TrendWindow::Trailing {
                months: self.trend_window_months,
            }
        }
    }

    /// Report policy derived from these settings
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            trend_window: self.trend_window(),
            recent_limit: self.recent_events_limit,
        }
    }
}
