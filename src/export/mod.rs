//! Export module for EventDesk
//!
//! Reports serialize to:
//! - JSON: machine-readable, optionally pretty-printed
//! - YAML: human-readable, with a comment header
//! - CSV: flat rows, written by each report's `export_csv`

pub mod json;
pub mod yaml;

pub use json::{read_collections_json, write_json};
pub use yaml::write_yaml;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventDeskError;

/// File format for report exports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = EventDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(EventDeskError::Validation(format!(
                "Unknown export format '{}'. Use json, yaml, or csv",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("YML".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!(" csv ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);

        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExportFormat::Yaml).unwrap(),
            "\"yaml\""
        );
        let format: ExportFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(format, ExportFormat::Csv);
        assert_eq!(ExportFormat::default().to_string(), "json");
    }
}
