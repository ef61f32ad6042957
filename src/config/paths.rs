//! Path management for EventDesk
//!
//! Provides XDG-compliant path resolution for configuration, snapshot data,
//! and report exports.
//!
//! ## Path Resolution Order
//!
//! 1. `EVENTDESK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/eventdesk` or `~/.config/eventdesk`
//! 3. Windows: `%APPDATA%\eventdesk`

use std::path::PathBuf;

use crate::error::EventDeskError;

/// Manages all paths used by EventDesk
#[derive(Debug, Clone)]
pub struct EventDeskPaths {
    /// Base directory for all EventDesk data
    base_dir: PathBuf,
}

impl EventDeskPaths {
    /// Create a new EventDeskPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, EventDeskError> {
        let base_dir = if let Ok(custom) = std::env::var("EVENTDESK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EventDeskPaths with a custom base directory (`--data-dir`, tests)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/eventdesk/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the collection snapshots
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default directory for report exports
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn events_file(&self) -> PathBuf {
        self.data_dir().join("events.json")
    }

    pub fn budget_items_file(&self) -> PathBuf {
        self.data_dir().join("budget_items.json")
    }

    pub fn guests_file(&self) -> PathBuf {
        self.data_dir().join("guests.json")
    }

    pub fn vendors_file(&self) -> PathBuf {
        self.data_dir().join("vendors.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), EventDeskError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EventDeskError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| EventDeskError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir()).map_err(|e| {
            EventDeskError::Io(format!("Failed to create exports directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if EventDesk has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EventDeskError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                EventDeskError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("eventdesk"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EventDeskError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EventDeskError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("eventdesk"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EventDeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.exports_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EventDeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.exports_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = EventDeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.events_file(),
            temp_dir.path().join("data").join("events.json")
        );
        assert_eq!(
            paths.budget_items_file(),
            temp_dir.path().join("data").join("budget_items.json")
        );
        assert_eq!(
            paths.guests_file(),
            temp_dir.path().join("data").join("guests.json")
        );
        assert_eq!(
            paths.vendors_file(),
            temp_dir.path().join("data").join("vendors.json")
        );
    }
}
