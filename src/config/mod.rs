//! Configuration module for EventDesk
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Report policy (timeline window, recent-event limit)

pub mod paths;
pub mod settings;

pub use paths::EventDeskPaths;
pub use settings::Settings;
