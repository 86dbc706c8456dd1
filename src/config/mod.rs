//! Configuration system for jamat.
//!
//! Configuration lives in `jamat.toml`, searched for in:
//! 1. The directory given with `--config <dir>`
//! 2. **XDG_CONFIG_HOME**/jamat/jamat.toml (default)
//!
//! A commented default file is written on first run. The file is only ever read:
//! edits made through the timings editor stay in memory and are lost when the
//! process exits.
//!
//! ```toml
//! #[Display]
//! location = "Karachi, Pakistan"  # Location label shown on the home screen
//!
//! #[Editing]
//! strict_validation = false       # Reject saves containing times that are not valid times of day
//! notify_changes = true           # Report each committed edit while the admin editor is open
//! edit_mode = "live"              # "live" commits every edit at once, "draft" commits on save
//!
//! [timings]                       # Optional starting timings, all six keys required
//! Fajr = "05:30 AM"
//! Zuhr = "01:15 PM"
//! Asr = "04:45 PM"
//! Maghrib = "06:30 PM"
//! Isha = "08:00 PM"
//! Jummah = "01:45 PM"
//! ```
//!
//! The `[timings]` table must list all six prayers or be left out entirely; a
//! partial table is a parse error. Times that do not read as times of day are
//! reported as warnings, or rejected when `strict_validation` is on.

pub mod builder;
pub mod loading;
pub mod validation;

#[cfg(test)]
mod tests;

use anyhow::Result;
use serde::Deserialize;

use crate::constants::*;
use crate::surfaces::EditMode;
use crate::timings::TimingsSnapshot;

pub use builder::create_default_config;
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

/// Configuration structure for jamat settings.
///
/// Every field is optional; accessors fall back to the defaults in
/// [`crate::constants`].
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Location label shown under the date on the home screen.
    pub location: Option<String>,

    /// Whether the editor rejects saves containing malformed times.
    pub strict_validation: Option<bool>,

    /// Whether the admin session reports each committed change.
    pub notify_changes: Option<bool>,

    /// Whether editor changes are committed per edit or on save.
    pub edit_mode: Option<EditMode>,

    /// Starting timings for the store, replacing the built-in defaults.
    pub timings: Option<TimingsSnapshot>,
}

impl Config {
    /// Load configuration using automatic path detection.
    pub fn load() -> Result<Self> {
        load()
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or(DEFAULT_LOCATION_LABEL)
    }

    pub fn strict_validation(&self) -> bool {
        self.strict_validation.unwrap_or(DEFAULT_STRICT_VALIDATION)
    }

    pub fn notify_changes(&self) -> bool {
        self.notify_changes.unwrap_or(DEFAULT_NOTIFY_CHANGES)
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode.unwrap_or_default()
    }

    /// The snapshot a fresh store should start from.
    pub fn initial_snapshot(&self) -> TimingsSnapshot {
        self.timings.clone().unwrap_or_default()
    }

    /// Log the effective configuration.
    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        log_indented!("Location: {}", self.location());
        log_indented!("Strict validation: {}", self.strict_validation());
        log_indented!("Notify changes: {}", self.notify_changes());
        log_indented!("Edit mode: {}", self.edit_mode().as_str());
        if self.timings.is_some() {
            log_indented!("Starting timings: from configuration");
        } else {
            log_indented!("Starting timings: built-in defaults");
        }
    }
}
