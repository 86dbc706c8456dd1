//! Application-wide constants: default timings, file names, and exit codes.

// # Default Prayer Timings

pub const DEFAULT_FAJR: &str = "05:30 AM";
pub const DEFAULT_ZUHR: &str = "01:15 PM";
pub const DEFAULT_ASR: &str = "04:45 PM";
pub const DEFAULT_MAGHRIB: &str = "06:30 PM";
pub const DEFAULT_ISHA: &str = "08:00 PM";
pub const DEFAULT_JUMMAH: &str = "01:45 PM";

/// Placeholder shown by the editor next to empty daily fields.
pub const DAILY_TIME_PLACEHOLDER: &str = "e.g. 05:30 AM";
/// Placeholder shown by the editor next to an empty Jummah field.
pub const JUMMAH_TIME_PLACEHOLDER: &str = "e.g. 01:45 PM";

// # Configuration

pub const CONFIG_DIR_NAME: &str = "jamat";
pub const CONFIG_FILE_NAME: &str = "jamat.toml";
pub const DEFAULT_STRICT_VALIDATION: bool = false;
pub const DEFAULT_NOTIFY_CHANGES: bool = true;
pub const DEFAULT_LOCATION_LABEL: &str = "Karachi, Pakistan";

// # Exit Codes

pub const EXIT_FAILURE: i32 = 1;
