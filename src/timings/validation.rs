//! Opt-in checks for prayer time strings.
//!
//! The store accepts any text. These functions are for callers that want to know
//! whether a value reads as a time of day before committing it: the editor on
//! save, and config loading when seeding the store.
//!
//! Accepted forms are 12-hour times with a meridiem ("05:30 AM", "5:30pm") and
//! 24-hour times ("17:30").

use anyhow::{Result, bail};
use chrono::NaiveTime;

use super::{Prayer, TimingsSnapshot};

const TWELVE_HOUR_FORMATS: [&str; 2] = ["%I:%M %p", "%I:%M%p"];
const TWENTY_FOUR_HOUR_FORMAT: &str = "%H:%M";

/// Interpret a prayer time string as a time of day, if it reads as one.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let normalized = value.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return None;
    }

    if normalized.ends_with("AM") || normalized.ends_with("PM") {
        TWELVE_HOUR_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
    } else {
        NaiveTime::parse_from_str(&normalized, TWENTY_FOUR_HOUR_FORMAT).ok()
    }
}

/// Validate one prayer time, returning the parsed time of day.
pub fn validate_time(prayer: Prayer, value: &str) -> Result<NaiveTime> {
    if value.trim().is_empty() {
        bail!("{prayer} time must not be empty");
    }

    match parse_time(value) {
        Some(time) => Ok(time),
        None => bail!(
            "{prayer} time '{}' is not a valid time of day (expected e.g. 05:30 AM or 17:30)",
            value.trim()
        ),
    }
}

/// Validate all six prayer times, reporting the first that fails.
pub fn validate_snapshot(snapshot: &TimingsSnapshot) -> Result<()> {
    for (prayer, value) in snapshot.iter() {
        validate_time(prayer, value)?;
    }
    Ok(())
}

/// Collect a message for every prayer time that fails validation.
pub fn snapshot_issues(snapshot: &TimingsSnapshot) -> Vec<String> {
    snapshot
        .iter()
        .filter_map(|(prayer, value)| validate_time(prayer, value).err())
        .map(|e| e.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_twelve_hour_times() {
        assert_eq!(
            parse_time("05:30 AM"),
            NaiveTime::from_hms_opt(5, 30, 0)
        );
        assert_eq!(
            parse_time("01:15 PM"),
            NaiveTime::from_hms_opt(13, 15, 0)
        );
        assert_eq!(parse_time("5:30 pm"), NaiveTime::from_hms_opt(17, 30, 0));
        assert_eq!(parse_time("12:05 AM"), NaiveTime::from_hms_opt(0, 5, 0));
    }

    #[test]
    fn test_parse_twenty_four_hour_times() {
        assert_eq!(parse_time("17:30"), NaiveTime::from_hms_opt(17, 30, 0));
        assert_eq!(parse_time(" 04:45 "), NaiveTime::from_hms_opt(4, 45, 0));
    }

    #[test]
    fn test_parse_rejects_malformed_times() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("   "), None);
        assert_eq!(parse_time("after dinner"), None);
        assert_eq!(parse_time("13:00 PM"), None);
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("05:"), None);
    }

    #[test]
    fn test_validate_time_messages() {
        let empty = validate_time(Prayer::Fajr, " ").unwrap_err().to_string();
        assert_eq!(empty, "Fajr time must not be empty");

        let malformed = validate_time(Prayer::Asr, "soon").unwrap_err().to_string();
        assert!(malformed.contains("Asr time 'soon' is not a valid time of day"));
    }

    #[test]
    fn test_default_snapshot_is_valid() {
        assert!(validate_snapshot(&TimingsSnapshot::default()).is_ok());
        assert!(snapshot_issues(&TimingsSnapshot::default()).is_empty());
    }

    #[test]
    fn test_snapshot_issues_lists_every_failure() {
        let snapshot = TimingsSnapshot::default()
            .with(Prayer::Zuhr, "")
            .with(Prayer::Jummah, "noon-ish");

        let issues = snapshot_issues(&snapshot);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].starts_with("Zuhr"));
        assert!(issues[1].starts_with("Jummah"));

        let first = validate_snapshot(&snapshot).unwrap_err().to_string();
        assert!(first.starts_with("Zuhr"));
    }
}
