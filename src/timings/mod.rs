//! Prayer timings: the six named prayers and the snapshot that holds their times.
//!
//! A [`TimingsSnapshot`] always carries exactly six entries, one per [`Prayer`].
//! That is a property of the type rather than a runtime check: the snapshot is a
//! struct with one field per prayer, and deserialization rejects both missing and
//! unknown keys. Time values are opaque, human-readable strings ("05:30 AM");
//! interpreting them as times of day is left to the opt-in [`validation`] module.
//!
//! The [`store`] module wraps a snapshot in the shared handle that display and
//! editing surfaces use, and [`events`] defines the change notifications it emits.

pub mod events;
pub mod store;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::*;

/// One of the six fixed prayer keys.
///
/// Variants are declared in display order, which is also the order used by
/// [`TimingsSnapshot::iter`] and by serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Zuhr,
    Asr,
    Maghrib,
    Isha,
    /// The Friday congregational prayer, shown apart from the daily five.
    Jummah,
}

impl Prayer {
    /// All six prayers in display order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Zuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
        Prayer::Jummah,
    ];

    /// The five daily prayers, everything except Jummah.
    pub const DAILY: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Zuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Zuhr => "Zuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
            Prayer::Jummah => "Jummah",
        }
    }

    pub fn is_jummah(&self) -> bool {
        matches!(self, Prayer::Jummah)
    }

    /// The time this prayer holds in a freshly created store.
    pub fn default_time(&self) -> &'static str {
        match self {
            Prayer::Fajr => DEFAULT_FAJR,
            Prayer::Zuhr => DEFAULT_ZUHR,
            Prayer::Asr => DEFAULT_ASR,
            Prayer::Maghrib => DEFAULT_MAGHRIB,
            Prayer::Isha => DEFAULT_ISHA,
            Prayer::Jummah => DEFAULT_JUMMAH,
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name one of the six prayers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPrayerError {
    /// The name that failed to parse
    pub name: String,
}

impl fmt::Display for UnknownPrayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid: Vec<&str> = Prayer::ALL.iter().map(Prayer::as_str).collect();
        write!(
            f,
            "Unknown prayer '{}' (expected one of: {})",
            self.name,
            valid.join(", ")
        )
    }
}

impl std::error::Error for UnknownPrayerError {}

impl FromStr for Prayer {
    type Err = UnknownPrayerError;

    /// Parse a prayer name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Prayer::ALL
            .into_iter()
            .find(|prayer| prayer.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPrayerError {
                name: trimmed.to_string(),
            })
    }
}

/// The complete set of six prayer times at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimingsSnapshot {
    #[serde(rename = "Fajr")]
    fajr: String,
    #[serde(rename = "Zuhr")]
    zuhr: String,
    #[serde(rename = "Asr")]
    asr: String,
    #[serde(rename = "Maghrib")]
    maghrib: String,
    #[serde(rename = "Isha")]
    isha: String,
    #[serde(rename = "Jummah")]
    jummah: String,
}

impl Default for TimingsSnapshot {
    fn default() -> Self {
        Self::from_fn(|prayer| prayer.default_time().to_string())
    }
}

impl TimingsSnapshot {
    /// Build a snapshot by asking `time_for` for each of the six prayers.
    pub fn from_fn<F>(mut time_for: F) -> Self
    where
        F: FnMut(Prayer) -> String,
    {
        Self {
            fajr: time_for(Prayer::Fajr),
            zuhr: time_for(Prayer::Zuhr),
            asr: time_for(Prayer::Asr),
            maghrib: time_for(Prayer::Maghrib),
            isha: time_for(Prayer::Isha),
            jummah: time_for(Prayer::Jummah),
        }
    }

    pub fn get(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Zuhr => &self.zuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
            Prayer::Jummah => &self.jummah,
        }
    }

    /// Replace one field in place, returning the value it held before.
    pub fn set(&mut self, prayer: Prayer, value: impl Into<String>) -> String {
        std::mem::replace(self.field_mut(prayer), value.into())
    }

    /// A copy of this snapshot with exactly one field replaced.
    pub fn with(mut self, prayer: Prayer, value: impl Into<String>) -> Self {
        self.set(prayer, value);
        self
    }

    /// All six entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, &str)> + '_ {
        Prayer::ALL.into_iter().map(|prayer| (prayer, self.get(prayer)))
    }

    /// The five daily entries in display order, Jummah excluded.
    pub fn daily(&self) -> impl Iterator<Item = (Prayer, &str)> + '_ {
        Prayer::DAILY.into_iter().map(|prayer| (prayer, self.get(prayer)))
    }

    pub fn jummah(&self) -> &str {
        &self.jummah
    }

    fn field_mut(&mut self, prayer: Prayer) -> &mut String {
        match prayer {
            Prayer::Fajr => &mut self.fajr,
            Prayer::Zuhr => &mut self.zuhr,
            Prayer::Asr => &mut self.asr,
            Prayer::Maghrib => &mut self.maghrib,
            Prayer::Isha => &mut self.isha,
            Prayer::Jummah => &mut self.jummah,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_values() {
        let snapshot = TimingsSnapshot::default();
        let entries: Vec<(Prayer, &str)> = snapshot.iter().collect();

        assert_eq!(
            entries,
            vec![
                (Prayer::Fajr, "05:30 AM"),
                (Prayer::Zuhr, "01:15 PM"),
                (Prayer::Asr, "04:45 PM"),
                (Prayer::Maghrib, "06:30 PM"),
                (Prayer::Isha, "08:00 PM"),
                (Prayer::Jummah, "01:45 PM"),
            ]
        );
    }

    #[test]
    fn test_prayer_parsing_ignores_case() {
        assert_eq!("asr".parse::<Prayer>(), Ok(Prayer::Asr));
        assert_eq!("  MAGHRIB ".parse::<Prayer>(), Ok(Prayer::Maghrib));
        assert_eq!("Jummah".parse::<Prayer>(), Ok(Prayer::Jummah));
    }

    #[test]
    fn test_prayer_parsing_rejects_unknown_names() {
        let err = "Tahajjud".parse::<Prayer>().unwrap_err();
        assert_eq!(err.name, "Tahajjud");
        let message = err.to_string();
        assert!(message.contains("Unknown prayer 'Tahajjud'"));
        assert!(message.contains("Fajr, Zuhr, Asr, Maghrib, Isha, Jummah"));
    }

    #[test]
    fn test_set_returns_previous_value() {
        let mut snapshot = TimingsSnapshot::default();
        let previous = snapshot.set(Prayer::Isha, "08:15 PM");
        assert_eq!(previous, "08:00 PM");
        assert_eq!(snapshot.get(Prayer::Isha), "08:15 PM");
    }

    #[test]
    fn test_with_leaves_other_fields_untouched() {
        let original = TimingsSnapshot::default();
        let edited = original.clone().with(Prayer::Asr, "05:00 PM");

        for prayer in Prayer::ALL {
            if prayer == Prayer::Asr {
                assert_eq!(edited.get(prayer), "05:00 PM");
            } else {
                assert_eq!(edited.get(prayer), original.get(prayer));
            }
        }
    }

    #[test]
    fn test_daily_excludes_jummah() {
        let snapshot = TimingsSnapshot::default();
        let daily: Vec<Prayer> = snapshot.daily().map(|(prayer, _)| prayer).collect();
        assert_eq!(daily, Prayer::DAILY.to_vec());
        assert_eq!(snapshot.jummah(), "01:45 PM");
    }

    #[test]
    fn test_json_uses_prayer_names_as_keys() {
        let json = serde_json::to_string(&TimingsSnapshot::default()).unwrap();
        assert_eq!(
            json,
            r#"{"Fajr":"05:30 AM","Zuhr":"01:15 PM","Asr":"04:45 PM","Maghrib":"06:30 PM","Isha":"08:00 PM","Jummah":"01:45 PM"}"#
        );
    }

    #[test]
    fn test_deserialize_rejects_missing_key() {
        let json = r#"{"Fajr":"05:30 AM","Zuhr":"01:15 PM","Asr":"04:45 PM","Maghrib":"06:30 PM","Isha":"08:00 PM"}"#;
        let result: Result<TimingsSnapshot, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Jummah"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_key() {
        let json = r#"{"Fajr":"05:30 AM","Zuhr":"01:15 PM","Asr":"04:45 PM","Maghrib":"06:30 PM","Isha":"08:00 PM","Jummah":"01:45 PM","Tahajjud":"03:00 AM"}"#;
        let result: Result<TimingsSnapshot, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
