//! Home screen: today's date, the location label, and the five daily prayers.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::format_time_left;
use crate::timings::store::TimingsStore;
use crate::timings::validation::parse_time;
use crate::timings::Prayer;

/// Where a prayer sits relative to the current time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PrayerStatus {
    Passed,
    Upcoming {
        /// Remaining time formatted as "2h 15m"
        time_left: String,
    },
    /// The stored time could not be read as a time of day
    Unknown,
}

impl PrayerStatus {
    pub fn label(&self) -> String {
        match self {
            PrayerStatus::Passed => "Passed".to_string(),
            PrayerStatus::Upcoming { time_left } => time_left.clone(),
            PrayerStatus::Unknown => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerRow {
    pub prayer: Prayer,
    pub time: String,
    #[serde(flatten)]
    pub status: PrayerStatus,
}

/// One rendered frame of the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    /// Long-form date, e.g. "Monday, October 19, 2026"
    pub date: String,
    pub location: String,
    pub rows: Vec<PrayerRow>,
}

impl HomeView {
    /// The first prayer still ahead of the render time, if any.
    pub fn next_prayer(&self) -> Option<&PrayerRow> {
        self.rows
            .iter()
            .find(|row| matches!(row.status, PrayerStatus::Upcoming { .. }))
    }
}

pub struct HomeScreen {
    store: TimingsStore,
    location: String,
}

impl HomeScreen {
    pub fn new(store: TimingsStore, location: impl Into<String>) -> Self {
        Self {
            store,
            location: location.into(),
        }
    }

    /// Read the store and build the view for the moment `now`.
    pub fn render(&self, now: NaiveDateTime) -> HomeView {
        let snapshot = self.store.get();
        let current = now.time();

        let rows = snapshot
            .daily()
            .map(|(prayer, time)| {
                let status = match parse_time(time) {
                    Some(at) if at <= current => PrayerStatus::Passed,
                    Some(at) => PrayerStatus::Upcoming {
                        time_left: format_time_left(at.signed_duration_since(current)),
                    },
                    None => PrayerStatus::Unknown,
                };
                PrayerRow {
                    prayer,
                    time: time.to_string(),
                    status,
                }
            })
            .collect();

        HomeView {
            date: now.format("%A, %B %-d, %Y").to_string(),
            location: self.location.clone(),
            rows,
        }
    }

    pub fn print(view: &HomeView) {
        log_block_start!("Smart Jamat Finder");
        log_indented!("{}", view.date);
        log_indented!("Location: {}", view.location);

        log_block_start!("Today's Prayer Times");
        for row in &view.rows {
            log_indented!(
                "{:<8} {:>8}   {}",
                row.prayer.as_str(),
                row.time,
                row.status.label()
            );
        }

        if let Some(next) = view.next_prayer() {
            log_pipe!();
            log_info!("Next: {} at {}", next.prayer, next.time);
        }
    }
}
