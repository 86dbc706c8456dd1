//! Screens that read from or write to the timings store.
//!
//! Display surfaces ([`home::HomeScreen`], [`mosque_detail::MosqueDetailScreen`])
//! call `get` once per render and never write. The editing surface
//! ([`editor::TimingsEditor`]) is the only one that commits changes, and it can
//! only be opened with an admin session. Every surface receives its store handle
//! explicitly.
//!
//! Rendering is split in two: `render` builds a plain, serializable view value
//! and `print` writes it through the logger, so views can be inspected in tests
//! or emitted as JSON.

pub mod editor;
pub mod home;
pub mod mosque_detail;

pub use editor::{EditMode, EditorField, SaveReport, TimingsEditor, ValidationPolicy};
pub use home::{HomeScreen, HomeView, PrayerRow, PrayerStatus};
pub use mosque_detail::{MosqueDetailScreen, MosqueDetailView};

use chrono::TimeDelta;

/// Format a positive duration as hours and zero-padded minutes, e.g. "2h 05m".
pub(crate) fn format_time_left(delta: TimeDelta) -> String {
    let total_minutes = delta.num_minutes().max(0);
    format!("{}h {:02}m", total_minutes / 60, total_minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_left() {
        assert_eq!(format_time_left(TimeDelta::minutes(135)), "2h 15m");
        assert_eq!(format_time_left(TimeDelta::minutes(240)), "4h 00m");
        assert_eq!(format_time_left(TimeDelta::minutes(5)), "0h 05m");
        assert_eq!(format_time_left(TimeDelta::seconds(-30)), "0h 00m");
    }
}
