//! Set command implementation for changing prayer times in the store.
//!
//! Every name is checked before anything is written, so a typo in the last
//! pair leaves the store untouched. Changes live only as long as the process.

use anyhow::Result;

use super::CommandContext;
use crate::timings::Prayer;
use crate::timings::store::TimingsStore;
use crate::timings::validation::validate_time;

/// One applied change: the prayer, its previous text and its new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedChange {
    pub prayer: Prayer,
    pub previous: String,
    pub value: String,
}

/// Handle the set command - update one or more prayer times
pub fn handle_set_command(context: &CommandContext, fields: &[(String, String)]) -> Result<()> {
    log_version!();

    let changes = match apply_fields(&context.store, fields, context.strict) {
        Ok(changes) => changes,
        Err(e) => {
            log_pipe!();
            log_error!("{}", e);
            anyhow::bail!("Timings not updated");
        }
    };

    let changed: Vec<_> = changes.iter().filter(|c| c.previous != c.value).collect();
    if changed.is_empty() {
        log_block_start!("Timings unchanged");
        if let [change] = changes.as_slice() {
            log_indented!("{} is already set to {}", change.prayer, change.value);
        } else {
            log_indented!("All prayers already have the specified times");
        }
    } else {
        log_block_start!("Updated timings");
        for change in &changed {
            log_indented!("{}: {} → {}", change.prayer, change.previous, change.value);
        }
    }

    log_block_start!("Current timings");
    for (prayer, time) in context.store.get().iter() {
        log_indented!("{:<8} {}", prayer.as_str(), time);
    }
    log_pipe!();
    log_info!("Changes last for this run only; edit jamat.toml to keep them");
    log_end!();
    Ok(())
}

/// Resolve and check every pair, then write them to the store in order.
///
/// With `strict` each value must be a valid time of day. Without it any text is
/// accepted. Either way values are stored trimmed of surrounding whitespace.
pub fn apply_fields(
    store: &TimingsStore,
    fields: &[(String, String)],
    strict: bool,
) -> Result<Vec<AppliedChange>> {
    let mut resolved = Vec::with_capacity(fields.len());
    for (name, value) in fields {
        let prayer: Prayer = name.parse()?;
        if strict {
            validate_time(prayer, value)?;
        }
        resolved.push((prayer, value.trim().to_string()));
    }

    Ok(resolved
        .into_iter()
        .map(|(prayer, value)| {
            let previous = store.get().get(prayer).to_string();
            store.set_field(prayer, value.clone());
            AppliedChange {
                prayer,
                previous,
                value,
            }
        })
        .collect())
}

/// Display help for the set command
pub fn display_help() {
    log_version!();
    log_block_start!("set - Change prayer times for this run");
    log_block_start!("Usage: jamat set [OPTIONS] <prayer>=<time> [<prayer>=<time>...]");
    log_block_start!("Description:");
    log_indented!("Writes the given times into the shared timings store and prints");
    log_indented!("the result. Nothing is written to disk.");
    log_block_start!("Options:");
    log_indented!("--strict   Reject times that are not valid times of day");
    log_block_start!("Examples:");
    log_indented!("jamat set Asr=\"05:00 PM\"");
    log_indented!("jamat set fajr \"05:10 AM\" isha \"08:15 PM\"");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_apply_reports_previous_values() {
        let store = TimingsStore::new();
        let changes = apply_fields(&store, &pairs(&[("asr", "05:00 PM")]), false).unwrap();

        assert_eq!(
            changes,
            vec![AppliedChange {
                prayer: Prayer::Asr,
                previous: "04:45 PM".to_string(),
                value: "05:00 PM".to_string(),
            }]
        );
        assert_eq!(store.get().get(Prayer::Asr), "05:00 PM");
    }

    #[test]
    fn test_unknown_name_leaves_store_untouched() {
        let store = TimingsStore::new();
        let err = apply_fields(
            &store,
            &pairs(&[("Fajr", "05:00 AM"), ("Tahajjud", "03:00 AM")]),
            false,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Unknown prayer 'Tahajjud'"));
        assert_eq!(store.get().get(Prayer::Fajr), "05:30 AM");
    }

    #[test]
    fn test_lenient_accepts_any_text() {
        let store = TimingsStore::new();
        apply_fields(&store, &pairs(&[("Isha", "after Maghrib")]), false).unwrap();
        assert_eq!(store.get().get(Prayer::Isha), "after Maghrib");
    }

    #[test]
    fn test_strict_rejects_invalid_time_before_writing() {
        let store = TimingsStore::new();
        let err = apply_fields(
            &store,
            &pairs(&[("Zuhr", "01:20 PM"), ("Isha", "late")]),
            true,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Isha time 'late'"));
        assert_eq!(store.get().get(Prayer::Zuhr), "01:15 PM");
    }

    #[test]
    fn test_values_are_stored_trimmed() {
        let store = TimingsStore::new();
        let changes = apply_fields(&store, &pairs(&[("Isha", "  08:15 PM \n")]), false).unwrap();
        assert_eq!(changes[0].value, "08:15 PM");
        assert_eq!(store.get().get(Prayer::Isha), "08:15 PM");
    }

    #[test]
    fn test_repeated_prayer_last_value_wins() {
        let store = TimingsStore::new();
        apply_fields(
            &store,
            &pairs(&[("Maghrib", "06:25 PM"), ("maghrib", "06:35 PM")]),
            true,
        )
        .unwrap();
        assert_eq!(store.get().get(Prayer::Maghrib), "06:35 PM");
    }
}
