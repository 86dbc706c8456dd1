//! Get command implementation for reading prayer times.
//!
//! Output is undecorated so it can be consumed by scripts: a single field prints
//! just its value, several print `Prayer=time` lines, and `--json` prints an object.

use anyhow::Result;
use serde_json::json;

use super::CommandContext;
use crate::constants::EXIT_FAILURE;
use crate::timings::{Prayer, TimingsSnapshot};

/// Handle the get command - print prayer times from the store
pub fn handle_get_command(context: &CommandContext, fields: &[String], json: bool) -> Result<()> {
    let prayers = match resolve_fields(fields) {
        Ok(prayers) => prayers,
        Err(unknown) => {
            if json {
                let error_json = json!({
                    "error": format!("Unknown prayer: {}", unknown.join(", ")),
                    "type": "UnknownPrayer",
                    "available": Prayer::ALL.iter().map(Prayer::as_str).collect::<Vec<_>>(),
                });
                eprintln!("{}", serde_json::to_string(&error_json)?);
            } else {
                log_pipe!();
                for name in &unknown {
                    log_error!("Unknown prayer: '{}'", name);
                }
                log_block_start!("Available prayers:");
                log_indented!("all (special: returns all six)");
                log_indented!("Fajr, Zuhr, Asr, Maghrib, Isha, Jummah");
                log_end!();
            }
            std::process::exit(EXIT_FAILURE);
        }
    };

    let snapshot = context.store.get();
    if context.debug_enabled {
        log_pipe!();
        log_debug!("Read {} field(s) from the timings store", prayers.len());
    }

    print!("{}", format_output(&snapshot, &prayers, fields, json)?);
    Ok(())
}

/// Map requested names to prayers, or return every name that is not a prayer.
fn resolve_fields(fields: &[String]) -> std::result::Result<Vec<Prayer>, Vec<String>> {
    if fields.iter().any(|field| field.eq_ignore_ascii_case("all")) {
        return Ok(Prayer::ALL.to_vec());
    }

    let mut prayers = Vec::new();
    let mut unknown = Vec::new();
    for field in fields {
        match field.parse::<Prayer>() {
            Ok(prayer) => prayers.push(prayer),
            Err(e) => unknown.push(e.name),
        }
    }

    if unknown.is_empty() {
        Ok(prayers)
    } else {
        Err(unknown)
    }
}

fn format_output(
    snapshot: &TimingsSnapshot,
    prayers: &[Prayer],
    fields: &[String],
    json: bool,
) -> Result<String> {
    let single = fields.len() == 1 && !fields[0].eq_ignore_ascii_case("all");

    if json {
        let mut json_obj = serde_json::Map::new();
        for prayer in prayers {
            json_obj.insert(prayer.as_str().to_string(), json!(snapshot.get(*prayer)));
        }
        return Ok(format!("{}\n", serde_json::to_string(&json_obj)?));
    }

    if single {
        return Ok(format!("{}\n", snapshot.get(prayers[0])));
    }

    Ok(prayers
        .iter()
        .map(|prayer| format!("{}={}\n", prayer, snapshot.get(*prayer)))
        .collect())
}

/// Display help for the get command
pub fn display_help() {
    log_version!();
    log_block_start!("get - Print prayer times");
    log_block_start!("Usage: jamat get [OPTIONS] [all|<prayer>...]");
    log_block_start!("Arguments:");
    log_indented!("<prayer>  Fajr, Zuhr, Asr, Maghrib, Isha or Jummah (any case)");
    log_indented!("all       Every prayer (default)");
    log_block_start!("Options:");
    log_indented!("-j, --json   Print a JSON object");
    log_block_start!("Examples:");
    log_indented!("jamat get Asr");
    log_indented!("jamat get fajr isha --json");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_resolve_all() {
        assert_eq!(resolve_fields(&names(&["all"])).unwrap(), Prayer::ALL.to_vec());
        assert_eq!(resolve_fields(&names(&["Asr", "ALL"])).unwrap().len(), 6);
    }

    #[test]
    fn test_resolve_collects_unknown_names() {
        let unknown = resolve_fields(&names(&["Asr", "Eid", "witr"])).unwrap_err();
        assert_eq!(unknown, vec!["Eid".to_string(), "witr".to_string()]);
    }

    #[test]
    fn test_single_field_prints_value_only() {
        let snapshot = TimingsSnapshot::default();
        let fields = names(&["asr"]);
        let prayers = resolve_fields(&fields).unwrap();
        let output = format_output(&snapshot, &prayers, &fields, false).unwrap();
        assert_eq!(output, "04:45 PM\n");
    }

    #[test]
    fn test_multiple_fields_print_pairs() {
        let snapshot = TimingsSnapshot::default();
        let fields = names(&["Fajr", "Jummah"]);
        let prayers = resolve_fields(&fields).unwrap();
        let output = format_output(&snapshot, &prayers, &fields, false).unwrap();
        assert_eq!(output, "Fajr=05:30 AM\nJummah=01:45 PM\n");
    }

    #[test]
    fn test_json_output() {
        let snapshot = TimingsSnapshot::default().with(Prayer::Isha, "08:15 PM");
        let fields = names(&["Isha"]);
        let prayers = resolve_fields(&fields).unwrap();
        let output = format_output(&snapshot, &prayers, &fields, true).unwrap();
        assert_eq!(output, "{\"Isha\":\"08:15 PM\"}\n");
    }
}
