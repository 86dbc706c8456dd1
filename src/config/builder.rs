//! Default configuration file creation.
//!
//! The default file is generated with a small builder so that settings and
//! their comments line up in one column.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::timings::Prayer;

/// Create a default config file at `path`, creating parent directories as needed.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration");
    log_indented!("{}", path.display());
    Ok(())
}

/// The text of a freshly generated `jamat.toml`.
pub fn default_config_content() -> String {
    let mut builder = ConfigBuilder::new()
        .add_section("Display")
        .add_setting(
            "location",
            &format!("\"{DEFAULT_LOCATION_LABEL}\""),
            "Location label shown on the home screen",
        )
        .add_section("Editing")
        .add_setting(
            "strict_validation",
            &DEFAULT_STRICT_VALIDATION.to_string(),
            "Reject saves containing times that are not valid times of day",
        )
        .add_setting(
            "notify_changes",
            &DEFAULT_NOTIFY_CHANGES.to_string(),
            "Report each committed edit while the admin editor is open",
        )
        .add_setting(
            "edit_mode",
            "\"live\"",
            "\"live\" commits every edit at once, \"draft\" commits on save",
        )
        .add_section("Starting timings")
        .add_comment("Uncomment to replace the built-in timings (all six are required)")
        .add_comment("[timings]");

    for prayer in Prayer::ALL {
        builder = builder.add_comment(&format!(
            "{} = \"{}\"",
            prayer.as_str(),
            prayer.default_time()
        ));
    }

    builder.build()
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
    Comment(String),
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn add_comment(mut self, text: &str) -> Self {
        self.entries.push(ConfigEntry::Comment(format!("# {text}")));
        self
    }

    fn build(self) -> String {
        // Align all setting comments one space past the longest setting line
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(title);
                    first_section = false;
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
                ConfigEntry::Comment(text) => result.push(text),
            }
        }

        let mut content = result.join("\n");
        content.push('\n');
        content
    }
}
