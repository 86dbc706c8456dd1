//! Command-line command handlers for jamat.
//!
//! Each command builds a fresh timings store from configuration, runs its
//! surfaces against it, and exits. Nothing survives the process.

pub mod admin;
pub mod get;
pub mod help;
pub mod mosques;
pub mod set;
pub mod show;

use anyhow::Result;

use crate::args::CommonOptions;
use crate::config::{self, Config};
use crate::timings::store::TimingsStore;
use crate::timings::validation::snapshot_issues;

/// Everything a command needs: the loaded configuration and the store seeded from it.
pub struct CommandContext {
    pub config: Config,
    pub store: TimingsStore,
    pub debug_enabled: bool,
    /// `--strict` on the command line or `strict_validation` in config
    pub strict: bool,
}

impl CommandContext {
    /// Load configuration and create the store for this run.
    pub fn prepare(options: &CommonOptions) -> Result<Self> {
        if options.config_dir.is_some() {
            config::set_config_dir(options.config_dir.clone())?;
        }

        let config = Config::load()?;
        Self::from_config(config, options)
    }

    /// Build the context from an already loaded configuration.
    ///
    /// A strict run refuses starting timings that are not valid times of day,
    /// whether strictness comes from `--strict` or from the config file.
    pub fn from_config(config: Config, options: &CommonOptions) -> Result<Self> {
        let strict = options.strict || config.strict_validation();
        let initial = config.initial_snapshot();

        if strict {
            let issues = snapshot_issues(&initial);
            if !issues.is_empty() {
                anyhow::bail!(
                    "Strict validation is enabled but [timings] is invalid: {}",
                    issues.join("; ")
                );
            }
        }

        let store = TimingsStore::with_snapshot(initial);

        if options.debug_enabled {
            config.log_config();
            log_pipe!();
            log_debug!("Timings store created");
        }

        Ok(Self {
            config,
            store,
            debug_enabled: options.debug_enabled,
            strict,
        })
    }
}
