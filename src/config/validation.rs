//! Configuration validation functionality.

use anyhow::Result;

use super::Config;
use crate::timings::validation::snapshot_issues;

/// Reject configurations that cannot be used as given.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(location) = &config.location
        && location.trim().is_empty()
    {
        anyhow::bail!("location must not be empty (remove the line to use the default)");
    }

    // Under strict validation malformed starting timings are an error rather than a warning
    if config.strict_validation()
        && let Some(timings) = &config.timings
    {
        let issues = snapshot_issues(timings);
        if !issues.is_empty() {
            anyhow::bail!(
                "strict_validation is enabled but [timings] is invalid: {}",
                issues.join("; ")
            );
        }
    }

    Ok(())
}
