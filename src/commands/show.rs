//! Show command: render the home screen.

use anyhow::{Context, Result};
use chrono::Local;

use super::CommandContext;
use crate::surfaces::HomeScreen;

/// Handle the show command (also the default when no command is given).
pub fn handle_show_command(context: &CommandContext, json: bool) -> Result<()> {
    let screen = HomeScreen::new(context.store.clone(), context.config.location());
    let view = screen.render(Local::now().naive_local());

    if json {
        let output =
            serde_json::to_string_pretty(&view).context("Failed to serialize home screen")?;
        println!("{output}");
        return Ok(());
    }

    log_version!();
    HomeScreen::print(&view);
    log_end!();
    Ok(())
}

/// Display help for the show command
pub fn display_help() {
    log_version!();
    log_block_start!("show - Show today's prayer times");
    log_block_start!("Usage: jamat [show] [OPTIONS]");
    log_block_start!("Description:");
    log_indented!("Lists the five daily prayers with the time left until each one");
    log_indented!("that is still ahead. This is what runs when no command is given.");
    log_block_start!("Options:");
    log_indented!("-j, --json   Print the screen as JSON");
    log_end!();
}
