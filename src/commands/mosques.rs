//! Mosque list and mosque detail commands.

use anyhow::{Context, Result};

use super::CommandContext;
use crate::mosques::{self, Mosque};
use crate::surfaces::MosqueDetailScreen;

/// Handle the mosques command - list every mosque in the directory
pub fn handle_mosques_command(json: bool) -> Result<()> {
    let directory = mosques::all();

    if json {
        let output =
            serde_json::to_string_pretty(directory).context("Failed to serialize mosque list")?;
        println!("{output}");
        return Ok(());
    }

    log_version!();
    log_block_start!("Nearby Mosques ({} found)", directory.len());
    for mosque in directory {
        print_card(mosque);
    }
    log_pipe!();
    log_info!("Run 'jamat mosque <id>' for a mosque's timings");
    log_end!();
    Ok(())
}

fn print_card(mosque: &Mosque) {
    log_block_start!("[{}] {}", mosque.id, mosque.name);
    log_indented!("{} • {}", mosque.distance, mosque.location);
    log_indented!("Next: {}", mosque.next_prayer);
}

/// Handle the mosque command - show one mosque with the shared timings
pub fn handle_mosque_command(context: &CommandContext, id: &str, json: bool) -> Result<()> {
    let mosque = mosques::find(id)?;
    let screen = MosqueDetailScreen::new(context.store.clone(), mosque);
    let view = screen.render();

    if json {
        let output =
            serde_json::to_string_pretty(&view).context("Failed to serialize mosque details")?;
        println!("{output}");
        return Ok(());
    }

    log_version!();
    MosqueDetailScreen::print(&view);
    log_end!();
    Ok(())
}

/// Display help for the mosques command
pub fn display_help() {
    log_version!();
    log_block_start!("mosques - List nearby mosques");
    log_block_start!("Usage: jamat mosques [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("-j, --json   Print the list as JSON");
    log_end!();
}

/// Display help for the mosque command
pub fn display_mosque_help() {
    log_version!();
    log_block_start!("mosque - Show one mosque's jamat timings");
    log_block_start!("Usage: jamat mosque [OPTIONS] <id>");
    log_block_start!("Arguments:");
    log_indented!("<id>   Mosque id as shown by 'jamat mosques'");
    log_block_start!("Options:");
    log_indented!("-j, --json   Print the screen as JSON");
    log_end!();
}
