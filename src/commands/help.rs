//! Help command: detailed help for one command, or the command overview.

use anyhow::Result;

/// Run the help command (dispatcher)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("show") => super::show::display_help(),
        Some("get") | Some("g") => super::get::display_help(),
        Some("set") | Some("s") => super::set::display_help(),
        Some("mosques") | Some("m") => super::mosques::display_help(),
        Some("mosque") => super::mosques::display_mosque_help(),
        Some("admin") | Some("a") => super::admin::display_help(),
        Some("help") | Some("h") => display_help_help(),
        Some(unknown) => {
            log_warning_standalone!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
    Ok(())
}

fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("show                      Show today's prayer times (default)");
    log_indented!("get, g [all|<prayer>...]  Print prayer times");
    log_indented!("set, s <prayer>=<time>    Edit prayer times for this run");
    log_indented!("mosques, m                List nearby mosques");
    log_indented!("mosque <id>               Show a mosque and its jamat timings");
    log_indented!("admin, a                  Log in and edit timings interactively");
    log_indented!("help, h [COMMAND]         Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'jamat help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'jamat --help' to see all options and general usage.");
    log_end!();
}

fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: jamat help [COMMAND]");
    log_block_start!("Examples:");
    log_indented!("jamat help");
    log_indented!("jamat help set");
    log_indented!("jamat help admin");
    log_end!();
}
