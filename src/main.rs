//! Entry point for the `jamat` binary.
//!
//! Parses the command line, builds the per-run [`CommandContext`] (configuration
//! plus a freshly seeded timings store) and hands it to the selected command.
//! Errors are printed once, here, and turn into a failing exit code.

use anyhow::Result;

use jamat::args::{self, CliAction, ParsedArgs};
use jamat::commands::{self, CommandContext};
use jamat::constants::EXIT_FAILURE;
use jamat::log_error_exit;

fn main() {
    let parsed_args = ParsedArgs::from_env();

    if let Err(e) = run(parsed_args.action) {
        log_error_exit!("{e:#}");
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(action: CliAction) -> Result<()> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Help { command } => commands::help::run_help_command(command.as_deref()),
        // The directory is static, so listing it needs no configuration
        CliAction::Mosques { options } => commands::mosques::handle_mosques_command(options.json),
        CliAction::Show { options } => {
            let context = CommandContext::prepare(&options)?;
            commands::show::handle_show_command(&context, options.json)
        }
        CliAction::Get { options, fields } => {
            let context = CommandContext::prepare(&options)?;
            commands::get::handle_get_command(&context, &fields, options.json)
        }
        CliAction::Set { options, fields } => {
            let context = CommandContext::prepare(&options)?;
            commands::set::handle_set_command(&context, &fields)
        }
        CliAction::Mosque { options, id } => {
            let context = CommandContext::prepare(&options)?;
            commands::mosques::handle_mosque_command(&context, &id, options.json)
        }
        CliAction::Admin {
            options,
            email,
            password,
        } => {
            let context = CommandContext::prepare(&options)?;
            commands::admin::handle_admin_command(&context, email, password)
        }
    }
}
