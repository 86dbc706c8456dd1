//! Admin command: log in, then edit timings line by line on stdin.
//!
//! Each input line is either `<prayer> <time>` or one of the session words
//! `show`, `save`, `cancel` and `help`. End of input cancels.

use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::sync::mpsc::Receiver;

use super::CommandContext;
use crate::admin::{AdminCredentials, AdminGate};
use crate::surfaces::{EditMode, SaveReport, TimingsEditor, ValidationPolicy};
use crate::timings::TimingsSnapshot;
use crate::timings::events::TimingsEvent;

/// How an editor session ended.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Saved(SaveReport),
    /// Closed without saving; holds what the store held afterwards
    Cancelled(TimingsSnapshot),
}

/// Handle the admin command - log in and run an editor session on stdin
pub fn handle_admin_command(
    context: &CommandContext,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    log_version!();
    log_block_start!("Admin Login");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let credentials = read_credentials(&mut input, email, password)?;
    let session = AdminGate::login(&credentials)?;
    log_decorated!("Signed in as {}", session.email());

    // A strict run always edits a draft so a rejected save leaves the store as it was
    let mode = if context.strict {
        EditMode::Draft
    } else {
        context.config.edit_mode()
    };
    let policy = ValidationPolicy::from_strict(context.strict);
    if context.debug_enabled {
        log_pipe!();
        log_debug!("Editor mode: {}, strict: {}", mode.as_str(), context.strict);
    }

    let events = context
        .config
        .notify_changes()
        .then(|| context.store.subscribe());
    let editor = TimingsEditor::open(context.store.clone(), session, mode, policy);
    print_fields(&editor);
    print_session_help();

    match run_editor_session(editor, &mut input, events.as_ref())? {
        SessionOutcome::Saved(report) => {
            log_block_start!("Timings saved");
            for (prayer, time) in report.snapshot.iter() {
                log_indented!("{:<8} {}", prayer.as_str(), time);
            }
        }
        SessionOutcome::Cancelled(snapshot) => {
            log_block_start!("Editor closed without saving");
            if mode == EditMode::Live && snapshot != context.config.initial_snapshot() {
                log_indented!("Live edits were already applied");
            }
        }
    }

    log_end!();
    Ok(())
}

/// Fill in whichever credential was not given on the command line.
pub fn read_credentials<R: BufRead>(
    input: &mut R,
    email: Option<String>,
    password: Option<String>,
) -> Result<AdminCredentials> {
    let email = match email {
        Some(email) => email,
        None => prompt(input, "Email")?,
    };
    let password = match password {
        Some(password) => password,
        None => prompt(input, "Password")?,
    };
    Ok(AdminCredentials::new(email, password))
}

fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<String> {
    crate::logger::write_output(&format!("┃   {label}: "));
    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {}", label.to_lowercase()))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Drive the editor from `input` until save, cancel or end of input.
///
/// A save the editor rejects is reported and the session continues, so the
/// offending field can be corrected.
pub fn run_editor_session<R: BufRead>(
    mut editor: TimingsEditor,
    input: &mut R,
    events: Option<&Receiver<TimingsEvent>>,
) -> Result<SessionOutcome> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read editor input")?;
        if read == 0 {
            return Ok(SessionOutcome::Cancelled(editor.cancel()));
        }

        let entry = line.trim();
        match entry.to_lowercase().as_str() {
            "" => continue,
            "show" | "fields" => print_fields(&editor),
            "help" | "?" => print_session_help(),
            "cancel" | "quit" | "exit" => return Ok(SessionOutcome::Cancelled(editor.cancel())),
            "save" => match editor.save() {
                Ok(report) => {
                    report_events(events);
                    for warning in &report.warnings {
                        log_pipe!();
                        log_warning!("{}", warning);
                    }
                    return Ok(SessionOutcome::Saved(report));
                }
                Err(e) => {
                    log_pipe!();
                    log_error!("{}", e);
                }
            },
            _ => match entry.split_once(char::is_whitespace) {
                Some((name, time)) => match editor.edit_named(name, time.trim()) {
                    Ok(prayer) => {
                        if editor.mode() == EditMode::Draft {
                            log_decorated!("{} set to {} (unsaved)", prayer, time.trim());
                        }
                        report_events(events);
                    }
                    Err(e) => {
                        log_pipe!();
                        log_warning!("{}", e);
                    }
                },
                None => {
                    log_pipe!();
                    log_warning!("Expected '<prayer> <time>', e.g. 'Asr 05:00 PM'");
                }
            },
        }
    }
}

fn report_events(events: Option<&Receiver<TimingsEvent>>) {
    let Some(events) = events else {
        return;
    };
    for event in events.try_iter() {
        match event {
            TimingsEvent::FieldChanged {
                prayer,
                previous,
                value,
            } => log_decorated!("{} updated: {} → {}", prayer, previous, value),
            TimingsEvent::Replaced { .. } => log_decorated!("All timings updated"),
        }
    }
}

fn print_fields(editor: &TimingsEditor) {
    log_block_start!("Update Prayer Timings ({} mode)", editor.mode().as_str());
    for field in editor.fields() {
        if field.value.is_empty() {
            log_indented!("{:<18} [{}]", field.label, field.placeholder);
        } else {
            log_indented!("{:<18} {}", field.label, field.value);
        }
    }
}

fn print_session_help() {
    log_block_start!("Enter '<prayer> <time>' to change a time, then:");
    log_indented!("show     List the current fields");
    log_indented!("save     Save and close");
    log_indented!("cancel   Close without saving");
}

/// Display help for the admin command
pub fn display_help() {
    log_version!();
    log_block_start!("admin - Edit the prayer timings");
    log_block_start!("Usage: jamat admin [--email <email>] [--password <password>]");
    log_block_start!("Description:");
    log_indented!("Signs in with any non-empty email and password, then reads edits");
    log_indented!("from standard input. Credentials not given are prompted for.");
    log_block_start!("Options:");
    log_indented!("--email <email>         Admin email");
    log_indented!("--password <password>   Admin password");
    log_indented!("--strict                Refuse to save invalid times");
    log_block_start!("Example:");
    log_indented!("printf 'Asr 05:00 PM\\nsave\\n' | jamat admin --email a@b.c --password x");
    log_end!();
}
