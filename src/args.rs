//! Command-line argument parsing and processing.
//!
//! Arguments are split into global flags, which may appear anywhere, and
//! positionals, whose first element selects the command. Anything the parser
//! does not recognize produces `ShowHelpDueToError` after a warning.

/// Flags shared by every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonOptions {
    pub debug_enabled: bool,
    /// Directory holding jamat.toml, overriding the default location
    pub config_dir: Option<String>,
    /// Reject edits whose times do not read as a time of day
    pub strict: bool,
    /// Emit JSON instead of the decorated output
    pub json: bool,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Render the home screen (default when no command is given)
    Show { options: CommonOptions },
    /// Print selected prayer times
    Get {
        options: CommonOptions,
        fields: Vec<String>,
    },
    /// Apply prayer time edits to the in-process store and show the result
    Set {
        options: CommonOptions,
        fields: Vec<(String, String)>,
    },
    /// List the mosque directory
    Mosques { options: CommonOptions },
    /// Show one mosque with its timings
    Mosque { options: CommonOptions, id: String },
    /// Log in as admin and open the timings editor
    Admin {
        options: CommonOptions,
        email: Option<String>,
        password: Option<String>,
    },
    /// Detailed help for one command, or the command overview
    Help { command: Option<String> },

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments, including the program name
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut options = CommonOptions::default();
        let mut email: Option<String> = None;
        let mut password: Option<String> = None;
        let mut display_help = false;
        let mut display_version = false;
        let mut positionals: Vec<String> = Vec::new();

        let mut idx = 0;
        while idx < args_vec.len() {
            let arg = args_vec[idx].as_str();
            match arg {
                "--debug" | "-d" => options.debug_enabled = true,
                "--strict" => options.strict = true,
                "--json" | "-j" => options.json = true,
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--config" | "-c" | "--email" | "--password" => {
                    let Some(value) = args_vec.get(idx + 1) else {
                        log_warning!("Missing value for {}", arg);
                        return error_action();
                    };
                    match arg {
                        "--email" => email = Some(value.clone()),
                        "--password" => password = Some(value.clone()),
                        _ => options.config_dir = Some(value.clone()),
                    }
                    idx += 1;
                }
                _ if arg.starts_with("--") || (arg.starts_with('-') && arg.len() == 2) => {
                    log_warning!("Unknown option: {}", arg);
                    return error_action();
                }
                _ => positionals.push(arg.to_string()),
            }
            idx += 1;
        }

        // Help and version take precedence over any command
        if display_version {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if display_help {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }

        let Some((command, rest)) = positionals.split_first() else {
            return ParsedArgs {
                action: CliAction::Show { options },
            };
        };

        let action = match command.as_str() {
            "show" => {
                if !rest.is_empty() {
                    return unexpected_arguments(command, rest);
                }
                CliAction::Show { options }
            }
            "get" | "g" => CliAction::Get {
                options,
                fields: if rest.is_empty() {
                    vec!["all".to_string()]
                } else {
                    rest.to_vec()
                },
            },
            "set" | "s" => match parse_field_values(rest) {
                Some(fields) => CliAction::Set { options, fields },
                None => {
                    log_warning!(
                        "Missing prayer or time. Usage: jamat set <prayer>=<time> [<prayer>=<time>...]"
                    );
                    log_warning!("Example: jamat set Asr=\"05:00 PM\" Isha=\"08:15 PM\"");
                    return error_action();
                }
            },
            "mosques" | "m" => {
                if !rest.is_empty() {
                    return unexpected_arguments(command, rest);
                }
                CliAction::Mosques { options }
            }
            "mosque" => match rest {
                [id] => CliAction::Mosque {
                    options,
                    id: id.clone(),
                },
                _ => {
                    log_warning!("Usage: jamat mosque <id>");
                    return error_action();
                }
            },
            "admin" | "a" => {
                if !rest.is_empty() {
                    return unexpected_arguments(command, rest);
                }
                CliAction::Admin {
                    options,
                    email,
                    password,
                }
            }
            "help" | "h" => match rest {
                [] => CliAction::Help { command: None },
                [topic] => CliAction::Help {
                    command: Some(topic.clone()),
                },
                _ => return unexpected_arguments(command, rest),
            },
            _ => {
                log_warning!("Unknown command: {}", command);
                return error_action();
            }
        };

        ParsedArgs { action }
    }

    /// Parse from the process arguments.
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Parse `Prayer=time` arguments, also accepting `Prayer time` pairs.
///
/// Returns `None` when no pair could be formed or a value is missing.
fn parse_field_values(args: &[String]) -> Option<Vec<(String, String)>> {
    let mut fields = Vec::new();
    let mut idx = 0;
    while idx < args.len() {
        if let Some((field, value)) = args[idx].split_once('=') {
            if field.is_empty() {
                return None;
            }
            fields.push((field.to_string(), value.to_string()));
            idx += 1;
        } else {
            let value = args.get(idx + 1)?;
            fields.push((args[idx].clone(), value.clone()));
            idx += 2;
        }
    }

    if fields.is_empty() { None } else { Some(fields) }
}

fn unexpected_arguments(command: &str, rest: &[String]) -> ParsedArgs {
    log_warning!(
        "Unexpected arguments for '{}': {}",
        command,
        rest.join(" ")
    );
    error_action()
}

fn error_action() -> ParsedArgs {
    ParsedArgs {
        action: CliAction::ShowHelpDueToError,
    }
}

/// Display version information.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Display usage and option help.
pub fn display_help() {
    log_version!();
    log_block_start!("Usage: jamat [OPTIONS] [COMMAND]");
    log_block_start!("Commands:");
    log_indented!("show                      Show today's prayer times (default)");
    log_indented!("get, g [all|<prayer>...]  Print prayer times");
    log_indented!("set, s <prayer>=<time>    Edit prayer times for this run");
    log_indented!("mosques, m                List nearby mosques");
    log_indented!("mosque <id>               Show a mosque and its jamat timings");
    log_indented!("admin, a                  Log in and edit timings interactively");
    log_indented!("help, h [COMMAND]         Show detailed help for a command");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>        Use <dir>/jamat.toml as configuration");
    log_indented!("-d, --debug               Show detailed store activity");
    log_indented!("-j, --json                Print machine-readable JSON");
    log_indented!("    --strict              Reject times that are not valid times of day");
    log_indented!("    --email <email>       Admin email for the admin command");
    log_indented!("    --password <pass>     Admin password for the admin command");
    log_indented!("-h, --help                Print help information");
    log_indented!("-V, --version             Print version information");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        let mut full = vec!["jamat"];
        full.extend_from_slice(args);
        ParsedArgs::parse(full).action
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            parse(&[]),
            CliAction::Show {
                options: CommonOptions::default()
            }
        );
    }

    #[test]
    fn test_parse_global_flags_anywhere() {
        let action = parse(&["get", "--json", "Asr", "-d", "--config", "/tmp/jamat"]);
        assert_eq!(
            action,
            CliAction::Get {
                options: CommonOptions {
                    debug_enabled: true,
                    config_dir: Some("/tmp/jamat".to_string()),
                    strict: false,
                    json: true,
                },
                fields: vec!["Asr".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_get_defaults_to_all() {
        match parse(&["g"]) {
            CliAction::Get { fields, .. } => assert_eq!(fields, vec!["all".to_string()]),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_parse_set_equals_form() {
        match parse(&["set", "Asr=05:00 PM", "Isha=08:15 PM", "--strict"]) {
            CliAction::Set { options, fields } => {
                assert!(options.strict);
                assert_eq!(
                    fields,
                    vec![
                        ("Asr".to_string(), "05:00 PM".to_string()),
                        ("Isha".to_string(), "08:15 PM".to_string()),
                    ]
                );
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_parse_set_pair_form() {
        match parse(&["s", "fajr", "05:10 AM"]) {
            CliAction::Set { fields, .. } => {
                assert_eq!(fields, vec![("fajr".to_string(), "05:10 AM".to_string())]);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_parse_set_empty_value_is_allowed() {
        match parse(&["set", "Fajr="]) {
            CliAction::Set { fields, .. } => {
                assert_eq!(fields, vec![("Fajr".to_string(), String::new())]);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_parse_set_missing_value() {
        assert_eq!(parse(&["set"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["set", "Asr"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["set", "=05:00 PM"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_mosque_requires_single_id() {
        assert_eq!(
            parse(&["mosque", "2"]),
            CliAction::Mosque {
                options: CommonOptions::default(),
                id: "2".to_string()
            }
        );
        assert_eq!(parse(&["mosque"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["mosque", "1", "2"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_admin_credentials() {
        assert_eq!(
            parse(&["admin", "--email", "imam@example.com", "--password", "secret"]),
            CliAction::Admin {
                options: CommonOptions::default(),
                email: Some("imam@example.com".to_string()),
                password: Some("secret".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_missing_flag_value() {
        assert_eq!(parse(&["--config"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["admin", "--email"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_parse_help_and_version_take_precedence() {
        assert_eq!(parse(&["mosques", "--help"]), CliAction::ShowHelp);
        assert_eq!(parse(&["-h"]), CliAction::ShowHelp);
        assert_eq!(parse(&["get", "-V"]), CliAction::ShowVersion);
        assert_eq!(parse(&["--version", "--help"]), CliAction::ShowVersion);
    }

    #[test]
    fn test_parse_help_command() {
        assert_eq!(parse(&["help"]), CliAction::Help { command: None });
        assert_eq!(
            parse(&["h", "set"]),
            CliAction::Help {
                command: Some("set".to_string())
            }
        );
    }

    #[test]
    fn test_parse_unknown_command_and_option() {
        assert_eq!(parse(&["pray"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["--loud"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["show", "-x"]), CliAction::ShowHelpDueToError);
        assert_eq!(parse(&["show", "extra"]), CliAction::ShowHelpDueToError);
    }
}
