//! Command-line arguments.

use crate::combo::{ComboError, KeyCombo};
use crate::error::{CliError, Result};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Add {
        combo: KeyCombo,
        text: String,
        stays_open: bool,
    },
    Remove {
        combo: KeyCombo,
    },
    Resolve {
        combo: KeyCombo,
    },
    Watch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cli {
    pub options_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
    pub command: Command,
}

pub fn print_usage() {
    eprintln!("Usage: hotkeys [OPTIONS] <COMMAND>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list                                List hotkeys, most specific first");
    eprintln!("  add <COMBO> <TEXT>... [--stay-open] Bind TEXT to COMBO (replaces existing)");
    eprintln!("  remove <COMBO>                      Remove the hotkey bound to COMBO");
    eprintln!("  resolve <COMBO>                     Show what COMBO would insert");
    eprintln!("  watch                               Resolve key presses live (Esc quits)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --options <FILE>    Options file holding the hotkeys");
    eprintln!("  --config <FILE>     App config (TOML)");
    eprintln!("  -h, --help          Print help");
    eprintln!();
    eprintln!("COMBO is [C-][M-][S-]KEY, e.g. C-B, ctrl-shift-F1, M-Enter");
}

pub fn parse_args(args: &[String]) -> Result<Cli> {
    let mut options_file: Option<PathBuf> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut stays_open = false;
    let mut positional: Vec<&str> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                return Ok(Cli {
                    options_file,
                    config_file,
                    command: Command::Help,
                });
            }
            "--options" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| CliError::Usage("--options requires a file path".to_string()))?;
                options_file = Some(PathBuf::from(path));
            }
            "--config" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| CliError::Usage("--config requires a file path".to_string()))?;
                config_file = Some(PathBuf::from(path));
            }
            "--stay-open" => stays_open = true,
            // A lone "-" is the minus key, not an option.
            arg if arg.starts_with("--")
                || (arg.starts_with('-') && arg.len() > 1 && positional.is_empty()) =>
            {
                return Err(CliError::UnknownOption(arg.to_string()));
            }
            arg => positional.push(arg),
        }
        i += 1;
    }

    let command = build_command(&positional, stays_open)?;
    Ok(Cli {
        options_file,
        config_file,
        command,
    })
}

fn build_command(positional: &[&str], stays_open: bool) -> Result<Command> {
    let Some((name, rest)) = positional.split_first() else {
        return Ok(Command::Help);
    };
    if stays_open && *name != "add" {
        return Err(CliError::Usage(
            "--stay-open only applies to 'add'".to_string(),
        ));
    }

    match *name {
        "list" => {
            expect_args(name, rest, 0)?;
            Ok(Command::List)
        }
        "watch" => {
            expect_args(name, rest, 0)?;
            Ok(Command::Watch)
        }
        "remove" => {
            expect_args(name, rest, 1)?;
            Ok(Command::Remove {
                combo: combo_arg(rest[0])?,
            })
        }
        "resolve" => {
            expect_args(name, rest, 1)?;
            Ok(Command::Resolve {
                combo: combo_arg(rest[0])?,
            })
        }
        "add" => {
            let Some((combo, text)) = rest.split_first() else {
                return Err(CliError::Usage("add requires a combo and text".to_string()));
            };
            if text.is_empty() {
                return Err(CliError::Usage("add requires text to bind".to_string()));
            }
            Ok(Command::Add {
                combo: combo_arg(combo)?,
                text: text.join(" "),
                stays_open,
            })
        }
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn expect_args(name: &str, rest: &[&str], count: usize) -> Result<()> {
    if rest.len() != count {
        return Err(CliError::Usage(format!(
            "{} takes {} argument(s), got {}",
            name,
            count,
            rest.len()
        )));
    }
    Ok(())
}

fn combo_arg(input: &str) -> Result<KeyCombo> {
    input.parse().map_err(|err: ComboError| CliError::InvalidCombo {
        input: input.to_string(),
        reason: err.to_string(),
    })
}
