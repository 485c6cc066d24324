//! hotkeys - bind key combos to text macros stored in an options file

mod cli;
mod combo;
mod commands;
mod config;
mod error;
#[cfg(feature = "tui")]
mod watch;

use anyhow::{Context, Result};
use cli::{Command, parse_args, print_usage};
use hotkeys_core::{Hotkeys, Options};
use std::env;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };
    if cli.command == Command::Help {
        print_usage();
        return;
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    let (config, warnings) = config::load_config(cli.config_file.as_ref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let options_path = cli
        .options_file
        .clone()
        .or_else(|| config.options_path())
        .context("No options file given and no config directory available")?;
    let (options, warnings) = Options::load(&options_path)
        .with_context(|| format!("Failed to load {}", options_path.display()))?;
    for warning in warnings {
        eprintln!("Warning: {}: {}", options_path.display(), warning);
    }

    let mut messages: Vec<String> = Vec::new();
    let mut hotkeys = Hotkeys::init(options, config.max_hotkeys, &mut messages);
    for message in messages {
        eprintln!("Warning: {}", message);
    }

    match &cli.command {
        Command::Watch => watch(&hotkeys),
        command => {
            let mut stdout = std::io::stdout();
            commands::run_command(command, &mut hotkeys, &mut stdout)
        }
    }
}

#[cfg(feature = "tui")]
fn watch(hotkeys: &Hotkeys<Options>) -> Result<()> {
    watch::run_watch(hotkeys).context("Terminal error")
}

#[cfg(not(feature = "tui"))]
fn watch(_hotkeys: &Hotkeys<Options>) -> Result<()> {
    anyhow::bail!("'watch' requires the 'tui' feature")
}
