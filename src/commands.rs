//! One-shot commands run against the hotkey table.

use crate::cli::Command;
use crate::combo::KeyCombo;
use anyhow::{Context, Result, bail};
use hotkeys_core::{Hotkeys, OptionsStore};
use std::io::Write;

/// Run a non-interactive command, writing its report to `out`.
pub fn run_command<S: OptionsStore>(
    command: &Command,
    hotkeys: &mut Hotkeys<S>,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::List => list(hotkeys, out),
        Command::Add {
            combo,
            text,
            stays_open,
        } => {
            let mut messages: Vec<String> = Vec::new();
            let added = hotkeys
                .user_added(combo.key, combo.modifiers, text, *stays_open, &mut messages)
                .with_context(|| format!("Failed to bind {}", combo))?;
            if !added {
                bail!("{}", messages.join("; "));
            }
            writeln!(out, "Bound {}", combo)?;
            Ok(())
        }
        Command::Remove { combo } => {
            let removed = hotkeys
                .user_removed(combo.key, combo.modifiers)
                .with_context(|| format!("Failed to unbind {}", combo))?;
            if removed {
                writeln!(out, "Removed {}", combo)?;
            } else {
                writeln!(out, "No hotkey bound to {}", combo)?;
            }
            Ok(())
        }
        Command::Resolve { combo } => {
            match hotkeys.is_hotkey(combo.key, &combo.modifiers) {
                Some(hit) if hit.stays_open => writeln!(out, "{} (stays open)", hit.text)?,
                Some(hit) => writeln!(out, "{}", hit.text)?,
                None => writeln!(out, "No match for {}", combo)?,
            }
            Ok(())
        }
        Command::Help | Command::Watch => {
            bail!("'{:?}' is not a one-shot command", command)
        }
    }
}

fn list<S: OptionsStore>(hotkeys: &Hotkeys<S>, out: &mut dyn Write) -> Result<()> {
    let table = hotkeys.table();
    if table.is_empty() {
        writeln!(out, "No hotkeys defined")?;
        return Ok(());
    }
    for hotkey in table.iter() {
        let combo = KeyCombo {
            key: hotkey.trigger,
            modifiers: hotkey.modifiers,
        };
        let marker = if hotkey.stays_open { "+" } else { " " };
        writeln!(out, "{:<20} {} {}", combo.to_string(), marker, hotkey.text)?;
    }
    writeln!(out, "{} of {} hotkeys", table.len(), table.max_hotkeys())?;
    Ok(())
}
