//! Interactive mode: read key presses from the terminal and print the macro
//! each one resolves to.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use hotkeys_core::{Hotkeys, Key, KeyState, OptionsStore};
use std::io::{self, Write};

/// Leaves raw mode however the loop exits.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

pub fn run_watch<S: OptionsStore>(hotkeys: &Hotkeys<S>) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "Press keys to resolve hotkeys, Esc to quit.\r\n")?;
    out.flush()?;

    let _guard = RawModeGuard::enable()?;
    let mut state = KeyState::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only process key press events (Windows reports Press + Release)
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Esc && key.modifiers.is_empty() {
            break;
        }

        sync_modifiers(&mut state, key.modifiers);
        let Some(trigger) = translate_key(&key) else {
            continue;
        };
        match hotkeys.is_hotkey(trigger, &state) {
            Some(hit) => {
                let suffix = if hit.stays_open { " (stays open)" } else { "" };
                write!(out, "{}: {}{}\r\n", trigger, hit.text, suffix)?;
            }
            None => log::debug!("no hotkey for {}", trigger),
        }
        out.flush()?;
    }
    Ok(())
}

/// Terminals only report modifiers alongside other keys, so mirror them
/// onto the left-hand modifier keys.
fn sync_modifiers(state: &mut KeyState, modifiers: KeyModifiers) {
    state.set_pressed(Key::ControlLeft, modifiers.contains(KeyModifiers::CONTROL));
    state.set_pressed(Key::ShiftLeft, modifiers.contains(KeyModifiers::SHIFT));
    state.set_pressed(Key::AltLeft, modifiers.contains(KeyModifiers::ALT));
}

fn translate_key(key: &KeyEvent) -> Option<Key> {
    match key.code {
        KeyCode::Char(ch) => Key::from_char(ch),
        KeyCode::F(n) => Key::from_name(&format!("F{}", n)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab | KeyCode::BackTab => Some(Key::Tab),
        KeyCode::Backspace => Some(Key::BackSpace),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::CapsLock => Some(Key::CapsLock),
        KeyCode::ScrollLock => Some(Key::ScrollLock),
        KeyCode::NumLock => Some(Key::NumLock),
        KeyCode::PrintScreen => Some(Key::PrintScreen),
        KeyCode::Pause => Some(Key::Pause),
        KeyCode::Menu => Some(Key::Menu),
        _ => None,
    }
}
