//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! | Key(s)           | Event            |
//! |------------------|------------------|
//! | `q`, `Ctrl+c`    | `Quit`           |
//! | `e`              | `Export`         |
//! | `l`              | `ToggleLabels`   |
//! | `?`              | `Char('?')`      |
//! | `:`              | `Char(':')`      |
//! | `←` / `→`        | `Left` / `Right` |
//! | printable char   | `Char(c)`        |
//! | `Backspace`      | `Backspace`      |
//! | `Enter`          | `Enter`          |
//! | `Esc`            | `Escape`         |
//! | terminal resize  | `Resize(w, h)`   |
//!
//! ## Insert mode
//!
//! While the command bar is open the event loop calls
//! [`to_app_event_insert`] instead: every printable character (including
//! `q`, `e` and `l`) is forwarded as `Char`, and only `Ctrl+c`, `Esc`,
//! `Enter`, `Backspace` and the arrow keys keep their bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Write the loaded document to the export directory.
    Export,
    /// Show or hide the stop labels under the gradient bar.
    ToggleLabels,
    /// Move the text cursor left.
    Left,
    /// Move the text cursor right.
    Right,
    /// A printable character.
    Char(char),
    Backspace,
    Enter,
    /// Dismiss the active modal (help popup, command bar).
    Escape,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] in normal mode. Returns `None` for events
/// with no meaning to the application.
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] while a text input has focus.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Char('e') if key.modifiers == Mod::NONE => Some(AppEvent::Export),
        Char('l') if key.modifiers == Mod::NONE => Some(AppEvent::ToggleLabels),
        Left => Some(AppEvent::Left),
        Right => Some(AppEvent::Right),
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }
        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),
        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
        Left => Some(AppEvent::Left),
        Right => Some(AppEvent::Right),
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }
        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
