//! `:` commands: parsing and execution.

use std::path::PathBuf;

use crate::{
    app::{AppState, Notice},
    theme::Theme,
};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    // Toggle the help popup
    Help,
    // Write the document, optionally into a directory other than the configured one
    Export(Option<PathBuf>),
    // Toggle stop labels under the gradient bar
    Labels,
    Theme(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Nothing was typed; the bar closes without acting.
    #[error("")]
    Empty,
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Parse the text typed after the `:` prefix.
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "labels" => Ok(Command::Labels),
            "e" | "export" => Ok(Command::Export(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "theme" => {
                if rest.is_empty() {
                    Err(CommandError::Usage("theme <default|gruvbox>"))
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Export(dir) => s.export(dir),
        Command::Labels => s.show_labels = !s.show_labels,
        Command::Theme(name) => match Theme::by_name(&name) {
            Some(theme) => {
                tracing::debug!(theme = %theme.name, "theme switched");
                s.theme = theme;
            }
            None => s.notice = Some(Notice::Error(format!("unknown theme: {name}"))),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
