//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. All state changes go
//! through [`AppState::handle`], which never touches the terminal.

use std::{io, path::PathBuf, time::Duration};

use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gradbin_core::{config::Config, export};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};

use crate::{
    commands::{execute_command, Command, CommandError},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        gradient_bar::GradientBar,
        header::Header,
        help::HelpPopup,
        props_panel::PropsPanel,
        status_bar::StatusBar,
    },
    Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Vim-style `:` command line is active.
    Command,
}

/// Outcome of the last user action, shown in the status pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub session: Session,
    pub config: Config,
    pub theme: Theme,
    pub mode: Mode,
    pub show_help: bool,
    pub show_labels: bool,
    pub command_bar: CommandBarState,
    pub notice: Option<Notice>,
    pub quit: bool,
}

impl AppState {
    pub fn new(session: Session, config: Config) -> Self {
        let theme = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
            Theme::load_default()
        });
        Self {
            show_labels: config.ui.show_stop_labels,
            session,
            config,
            theme,
            mode: Mode::Normal,
            show_help: false,
            command_bar: CommandBarState::default(),
            notice: None,
            quit: false,
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return;
        }

        if self.mode == Mode::Command {
            self.handle_command_mode(event);
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::Export => self.export(None),
            AppEvent::ToggleLabels => self.show_labels = !self.show_labels,
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::Char(':') => {
                tracing::debug!("entering command mode");
                self.command_bar.clear();
                self.mode = Mode::Command;
            }
            // Terminal resize is handled automatically by ratatui
            _ => {}
        }
    }

    fn handle_command_mode(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit = true,
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                self.close_command_bar();
            }
            AppEvent::Enter => match Command::parse(&self.command_bar.input) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "executing command");
                    self.close_command_bar();
                    execute_command(self, cmd);
                }
                Err(CommandError::Empty) => self.close_command_bar(),
                // Show the error; bar stays open
                Err(err) => self.command_bar.error = Some(err.to_string()),
            },
            other => self.command_bar.handle(&other),
        }
    }

    fn close_command_bar(&mut self) {
        self.command_bar.clear();
        self.mode = Mode::Normal;
    }

    /// Write the loaded document into `dir`, or the configured export
    /// directory, and record the outcome as the current notice.
    pub fn export(&mut self, dir: Option<PathBuf>) {
        let dir = dir.unwrap_or_else(|| self.config.export.directory.clone());
        self.notice = Some(match export::export_latest(self.session.document.as_ref(), &dir) {
            Ok(path) => Notice::Info(format!("Exported to {}", path.display())),
            Err(err) => {
                tracing::warn!(error = %err, dir = %dir.display(), "export failed");
                Notice::Error(err.to_string())
            }
        });
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(session: Session, config: Config) -> Self {
        App {
            state: AppState::new(session, config),
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(50))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                let app_event = match self.state.mode {
                    Mode::Command => event::to_app_event_insert(raw),
                    Mode::Normal => event::to_app_event(raw),
                };
                if let Some(ev) = app_event {
                    tracing::debug!(mode = ?self.state.mode, event = ?ev, "key event");
                    self.state.handle(ev);
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let document = state.session.document.as_ref();
    let status = StatusBar::new(&state.session, state.notice.as_ref(), &state.theme);

    let [header, bar, props, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(PropsPanel::height(document)),
        Constraint::Length(status.height()),
    ])
    .areas(area);

    let title = state
        .session
        .format
        .map_or("Gradient", |format| format.gradient_label());

    frame.render_widget(Header::new(state.session.bin_id.as_deref(), &state.theme), header);
    frame.render_widget(
        GradientBar::new(document, &state.theme)
            .title(title)
            .show_labels(state.show_labels),
        bar,
    );
    frame.render_widget(PropsPanel::new(document, &state.theme), props);
    frame.render_widget(status, status_area);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.mode == Mode::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
