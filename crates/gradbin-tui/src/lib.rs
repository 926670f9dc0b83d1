//! gradbin TUI: ratatui preview of a loaded gradient.
//!
//! The binary performs the load and hands the outcome over as a [`Session`];
//! the preview itself never fetches. Exporting from the preview writes the
//! session's document through `gradbin_core::export`.

pub mod app;
pub mod color;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

use gradbin_core::{config::Config, render, GradientDocument, Rendering, SourceFormat};

pub use app::App;

/// Everything the preview knows about the current load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Where the text came from, e.g. `jsonbin http://…` or `file a.json`.
    pub source: String,
    pub bin_id: Option<String>,
    /// Set once format detection ran, whether or not parsing succeeded.
    pub format: Option<SourceFormat>,
    pub document: Option<GradientDocument>,
    pub rendering: Option<Rendering>,
    /// User-facing failure message.
    pub error: Option<String>,
}

impl Session {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_bin_id(mut self, bin_id: impl Into<String>) -> Self {
        self.bin_id = Some(bin_id.into());
        self
    }

    pub fn with_document(mut self, format: SourceFormat, document: GradientDocument) -> Self {
        self.rendering = Some(render(&document));
        self.format = Some(format);
        self.document = Some(document);
        self.error = None;
        self
    }

    pub fn with_error(mut self, format: Option<SourceFormat>, message: impl Into<String>) -> Self {
        self.format = format;
        self.document = None;
        self.rendering = None;
        self.error = Some(message.into());
        self
    }
}

/// Open the preview and block until the user quits.
pub fn run(session: Session, config: Config) -> anyhow::Result<()> {
    tracing::info!(source = %session.source, loaded = session.document.is_some(), "starting preview");
    App::new(session, config).run()
}
