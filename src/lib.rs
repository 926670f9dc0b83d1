//! gradbin: JSONBin gradient viewer.
//!
//! Fetches a bin, detects whether its `gradientData` payload is XML or JSON,
//! normalizes it into one [`GradientDocument`], renders the multi-stop
//! gradient and exports the structured document as JSON. This crate owns the
//! orchestration; the pure transformations live in `gradbin-core`, the
//! record sources in `gradbin-feeds` and the terminal preview in
//! `gradbin-tui`.
//!
//! # Architecture
//!
//! ```text
//! RecordSource ──► envelope ──► detect ──► normalize ──► render ──► TUI / stdout
//!                                              │
//!                                              └──► export
//! ```

pub mod pipeline;

pub use gradbin_core::{GradientDocument, Keypoint, PropColor, Rendering, SourceFormat};
pub use pipeline::{fetch_and_load, load_envelope, load_payload, LoadError, Loaded, PayloadKind};
