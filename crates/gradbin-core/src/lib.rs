//! gradbin-core: gradient payload core library.
//!
//! This crate holds every pure transformation in gradbin: payload format
//! detection, the two normalizers, the gradient descriptor builder and the
//! JSON exporter, plus the shared configuration types.
//!
//! # Architecture
//!
//! ```text
//! envelope ──► detect ──► normalizer::{xml, json} ──► GradientDocument
//!                                                        │
//!                                            render ◄────┴────► export
//! ```
//!
//! Nothing in here performs network I/O or holds state between calls; the
//! record sources live in `gradbin-feeds` and the orchestration in the
//! `gradbin` binary crate.

pub mod config;
pub mod detect;
pub mod envelope;
pub mod error;
pub mod export;
pub mod normalizer;
pub mod render;
pub mod types;

pub use detect::{detect_format, SourceFormat};
pub use error::{ExportError, NormalizeError, PayloadError};
pub use normalizer::normalize;
pub use render::{render, Rendering};
pub use types::{GradientDocument, Keypoint, PropColor, DEFAULT_COLOR, DEFAULT_PROP_NAME};
