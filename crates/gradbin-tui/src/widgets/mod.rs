//! Ratatui widgets for the gradbin preview.

pub mod command_bar;
pub mod gradient_bar;
pub mod header;
pub mod help;
pub mod props_panel;
pub mod status_bar;
