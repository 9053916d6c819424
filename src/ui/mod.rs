//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Layout of the navigation bar, movie list, footer and log pane
//! - Theme management
//! - Styling helpers

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
