//! Event handling module.
//!
//! Terminal events: key presses polled on a background thread and applied to
//! the application state on the main thread.

pub mod terminal;
