//! Application state management module.
//!
//! This module contains the state shared by the render and event code:
//! - Main `State` struct holding the catalog, the favorites store and UI selections
//! - Navigation types (`View`, `NavLink`)
//! - State error handling

mod error;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use navigation::{nav_links, NavLink, View, NAV_BRAND};
pub use state_impl::{State, Status};
