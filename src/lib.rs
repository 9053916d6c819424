//! Terminal movie browser with a persistent favorites list.
//!
//! The crate is split into:
//! - `storage`: key-value persistence (file-backed or in-memory)
//! - `favorites`: the favorites store and movie records
//! - `catalog`: the movies available for browsing
//! - `state`, `ui`, `events`, `app`: the terminal interface

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod favorites;
pub mod logger;
pub mod state;
pub mod storage;
pub mod ui;
