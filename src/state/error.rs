//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Route does not name a view
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}
