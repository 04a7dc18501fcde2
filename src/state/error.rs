//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No network worker is attached to the state
    #[error("Network event channel not set")]
    NetworkUnavailable,

    /// The network worker has shut down
    #[error("Failed to dispatch network event: {0}")]
    DispatchFailed(String),

    /// Route string could not be parsed
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}
