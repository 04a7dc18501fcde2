//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::backend::BackendError;
pub use crate::config::ConfigError;
pub use crate::geocode::GeocodeError;
pub use crate::state::StateError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Geocoding provider errors
    #[error("Geocoder error: {0}")]
    Geocode(#[from] GeocodeError),

    /// MailMyBallot backend errors
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// State management errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

impl From<log::SetLoggerError> for AppError {
    fn from(e: log::SetLoggerError) -> Self {
        AppError::Logger(e.to_string())
    }
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
