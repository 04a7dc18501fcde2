//! Backend-specific error types.

/// Errors that can occur during backend RPC calls.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Backend answered with an error envelope
    #[error("Backend rejected {method}: {message}")]
    Rejected { method: String, message: String },

    /// Failed to deserialize backend response
    #[error("Failed to deserialize backend response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Backend named a state this client does not know
    #[error("Unknown state in backend response: {0}")]
    UnknownState(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let error = BackendError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("500"));
        assert!(error_str.contains("Internal Server Error"));

        let error = BackendError::Rejected {
            method: "addLocale".to_string(),
            message: "duplicate".to_string(),
        };
        assert!(error.to_string().contains("addLocale"));
        assert!(error.to_string().contains("duplicate"));

        let error = BackendError::UnknownState("Ontario".to_string());
        assert!(error.to_string().contains("Ontario"));
    }
}
