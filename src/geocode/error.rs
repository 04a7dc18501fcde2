//! Geocoder-specific error types.

/// Errors that can occur while geocoding an address.
///
/// A lookup that simply finds nothing is not an error; see
/// [`Geocoded::NotFound`](super::Geocoded::NotFound).
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// Address was empty after trimming
    #[error("Address must not be empty")]
    EmptyAddress,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Geocoder error (status {status}): {message}")]
    Provider { status: u16, message: String },

    /// Failed to deserialize provider response
    #[error("Failed to deserialize geocoder response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_error_display() {
        let error = GeocodeError::EmptyAddress;
        assert!(error.to_string().contains("must not be empty"));

        let error = GeocodeError::Provider {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("503"));
        assert!(error_str.contains("Service Unavailable"));
    }

    #[test]
    fn test_geocode_error_from_serde() {
        let serde_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let error: GeocodeError = serde_error.into();
        assert!(matches!(error, GeocodeError::Deserialization(_)));
    }
}
