//! HTTP client for backend RPC requests.
//!
//! Each procedure is exposed at `POST {base_url}/{method}` and takes its
//! arguments as a JSON array. Responses are wrapped in an [`Envelope`].

use super::error::BackendError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Tagged result wrapper used by every procedure.
///
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[serde(bound = "T: DeserializeOwned")]
pub(crate) enum Envelope<T> {
    Data { data: T },
    Error {
        #[serde(default)]
        error: Option<serde_json::Value>,
    },
}

/// Makes RPC requests to the backend and unwraps the response envelope.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder().build()?,
        })
    }

    /// Invoke the procedure with the arguments and return its data payload.
    ///
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        args: serde_json::Value,
    ) -> Result<T, BackendError> {
        let request_url = format!("{}/{}", &self.base_url, method);
        let response = self
            .http_client
            .post(&request_url)
            .json(&args)
            .send()
            .await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!(
                "Backend call '{}' failed with status {}: {}",
                method,
                status,
                message
            );
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response_bytes = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&response_bytes).map_err(|e| {
            log::error!(
                "Failed to deserialize response of '{}': {}. Response body: {}",
                method,
                e,
                String::from_utf8_lossy(&response_bytes)
            );
            e
        })?;

        match envelope {
            Envelope::Data { data } => Ok(data),
            Envelope::Error { error } => Err(BackendError::Rejected {
                method: method.to_owned(),
                message: error
                    .map(|e| match e {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .unwrap_or_else(|| String::from("unspecified error")),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_data() {
        let envelope: Envelope<String> =
            serde_json::from_value(json!({ "type": "data", "data": "Florida" })).unwrap();
        assert!(matches!(envelope, Envelope::Data { data } if data == "Florida"));
    }

    #[test]
    fn test_envelope_error_without_payload() {
        let envelope: Envelope<String> =
            serde_json::from_value(json!({ "type": "error" })).unwrap();
        assert!(matches!(envelope, Envelope::Error { error: None }));
    }

    #[test]
    fn test_envelope_unknown_tag() {
        let result = serde_json::from_value::<Envelope<String>>(json!({ "type": "other" }));
        assert!(result.is_err());
    }
}
