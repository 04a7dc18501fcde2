mod client;
mod error;

pub use error::BackendError;

use crate::locale::{Locale, LocaleId, UsState};
use async_trait::async_trait;
use client::Client;
use log::*;
use serde_json::json;

/// Jurisdiction data returned for a ZIP code.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JurisdictionData {
    pub state: UsState,
}

/// Backend procedures the front-end depends on.
///
#[async_trait]
pub trait Backend: Send + Sync {
    /// Store the locale and return its identifier. Not idempotent.
    async fn persist_locale(&self, locale: &Locale) -> Result<LocaleId, BackendError>;

    /// Look up the jurisdiction responsible for the ZIP code.
    async fn fetch_jurisdiction_state(&self, zip: &str) -> Result<JurisdictionData, BackendError>;
}

/// Responsible for asynchronous interaction with the MailMyBallot backend.
///
pub struct BackendClient {
    client: Client,
}

impl BackendClient {
    /// Returns a new instance for the backend at the base URL.
    ///
    pub fn new(base_url: &str) -> Result<BackendClient, BackendError> {
        debug!("Initializing backend client for {}...", base_url);
        Ok(BackendClient {
            client: Client::new(base_url)?,
        })
    }

    /// Returns the name of the state the ZIP code belongs to.
    ///
    pub async fn fetch_state(&self, zip: &str) -> Result<String, BackendError> {
        debug!("Requesting state for ZIP {}...", zip);
        self.client.call::<String>("fetchState", json!([zip])).await
    }
}

#[async_trait]
impl Backend for BackendClient {
    async fn persist_locale(&self, locale: &Locale) -> Result<LocaleId, BackendError> {
        debug!("Persisting locale {}...", locale.one_line());
        let id = self
            .client
            .call::<LocaleId>("addLocale", json!([locale]))
            .await?;
        debug!("Backend stored locale with id {}", id);
        Ok(id)
    }

    async fn fetch_jurisdiction_state(&self, zip: &str) -> Result<JurisdictionData, BackendError> {
        let name = self.fetch_state(zip).await?;
        let state = name
            .parse::<UsState>()
            .map_err(|_| BackendError::UnknownState(name.clone()))?;
        Ok(JurisdictionData { state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::address::en::{CityName, StreetName};
    use fake::uuid::UUIDv4;
    use fake::Fake;
    use httpmock::prelude::*;
    use uuid::Uuid;

    fn locale() -> Locale {
        Locale {
            street: StreetName().fake(),
            unit: None,
            city: CityName().fake(),
            state: UsState::Georgia,
            postal_code: "30303".to_string(),
            id: None,
            coordinates: None,
        }
    }

    #[tokio::test]
    async fn persist_locale_success() -> Result<(), BackendError> {
        let id: Uuid = UUIDv4.fake();
        let locale = locale();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/addLocale")
                    .json_body(json!([{
                        "address": locale.street,
                        "city": locale.city,
                        "state": "GA",
                        "postcode": "30303",
                    }]));
                then.status(200)
                    .json_body(json!({ "type": "data", "data": id.to_string() }));
            })
            .await;

        let backend = BackendClient {
            client: Client::new(&server.base_url())?,
        };
        let persisted = backend.persist_locale(&locale).await?;
        mock.assert_async().await;
        assert_eq!(persisted, id.to_string());
        Ok(())
    }

    #[tokio::test]
    async fn persist_locale_rejected() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/addLocale");
                then.status(200)
                    .json_body(json!({ "type": "error", "error": "database unavailable" }));
            })
            .await;

        let backend = BackendClient::new(&server.base_url()).unwrap();
        let error = backend.persist_locale(&locale()).await.unwrap_err();
        mock.assert_async().await;
        match error {
            BackendError::Rejected { method, message } => {
                assert_eq!(method, "addLocale");
                assert_eq!(message, "database unavailable");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn persist_locale_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/addLocale");
                then.status(500).body("boom");
            })
            .await;

        let backend = BackendClient::new(&server.base_url()).unwrap();
        let error = backend.persist_locale(&locale()).await.unwrap_err();
        assert!(matches!(error, BackendError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn fetch_jurisdiction_state_success() -> Result<(), BackendError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/fetchState").json_body(json!(["33401"]));
                then.status(200)
                    .json_body(json!({ "type": "data", "data": "Florida" }));
            })
            .await;

        let backend = BackendClient::new(&format!("{}/", server.base_url()))?;
        let jurisdiction = backend.fetch_jurisdiction_state("33401").await?;
        mock.assert_async().await;
        assert_eq!(jurisdiction.state, UsState::Florida);
        Ok(())
    }

    #[tokio::test]
    async fn fetch_jurisdiction_state_unknown_name() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/fetchState");
                then.status(200)
                    .json_body(json!({ "type": "data", "data": "Puerto Rico" }));
            })
            .await;

        let backend = BackendClient::new(&server.base_url()).unwrap();
        let error = backend.fetch_jurisdiction_state("00901").await.unwrap_err();
        assert!(matches!(error, BackendError::UnknownState(name) if name == "Puerto Rico"));
    }
}
