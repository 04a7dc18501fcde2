//! HTTP client for Nominatim-compatible geocoders.
//!
//! This module wraps the `/search` endpoint, handling query parameters,
//! status checking, and response parsing.

use super::error::GeocodeError;
use super::models::Place;

/// Makes search requests and conforms the response to [`Place`] data.
///
pub struct Client {
    pub(crate) base_url: String,
    country_codes: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL, identifying itself with
    /// the user agent (Nominatim's usage policy requires one).
    ///
    pub fn new(
        base_url: &str,
        user_agent: &str,
        country_codes: &str,
    ) -> Result<Self, GeocodeError> {
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            country_codes: country_codes.to_owned(),
            http_client: reqwest::Client::builder().user_agent(user_agent).build()?,
        })
    }

    /// Return the best match for the query, or none.
    ///
    pub async fn search(&self, query: &str) -> Result<Option<Place>, GeocodeError> {
        let request_url = format!("{}/search", &self.base_url);
        let mut params = vec![
            ("q", query),
            ("format", "json"),
            ("addressdetails", "1"),
            ("limit", "1"),
        ];
        if !self.country_codes.is_empty() {
            params.push(("countrycodes", self.country_codes.as_str()));
        }

        let response = self
            .http_client
            .get(&request_url)
            .query(&params)
            .send()
            .await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!("Geocoder request failed with status {}: {}", status, message);
            return Err(GeocodeError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let response_bytes = response.bytes().await?;
        let places: Vec<Place> = serde_json::from_slice(&response_bytes).map_err(|e| {
            log::error!(
                "Failed to deserialize geocoder response: {}. Response body: {}",
                e,
                String::from_utf8_lossy(&response_bytes)
            );
            e
        })?;
        log::debug!("Geocoder returned {} candidate(s)", places.len());
        Ok(places.into_iter().next())
    }
}
