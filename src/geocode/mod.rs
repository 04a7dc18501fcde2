mod client;
mod error;
mod models;

pub use error::GeocodeError;

use crate::locale::{Coordinates, Locale, UsState};
use async_trait::async_trait;
use client::Client;
use log::*;
use models::Place;
use regex::Regex;
use std::sync::OnceLock;

/// Result of a geocoding lookup that reached the provider.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Geocoded {
    Found(Locale),
    NotFound,
}

/// Turns free-text addresses into structured locales.
///
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve the address and unit. `NotFound` is an expected outcome;
    /// provider and transport failures are errors.
    async fn resolve(&self, raw_address: &str, unit: &str) -> Result<Geocoded, GeocodeError>;
}

/// Responsible for asynchronous interaction with the geocoding provider
/// including transformation of response data into [`Locale`] values.
///
pub struct GeocodeClient {
    client: Client,
}

impl GeocodeClient {
    /// Returns a new instance for the provider at the base URL.
    ///
    pub fn new(
        base_url: &str,
        user_agent: &str,
        country_codes: &str,
    ) -> Result<GeocodeClient, GeocodeError> {
        debug!("Initializing geocoder client for {}...", base_url);
        Ok(GeocodeClient {
            client: Client::new(base_url, user_agent, country_codes)?,
        })
    }
}

#[async_trait]
impl Geocoder for GeocodeClient {
    async fn resolve(&self, raw_address: &str, unit: &str) -> Result<Geocoded, GeocodeError> {
        let address = raw_address.trim();
        if address.is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        debug!("Geocoding address '{}'...", address);

        let place = match self.client.search(address).await? {
            Some(place) => place,
            None => {
                info!("No geocoder match for '{}'", address);
                return Ok(Geocoded::NotFound);
            }
        };

        match to_locale(place, address, unit) {
            Some(locale) => {
                debug!("Resolved '{}' to {}", address, locale.one_line());
                Ok(Geocoded::Found(locale))
            }
            None => {
                info!("Geocoder match for '{}' lacks a state or postal code", address);
                Ok(Geocoded::NotFound)
            }
        }
    }
}

/// Build a locale from the provider match, falling back to the raw input for
/// the street and ZIP. Returns none when the match cannot be routed.
///
fn to_locale(place: Place, raw_address: &str, unit: &str) -> Option<Locale> {
    let details = &place.address;

    let state = details
        .iso3166_lvl4
        .as_deref()
        .and_then(UsState::from_iso3166)
        .or_else(|| details.state.as_deref().and_then(UsState::from_name))?;

    let postal_code = details
        .postcode
        .as_deref()
        .and_then(five_digit_zip)
        .or_else(|| trailing_zip(raw_address))?;

    let street = match (&details.house_number, &details.road) {
        (Some(number), Some(road)) => format!("{} {}", number, road),
        (None, Some(road)) => road.to_owned(),
        _ => first_segment(raw_address),
    };

    let city = details
        .settlement()
        .map(str::to_owned)
        .unwrap_or_default();

    let coordinates = match (&place.lat, &place.lon) {
        (Some(lat), Some(lon)) => match (lat.parse::<f64>(), lon.parse::<f64>()) {
            (Ok(latitude), Ok(longitude)) if latitude.is_finite() && longitude.is_finite() => {
                Some(Coordinates {
                    latitude,
                    longitude,
                })
            }
            _ => None,
        },
        _ => None,
    };

    let unit = unit.trim();
    Some(Locale {
        street,
        unit: if unit.is_empty() {
            None
        } else {
            Some(unit.to_owned())
        },
        city,
        state,
        postal_code,
        id: None,
        coordinates,
    })
}

const POSTCODE_PATTERN: &str = r"^([0-9]{5})(?:-[0-9]{4})?$";
const TRAILING_ZIP_PATTERN: &str = r"\b([0-9]{5})(?:-[0-9]{4})?\s*$";

/// Accept a five digit or ZIP+4 postcode, keeping the leading five digits.
///
fn five_digit_zip(postcode: &str) -> Option<String> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    first_capture(&PATTERN, POSTCODE_PATTERN, postcode.trim())
}

/// Extract a ZIP written at the end of the user's input.
///
fn trailing_zip(raw_address: &str) -> Option<String> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    first_capture(&PATTERN, TRAILING_ZIP_PATTERN, raw_address)
}

fn first_capture(
    cell: &'static OnceLock<Result<Regex, regex::Error>>,
    pattern: &str,
    text: &str,
) -> Option<String> {
    let re = match cell.get_or_init(|| Regex::new(pattern)) {
        Ok(re) => re,
        Err(e) => {
            warn!("Failed to compile ZIP pattern '{}': {}", pattern, e);
            return None;
        }
    };
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

fn first_segment(raw_address: &str) -> String {
    raw_address
        .split(',')
        .next()
        .unwrap_or(raw_address)
        .trim()
        .to_owned()
}
