//! Resolved address records.
//!
//! A [`Locale`] is produced by the geocoder, promoted with a backend
//! identifier once persisted, and consumed by the jurisdiction router.

mod us_state;

pub use us_state::UsState;

use serde::{Deserialize, Serialize};

/// Identifier the backend assigns to a persisted locale.
pub type LocaleId = String;

/// Geographic coordinates of a locale.
///
/// Serialized as a `[lat, lng]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(c: Coordinates) -> Self {
        (c.latitude, c.longitude)
    }
}

/// Defines resolved address data structure.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    #[serde(rename = "address")]
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub city: String,
    pub state: UsState,
    #[serde(rename = "postcode")]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LocaleId>,
    #[serde(
        rename = "latLong",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub coordinates: Option<Coordinates>,
}

impl Locale {
    /// Return a copy of this locale carrying the backend identifier.
    ///
    /// Locales are replaced wholesale, so promotion builds a new value
    /// instead of patching the one held in state.
    pub fn with_id(&self, id: LocaleId) -> Locale {
        Locale {
            id: Some(id),
            ..self.clone()
        }
    }

    /// Whether the backend has accepted this locale.
    pub fn is_persisted(&self) -> bool {
        self.id.as_deref().map_or(false, |id| !id.is_empty())
    }

    /// Whether the postal code is a usable 5-digit ZIP.
    pub fn is_routable(&self) -> bool {
        self.postal_code.len() == 5 && self.postal_code.chars().all(|c| c.is_ascii_digit())
    }

    /// Compare two locales ignoring the persisted identifier.
    pub fn same_address(&self, other: &Locale) -> bool {
        self.street == other.street
            && self.unit == other.unit
            && self.city == other.city
            && self.state == other.state
            && self.postal_code == other.postal_code
    }

    /// Single-line rendering used by the address panel.
    pub fn one_line(&self) -> String {
        match &self.unit {
            Some(unit) => format!(
                "{} #{}, {}, {} {}",
                self.street,
                unit,
                self.city,
                self.state.code(),
                self.postal_code
            ),
            None => format!(
                "{}, {}, {} {}",
                self.street,
                self.city,
                self.state.code(),
                self.postal_code
            ),
        }
    }
}
