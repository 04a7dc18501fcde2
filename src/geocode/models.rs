//! Response shapes of the Nominatim `/search` endpoint.

use serde::Deserialize;

/// One entry of the `/search?format=json` result array.
///
#[derive(Debug, Deserialize)]
pub(crate) struct Place {
    // Nominatim encodes coordinates as strings
    pub lat: Option<String>,
    pub lon: Option<String>,
    #[serde(default)]
    pub address: PlaceAddress,
}

/// Address breakdown returned with `addressdetails=1`.
///
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlaceAddress {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub hamlet: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "ISO3166-2-lvl4")]
    pub iso3166_lvl4: Option<String>,
    pub postcode: Option<String>,
}

impl PlaceAddress {
    /// Most specific settlement name available.
    pub fn settlement(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
            .or(self.hamlet.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_place_deserializes_partial_address() {
        let place: Place = serde_json::from_value(json!({
            "lat": "42.0",
            "lon": "-83.5",
            "display_name": "Somewhere",
            "address": { "town": "Ypsilanti", "state": "Michigan" }
        }))
        .unwrap();
        assert_eq!(place.address.settlement(), Some("Ypsilanti"));
        assert_eq!(place.address.postcode, None);
    }

    #[test]
    fn test_place_without_address_block() {
        let place: Place = serde_json::from_value(json!({ "lat": "1", "lon": "2" })).unwrap();
        assert!(place.address.settlement().is_none());
    }
}
