//! US states and territories that a locale can belong to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! us_states {
    ($($variant:ident => ($code:literal, $name:literal)),+ $(,)?) => {
        /// A US state (or the District of Columbia).
        ///
        /// Serialized as its two-letter postal code.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum UsState {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl UsState {
            /// Every state in alphabetical order of postal code.
            pub const ALL: &'static [UsState] = &[$(UsState::$variant),+];

            /// Two-letter postal code, e.g. `FL`.
            pub fn code(&self) -> &'static str {
                match self {
                    $(UsState::$variant => $code,)+
                }
            }

            /// Full name, e.g. `Florida`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(UsState::$variant => $name,)+
                }
            }
        }
    };
}

us_states! {
    Alaska => ("AK", "Alaska"),
    Alabama => ("AL", "Alabama"),
    Arkansas => ("AR", "Arkansas"),
    Arizona => ("AZ", "Arizona"),
    California => ("CA", "California"),
    Colorado => ("CO", "Colorado"),
    Connecticut => ("CT", "Connecticut"),
    DistrictOfColumbia => ("DC", "District of Columbia"),
    Delaware => ("DE", "Delaware"),
    Florida => ("FL", "Florida"),
    Georgia => ("GA", "Georgia"),
    Hawaii => ("HI", "Hawaii"),
    Iowa => ("IA", "Iowa"),
    Idaho => ("ID", "Idaho"),
    Illinois => ("IL", "Illinois"),
    Indiana => ("IN", "Indiana"),
    Kansas => ("KS", "Kansas"),
    Kentucky => ("KY", "Kentucky"),
    Louisiana => ("LA", "Louisiana"),
    Massachusetts => ("MA", "Massachusetts"),
    Maryland => ("MD", "Maryland"),
    Maine => ("ME", "Maine"),
    Michigan => ("MI", "Michigan"),
    Minnesota => ("MN", "Minnesota"),
    Missouri => ("MO", "Missouri"),
    Mississippi => ("MS", "Mississippi"),
    Montana => ("MT", "Montana"),
    NorthCarolina => ("NC", "North Carolina"),
    NorthDakota => ("ND", "North Dakota"),
    Nebraska => ("NE", "Nebraska"),
    NewHampshire => ("NH", "New Hampshire"),
    NewJersey => ("NJ", "New Jersey"),
    NewMexico => ("NM", "New Mexico"),
    Nevada => ("NV", "Nevada"),
    NewYork => ("NY", "New York"),
    Ohio => ("OH", "Ohio"),
    Oklahoma => ("OK", "Oklahoma"),
    Oregon => ("OR", "Oregon"),
    Pennsylvania => ("PA", "Pennsylvania"),
    RhodeIsland => ("RI", "Rhode Island"),
    SouthCarolina => ("SC", "South Carolina"),
    SouthDakota => ("SD", "South Dakota"),
    Tennessee => ("TN", "Tennessee"),
    Texas => ("TX", "Texas"),
    Utah => ("UT", "Utah"),
    Virginia => ("VA", "Virginia"),
    Vermont => ("VT", "Vermont"),
    Washington => ("WA", "Washington"),
    Wisconsin => ("WI", "Wisconsin"),
    WestVirginia => ("WV", "West Virginia"),
    Wyoming => ("WY", "Wyoming"),
}

impl UsState {
    /// Look up a state by its postal code, ignoring case.
    pub fn from_code(code: &str) -> Option<UsState> {
        let code = code.trim();
        UsState::ALL
            .iter()
            .copied()
            .find(|s| s.code().eq_ignore_ascii_case(code))
    }

    /// Look up a state by its full name, ignoring case.
    pub fn from_name(name: &str) -> Option<UsState> {
        let name = name.trim();
        UsState::ALL
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Look up an ISO 3166-2 subdivision code such as `US-FL`.
    pub fn from_iso3166(iso: &str) -> Option<UsState> {
        iso.trim()
            .strip_prefix("US-")
            .and_then(UsState::from_code)
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UsState {
    type Err = String;

    /// Accepts either a postal code or a full name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UsState::from_code(s)
            .or_else(|| UsState::from_name(s))
            .ok_or_else(|| format!("Unknown US state '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code_and_name() {
        assert_eq!(UsState::from_code("fl"), Some(UsState::Florida));
        assert_eq!(UsState::from_name("north carolina"), Some(UsState::NorthCarolina));
        assert_eq!(UsState::from_iso3166("US-WI"), Some(UsState::Wisconsin));
        assert_eq!(UsState::from_iso3166("CA-ON"), None);
        assert_eq!(UsState::from_code("ZZ"), None);
    }

    #[test]
    fn test_all_states_round_trip_through_from_str() {
        assert_eq!(UsState::ALL.len(), 51);
        for state in UsState::ALL {
            assert_eq!(state.code().parse::<UsState>(), Ok(*state));
            assert_eq!(state.name().parse::<UsState>(), Ok(*state));
        }
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&UsState::DistrictOfColumbia).unwrap();
        assert_eq!(json, "\"DC\"");
        let state: UsState = serde_json::from_str("\"MI\"").unwrap();
        assert_eq!(state, UsState::Michigan);
    }
}
