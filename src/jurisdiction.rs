//! Routing of resolved locales to state-specific vote-by-mail flows.

use crate::locale::{Locale, UsState};

/// States whose vote-by-mail application can be completed in this app.
///
pub const SUPPORTED_STATES: &[UsState] = &[
    UsState::Arizona,
    UsState::Florida,
    UsState::Georgia,
    UsState::Maine,
    UsState::Maryland,
    UsState::Michigan,
    UsState::Minnesota,
    UsState::Nebraska,
    UsState::Nevada,
    UsState::NewYork,
    UsState::NorthCarolina,
    UsState::Oklahoma,
    UsState::Wisconsin,
    UsState::Wyoming,
];

/// Errors raised when a locale cannot be routed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// Locale lacks a usable ZIP
    #[error("Locale has no usable postal code: '{0}'")]
    NoPostalCode(String),
}

/// Which eligibility form a locale leads to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Supported(UsState),
    Unsupported(UsState),
}

impl Eligibility {
    pub fn state(&self) -> UsState {
        match self {
            Eligibility::Supported(state) | Eligibility::Unsupported(state) => *state,
        }
    }
}

/// Decide the state-specific flow for a finalized locale.
///
pub fn route(locale: &Locale) -> Result<Eligibility, RoutingError> {
    if !locale.is_routable() {
        return Err(RoutingError::NoPostalCode(locale.postal_code.clone()));
    }
    if SUPPORTED_STATES.contains(&locale.state) {
        Ok(Eligibility::Supported(locale.state))
    } else {
        Ok(Eligibility::Unsupported(locale.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::address::en::{CityName, StreetName};
    use fake::Fake;

    fn locale(state: UsState, postal_code: &str) -> Locale {
        Locale {
            street: StreetName().fake(),
            unit: None,
            city: CityName().fake(),
            state,
            postal_code: postal_code.to_string(),
            id: None,
            coordinates: None,
        }
    }

    #[test]
    fn test_supported_state() {
        assert_eq!(
            route(&locale(UsState::Florida, "33401")),
            Ok(Eligibility::Supported(UsState::Florida))
        );
    }

    #[test]
    fn test_unsupported_state() {
        let eligibility = route(&locale(UsState::Texas, "73301")).unwrap();
        assert_eq!(eligibility, Eligibility::Unsupported(UsState::Texas));
        assert_eq!(eligibility.state(), UsState::Texas);
    }

    #[test]
    fn test_missing_postal_code_is_not_routable() {
        assert_eq!(
            route(&locale(UsState::Florida, "")),
            Err(RoutingError::NoPostalCode(String::new()))
        );
        assert!(route(&locale(UsState::Florida, "3340")).is_err());
    }
}
