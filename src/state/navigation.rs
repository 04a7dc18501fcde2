//! Navigation-related state types.
//!
//! This module contains the views of the application and the route that
//! seeds them.

use super::StateError;
use crate::locale::UsState;
use crate::resolution::ZipCode;
use std::fmt;
use std::str::FromStr;

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Blurb,
    AddressForm,
}

/// Location within the application, e.g. `/address/FL/33401`.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum Route {
    #[default]
    Start,
    Address {
        state: UsState,
        zip: Option<ZipCode>,
    },
}

impl Route {
    /// ZIP carried by an address route.
    pub fn zip(&self) -> Option<&ZipCode> {
        match self {
            Route::Address { zip, .. } => zip.as_ref(),
            Route::Start => None,
        }
    }

    /// View a route lands on.
    pub fn view(&self) -> View {
        match self {
            Route::Start => View::Blurb,
            Route::Address { .. } => View::AddressForm,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Start => write!(f, "/"),
            Route::Address { state, zip: None } => write!(f, "/address/{}", state.code()),
            Route::Address {
                state,
                zip: Some(zip),
            } => write!(f, "/address/{}/{}", state.code(), zip),
        }
    }
}

impl FromStr for Route {
    type Err = StateError;

    /// Accepts `/`, `/address/<state>` and `/address/<state>/<zip>` where the
    /// state is a postal code or a full name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StateError::InvalidRoute(s.to_owned());
        let segments: Vec<&str> = s
            .trim()
            .trim_start_matches('#')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Start),
            ["address", state, rest @ ..] if rest.len() <= 1 => {
                let state = state
                    .replace("%20", " ")
                    .parse::<UsState>()
                    .map_err(|_| invalid())?;
                let zip = match rest.first() {
                    Some(raw) => Some(ZipCode::parse(raw).ok().flatten().ok_or_else(invalid)?),
                    None => None,
                };
                Ok(Route::Address { state, zip })
            }
            _ => Err(invalid()),
        }
    }
}
