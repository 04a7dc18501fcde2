//! Address resolution.
//!
//! This module owns the shared resolution state and the only code allowed to
//! write it:
//! - `QueryState` tracks whether an attempt is in flight or failed
//! - `AddressState` holds the last resolved locale
//! - `AddressResolutionFlow` drives geocoding and persistence
//! - `QuickStart` handles the ZIP entry banner
//!
//! Mutators are private to this module, so presentation code can only read.

mod address;
mod flow;
mod input;
mod query;
mod quickstart;

pub use address::AddressState;
pub use flow::{AddressResolutionFlow, FailurePolicy, Outcome, FAULT_MESSAGE};
pub use input::{AddressInput, InputError, ZipCode};
pub use query::{QueryState, QueryStatus};
pub use quickstart::{QuickStart, QuickStartOutcome, ZIP_FAILURE_MESSAGE, ZIP_INVALID_MESSAGE};

#[cfg(test)]
use crate::state::State;

/// Resolution state shared with the rest of the application.
///
#[derive(Clone, Debug, Default)]
pub struct ResolutionState {
    query: QueryState,
    address: AddressState,
}

impl ResolutionState {
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn address(&self) -> &AddressState {
        &self.address
    }
}

/// Proof of write access to a [`ResolutionState`]. Only this module can
/// create one, so only the resolution flows can write.
///
pub struct WriteAccess(());

/// Mark an attempt as in flight.
#[cfg(test)]
pub(crate) fn start_for_test(state: &mut State) {
    state.resolution_mut(&WriteAccess(())).query.start();
}

/// Record a failed attempt.
#[cfg(test)]
pub(crate) fn fail_for_test(state: &mut State, message: &str) {
    state
        .resolution_mut(&WriteAccess(()))
        .query
        .fail(message.to_owned());
}

/// Message shown when the geocoder has no match for the input.
///
pub fn not_found_message(input: &str) -> String {
    format!("No address found for \"{}\"", input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_embeds_input() {
        assert_eq!(
            not_found_message("asdkjasdkj not an address"),
            "No address found for \"asdkjasdkj not an address\""
        );
    }

    #[test]
    fn test_test_setters_go_through_query() {
        let mut state = State::default();
        start_for_test(&mut state);
        assert!(state.resolution().query().is_loading());
        fail_for_test(&mut state, "oops");
        assert_eq!(state.resolution().query().error(), Some("oops"));
    }

    #[test]
    fn test_default_state_is_idle_and_empty() {
        let state = ResolutionState::default();
        assert_eq!(*state.query().status(), QueryStatus::Idle);
        assert!(state.address().locale().is_none());
    }
}
