use super::{not_found_message, AddressInput, ResolutionState, WriteAccess};
use crate::backend::Backend;
use crate::geocode::{Geocoded, Geocoder};
use crate::locale::Locale;
use crate::state::State;
use log::*;
use std::sync::{Arc, Weak};
use tokio::sync::Mutex;

/// Message shown when the geocoder could not be reached or failed.
///
pub const FAULT_MESSAGE: &str =
    "Something went wrong while looking up your address. Please try again.";

/// What happens to a previously resolved locale when a later attempt fails.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    #[default]
    PreserveAddress,
    ClearAddress,
}

impl FailurePolicy {
    pub fn from_clear_flag(clear: bool) -> FailurePolicy {
        if clear {
            FailurePolicy::ClearAddress
        } else {
            FailurePolicy::PreserveAddress
        }
    }
}

/// Exit point of a single submission.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Another attempt was already in flight.
    Ignored,
    /// The locale (with its identifier when `persisted`) is in state.
    Resolved { locale: Locale, persisted: bool },
    NotFound,
    Faulted,
    /// The owning state was dropped mid-flight; nothing was written.
    Detached,
}

/// Drives geocoding, state updates and persistence for address submissions.
///
/// Holds only a weak reference to the application state so an attempt that
/// outlives its owner turns into a no-op.
///
#[derive(Clone)]
pub struct AddressResolutionFlow {
    geocoder: Arc<dyn Geocoder>,
    backend: Arc<dyn Backend>,
    state: Weak<Mutex<State>>,
    policy: FailurePolicy,
}

impl AddressResolutionFlow {
    /// Attach the flow to the state, resetting the query status to idle.
    ///
    pub async fn mount(
        state: &Arc<Mutex<State>>,
        geocoder: Arc<dyn Geocoder>,
        backend: Arc<dyn Backend>,
        policy: FailurePolicy,
    ) -> AddressResolutionFlow {
        state
            .lock()
            .await
            .resolution_mut(&WriteAccess(()))
            .query
            .reset();
        debug!("Mounted address resolution flow ({:?})", policy);
        AddressResolutionFlow {
            geocoder,
            backend,
            state: Arc::downgrade(state),
            policy,
        }
    }

    /// Resolve the submitted address.
    ///
    /// `Idle -> Resolving` is guarded: a submission made while another is in
    /// flight returns [`Outcome::Ignored`] without calling the geocoder.
    ///
    pub async fn submit(&self, input: AddressInput) -> Outcome {
        match self.write(|r| r.query.start()).await {
            None => return Outcome::Detached,
            Some(false) => {
                debug!(
                    "Ignoring submission of '{}' while another is in flight",
                    input.address()
                );
                return Outcome::Ignored;
            }
            Some(true) => {}
        }

        info!("Resolving address '{}'...", input.address());
        match self.geocoder.resolve(input.address(), input.unit()).await {
            Ok(Geocoded::Found(locale)) => self.resolved(locale).await,
            Ok(Geocoded::NotFound) => {
                let message = not_found_message(input.raw());
                info!("{}", message);
                self.failed(message, Outcome::NotFound).await
            }
            Err(e) => {
                error!("Failed to geocode '{}': {}", input.address(), e);
                self.failed(FAULT_MESSAGE.to_owned(), Outcome::Faulted).await
            }
        }
    }

    /// Publish the locale, then try to persist it. Persistence failures are
    /// logged and otherwise ignored.
    ///
    async fn resolved(&self, locale: Locale) -> Outcome {
        if self
            .write(|r| r.address.replace(locale.clone()))
            .await
            .is_none()
        {
            return Outcome::Detached;
        }
        info!("Resolved address to {}", locale.one_line());

        match self.backend.persist_locale(&locale).await {
            Ok(id) => {
                let promoted = self
                    .write(|r| {
                        let promoted = r.address.promote(&locale, id);
                        r.query.finish();
                        promoted
                    })
                    .await;
                match promoted {
                    None => Outcome::Detached,
                    Some(Some(promoted)) => Outcome::Resolved {
                        locale: promoted,
                        persisted: true,
                    },
                    Some(None) => {
                        warn!("Locale changed before its identifier arrived; keeping the newer one");
                        Outcome::Resolved {
                            locale,
                            persisted: false,
                        }
                    }
                }
            }
            Err(e) => {
                warn!("Failed to persist locale {}: {}", locale.one_line(), e);
                match self.write(|r| r.query.finish()).await {
                    None => Outcome::Detached,
                    Some(()) => Outcome::Resolved {
                        locale,
                        persisted: false,
                    },
                }
            }
        }
    }

    async fn failed(&self, message: String, outcome: Outcome) -> Outcome {
        let policy = self.policy;
        let written = self
            .write(move |r| {
                r.query.fail(message);
                if policy == FailurePolicy::ClearAddress {
                    r.address.clear();
                }
            })
            .await;
        match written {
            Some(()) => outcome,
            None => Outcome::Detached,
        }
    }

    /// Apply a write to the resolution state if the owner is still alive.
    ///
    async fn write<R>(&self, f: impl FnOnce(&mut ResolutionState) -> R) -> Option<R> {
        let state = match self.state.upgrade() {
            Some(state) => state,
            None => {
                debug!("State owner dropped; skipping resolution update");
                return None;
            }
        };
        let mut guard = state.lock().await;
        Some(f(guard.resolution_mut(&WriteAccess(()))))
    }
}
