use super::{InputError, ZipCode};
use crate::backend::{Backend, JurisdictionData};
use crate::state::{Notification, Route, State};
use log::*;
use std::sync::{Arc, Weak};
use tokio::sync::Mutex;

/// Notification shown when the jurisdiction lookup fails.
///
pub const ZIP_FAILURE_MESSAGE: &str = "Something wrong happened while querying for your ZIP Code.
We're sorry this happened, if you try again and the error persists try contacting us.";

/// Notification shown when the ZIP field does not hold five digits.
///
pub const ZIP_INVALID_MESSAGE: &str = "Please enter a 5-digit ZIP Code.";

/// Exit point of a quick-start submission.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuickStartOutcome {
    /// Blank input; nothing happened.
    Skipped,
    /// Input failed validation; no request was made.
    Rejected(InputError),
    /// The backend lookup failed; a notification was raised.
    Failed,
    /// The address route for the jurisdiction was pushed.
    Started {
        jurisdiction: JurisdictionData,
        zip: ZipCode,
    },
    Detached,
}

/// Resolves a ZIP code to its jurisdiction and routes into address entry.
///
/// Never touches the resolution state; failures surface as notifications.
///
#[derive(Clone)]
pub struct QuickStart {
    backend: Arc<dyn Backend>,
    state: Weak<Mutex<State>>,
}

impl QuickStart {
    pub fn new(state: &Arc<Mutex<State>>, backend: Arc<dyn Backend>) -> QuickStart {
        QuickStart {
            backend,
            state: Arc::downgrade(state),
        }
    }

    /// Validate the ZIP and look up its jurisdiction.
    ///
    pub async fn submit(&self, raw_zip: &str) -> QuickStartOutcome {
        let zip = match ZipCode::parse(raw_zip) {
            Ok(Some(zip)) => zip,
            Ok(None) => return QuickStartOutcome::Skipped,
            Err(e) => {
                debug!("Rejected quick-start input: {}", e);
                let notified = self
                    .with_state(|s| s.notify(Notification::warning(ZIP_INVALID_MESSAGE)))
                    .await;
                return match notified {
                    Some(()) => QuickStartOutcome::Rejected(e),
                    None => QuickStartOutcome::Detached,
                };
            }
        };

        info!("Fetching jurisdiction for ZIP {}...", zip);
        match self.backend.fetch_jurisdiction_state(zip.as_str()).await {
            Ok(jurisdiction) => {
                info!("ZIP {} belongs to {}", zip, jurisdiction.state);
                let route = Route::Address {
                    state: jurisdiction.state,
                    zip: Some(zip.clone()),
                };
                match self.with_state(|s| s.push_route(route)).await {
                    Some(()) => QuickStartOutcome::Started { jurisdiction, zip },
                    None => QuickStartOutcome::Detached,
                }
            }
            Err(e) => {
                error!("Failed to fetch jurisdiction for ZIP {}: {}", zip, e);
                match self
                    .with_state(|s| s.notify(Notification::error(ZIP_FAILURE_MESSAGE)))
                    .await
                {
                    Some(()) => QuickStartOutcome::Failed,
                    None => QuickStartOutcome::Detached,
                }
            }
        }
    }

    async fn with_state<R>(&self, f: impl FnOnce(&mut State) -> R) -> Option<R> {
        let state = self.state.upgrade()?;
        let mut guard = state.lock().await;
        Some(f(&mut guard))
    }
}
