use crate::resolution::{AddressInput, AddressResolutionFlow, Outcome, QuickStart, QuickStartOutcome};
use anyhow::{anyhow, Result};
use log::*;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    ResolveAddress(AddressInput),
    QuickStart { zip: String },
}

/// Specify struct for dispatching network events to the resolution flows.
///
#[derive(Clone)]
pub struct Handler {
    flow: AddressResolutionFlow,
    quick_start: QuickStart,
}

impl Handler {
    /// Return new instance wrapping the mounted flows.
    ///
    pub fn new(flow: AddressResolutionFlow, quick_start: QuickStart) -> Self {
        Handler { flow, quick_start }
    }

    /// Handle network events by type.
    ///
    /// Expected failures are reported to the user through state; only a
    /// detached flow is an error here.
    ///
    pub async fn handle(&self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::ResolveAddress(input) => self.resolve_address(input).await,
            Event::QuickStart { zip } => self.quick_start(&zip).await,
        }
    }

    async fn resolve_address(&self, input: AddressInput) -> Result<()> {
        match self.flow.submit(input).await {
            Outcome::Resolved { locale, persisted } => {
                info!(
                    "Resolved address to '{}' (persisted: {})",
                    locale.one_line(),
                    persisted
                );
                Ok(())
            }
            Outcome::Ignored => {
                debug!("Address submission ignored while another is in flight");
                Ok(())
            }
            Outcome::NotFound | Outcome::Faulted => Ok(()),
            Outcome::Detached => Err(anyhow!("Address resolution outlived application state")),
        }
    }

    async fn quick_start(&self, zip: &str) -> Result<()> {
        match self.quick_start.submit(zip).await {
            QuickStartOutcome::Started { jurisdiction, zip } => {
                info!("Started {} application for ZIP {}", jurisdiction.state, zip);
                Ok(())
            }
            QuickStartOutcome::Skipped
            | QuickStartOutcome::Rejected(_)
            | QuickStartOutcome::Failed => Ok(()),
            QuickStartOutcome::Detached => Err(anyhow!("Quick start outlived application state")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendClient;
    use crate::geocode::GeocodeClient;
    use crate::locale::UsState;
    use crate::resolution::{FailurePolicy, QueryStatus};
    use crate::state::{Route, State, View};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    async fn handler_for(server: &MockServer, state: &Arc<Mutex<State>>) -> Handler {
        let geocoder = Arc::new(GeocodeClient::new(&server.base_url(), "mailmyballot-test", "us").unwrap());
        let backend = Arc::new(BackendClient::new(&server.base_url()).unwrap());
        let flow = AddressResolutionFlow::mount(
            state,
            geocoder,
            backend.clone(),
            FailurePolicy::PreserveAddress,
        )
        .await;
        Handler::new(flow, QuickStart::new(state, backend))
    }

    #[tokio::test]
    async fn quick_start_event_pushes_address_route() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/fetchState");
                then.status(200)
                    .json_body(json!({"type": "data", "data": "Georgia"}));
            })
            .await;
        let state = Arc::new(Mutex::new(State::default()));
        let handler = handler_for(&server, &state).await;

        handler
            .handle(Event::QuickStart {
                zip: "30303".to_string(),
            })
            .await?;
        mock.assert_async().await;

        let state = state.lock().await;
        assert_eq!(*state.current_view(), View::AddressForm);
        assert!(matches!(
            state.route(),
            Route::Address {
                state: UsState::Georgia,
                ..
            }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn unmatched_address_sets_error() -> Result<()> {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200).json_body(json!([]));
            })
            .await;
        let state = Arc::new(Mutex::new(State::default()));
        let handler = handler_for(&server, &state).await;

        handler
            .handle(Event::ResolveAddress(AddressInput::new("nowhere at all", "")?))
            .await?;

        let state = state.lock().await;
        assert_eq!(
            *state.resolution().query().status(),
            QueryStatus::Error("No address found for \"nowhere at all\"".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn dropped_state_is_an_error() {
        let server = MockServer::start_async().await;
        let state = Arc::new(Mutex::new(State::default()));
        let handler = handler_for(&server, &state).await;
        drop(state);

        let result = handler
            .handle(Event::QuickStart {
                zip: "abc".to_string(),
            })
            .await;
        assert!(result.is_err());
    }
}
