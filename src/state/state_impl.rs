use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::jurisdiction::{self, Eligibility, RoutingError};
use crate::logger::LogBuffer;
use crate::resolution::{InputError, ResolutionState, WriteAccess};
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;

use super::form::AddressForm;
use super::navigation::{Route, View};
use super::notification::Notification;
use super::StateError;

/// Houses data representative of application state.
///
/// The resolution state is only readable from here; the resolution flows
/// are the only writers.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    resolution: ResolutionState,
    view: View,
    route: Route,
    form: AddressForm,
    zip_input: String,
    notification: Option<Notification>,
    spinner_index: usize,
    log: LogBuffer,
    log_visible: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            resolution: ResolutionState::default(),
            view: View::Blurb,
            route: Route::Start,
            form: AddressForm::default(),
            zip_input: String::new(),
            notification: None,
            spinner_index: 0,
            log: LogBuffer::default(),
            log_visible: false,
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        log: LogBuffer,
        default_address: &str,
        route: Route,
    ) -> State {
        let mut state = State {
            net_sender: Some(net_sender),
            log,
            form: AddressForm::with_address(default_address),
            ..State::default()
        };
        state.push_route(route);
        state.zip_input = state.zip_default();
        state
    }

    /// Send an event to the network worker.
    ///
    pub fn dispatch(&self, event: NetworkEvent) -> Result<(), StateError> {
        let sender = self
            .net_sender
            .as_ref()
            .ok_or(StateError::NetworkUnavailable)?;
        sender
            .send(event)
            .map_err(|e| StateError::DispatchFailed(e.to_string()))
    }

    pub fn resolution(&self) -> &ResolutionState {
        &self.resolution
    }

    /// Writable resolution state, for holders of the resolution module's
    /// write access.
    pub fn resolution_mut(&mut self, _access: &WriteAccess) -> &mut ResolutionState {
        &mut self.resolution
    }

    /// Eligibility of the resolved locale, if there is one.
    ///
    pub fn eligibility(&self) -> Option<Result<Eligibility, RoutingError>> {
        self.resolution
            .address()
            .locale()
            .map(jurisdiction::route)
    }

    pub fn current_view(&self) -> &View {
        &self.view
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Navigate to the route and the view it lands on.
    ///
    pub fn push_route(&mut self, route: Route) {
        debug!("Navigating to route {}", route);
        self.view = route.view();
        self.route = route;
    }

    /// Return to the ZIP banner, refreshing its default value.
    ///
    pub fn show_blurb(&mut self) {
        self.view = View::Blurb;
        self.zip_input = self.zip_default();
    }

    pub fn show_address_form(&mut self) {
        self.view = View::AddressForm;
    }

    /// ZIP to pre-fill: the route's ZIP, else the resolved postal code.
    ///
    pub fn zip_default(&self) -> String {
        if let Some(zip) = self.route.zip() {
            return zip.to_string();
        }
        self.resolution
            .address()
            .locale()
            .map(|l| l.postal_code.clone())
            .unwrap_or_default()
    }

    pub fn zip_input(&self) -> &str {
        &self.zip_input
    }

    /// Add a character to the ZIP field. Only digits are accepted.
    ///
    pub fn add_zip_char(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.zip_input.push(c);
        }
    }

    pub fn remove_zip_char(&mut self) {
        self.zip_input.pop();
    }

    /// Hand the ZIP field to the quick-start worker. Blank input is a no-op.
    ///
    pub fn submit_zip(&mut self) -> Result<bool, StateError> {
        if self.zip_input.trim().is_empty() {
            return Ok(false);
        }
        self.dispatch(NetworkEvent::QuickStart {
            zip: self.zip_input.clone(),
        })?;
        Ok(true)
    }

    pub fn form(&self) -> &AddressForm {
        &self.form
    }

    pub fn add_form_char(&mut self, c: char) {
        self.form.push_char(c);
    }

    pub fn remove_form_char(&mut self) {
        self.form.pop_char();
    }

    pub fn clear_form_field(&mut self) {
        self.form.clear_field();
    }

    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    /// Hand the address form to the resolution worker. Returns false when
    /// nothing was sent: the address is blank or an attempt is in flight.
    ///
    pub fn submit_address(&mut self) -> Result<bool, StateError> {
        if self.resolution.query().is_loading() {
            debug!("Address submission disabled while a lookup is in flight");
            return Ok(false);
        }
        match self.form.to_input() {
            Ok(input) => {
                self.dispatch(NetworkEvent::ResolveAddress(input))?;
                Ok(true)
            }
            Err(InputError::EmptyAddress) => {
                debug!("Ignoring submission of an empty address");
                Ok(false)
            }
            Err(e) => {
                warn!("Unexpected address input error: {}", e);
                Ok(false)
            }
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Dismiss the visible notification. Returns false if there was none.
    ///
    pub fn dismiss_notification(&mut self) -> bool {
        self.notification.take().is_some()
    }

    /// Advance animations and expire notifications.
    ///
    pub fn tick(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        if let Some(notification) = self.notification.as_mut() {
            if !notification.tick() {
                self.notification = None;
            }
        }
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn log_entries(&self, count: usize) -> Vec<String> {
        self.log.tail(count)
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }
}
