//! Application state management module.
//!
//! This module contains the state shared between the render loop, the
//! terminal event handler and the network worker, including:
//! - Main `State` struct that holds all session data
//! - Navigation types (View, Route)
//! - Form input types (AddressForm, FormField)
//! - Notifications
//! - State error handling

mod error;
mod form;
mod navigation;
mod notification;
mod state_impl;

pub use error::StateError;
pub use form::{AddressForm, FormField, DEFAULT_ADDRESS};
pub use navigation::{Route, View};
pub use notification::{Notification, NotificationLevel, NOTIFICATION_TICKS};
pub use state_impl::State;
