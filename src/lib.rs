//! Terminal front-end for MailMyBallot.
//!
//! Voters enter a ZIP Code or a street address; the address is geocoded into
//! a [`locale::Locale`], saved with the MailMyBallot backend and routed to the
//! state's vote-by-mail application.

pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod events;
pub mod geocode;
pub mod jurisdiction;
pub mod locale;
pub mod logger;
pub mod resolution;
pub mod state;
pub mod ui;
