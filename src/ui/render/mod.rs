mod address_form;
mod all;
mod blurb;
mod eligibility;
mod footer;
mod header;
mod log;
mod main;
mod notification;
mod status;

use self::log::log;
use super::*;
use footer::footer;
use header::header;
use main::main;
use notification::notification;
use status::status;

pub use all::all as render;
