use super::{address_form, blurb, Frame};
use crate::state::{State, View};
use ratatui::layout::Rect;

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &State) {
    match state.current_view() {
        View::Blurb => blurb::blurb(frame, size, state),
        View::AddressForm => address_form::address_form(frame, size, state),
    }
}
