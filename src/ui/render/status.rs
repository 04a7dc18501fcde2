use super::Frame;
use crate::resolution::QueryStatus;
use crate::state::{State, View};
use crate::ui::widgets::{spinner, styling};
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

/// Render the progress or failure of the current address lookup.
///
pub fn status(frame: &mut Frame, size: Rect, state: &State) {
    if *state.current_view() != View::AddressForm {
        return;
    }
    match state.resolution().query().status() {
        QueryStatus::Loading => {
            frame.render_widget(spinner::widget(state, "Looking up your address..."), size);
        }
        QueryStatus::Error(message) => {
            // Multi-line messages are flattened to fit the status line
            let text = message.replace('\n', " ");
            let widget = Paragraph::new(Span::styled(text, styling::error_text_style()));
            frame.render_widget(widget, size);
        }
        QueryStatus::Idle => {}
    }
}
