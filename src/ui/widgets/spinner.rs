use super::styling;
use crate::state::State;
use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
};

/// Frames of the loading animation, advanced once per tick.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Current spinner frame.
///
pub fn frame(state: &State) -> &'static str {
    FRAMES[state.spinner_index() % FRAMES.len()]
}

/// Return a spinner paragraph followed by the label.
///
pub fn widget(state: &State, label: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        format!("{} {}", frame(state), label),
        styling::loading_text_style(),
    )))
}
