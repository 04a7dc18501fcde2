use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the title bar with the current route.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let line = Line::from(vec![
        Span::styled(" MailMyBallot ", styling::banner_style()),
        Span::styled(state.route().to_string(), styling::muted_text_style()),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
