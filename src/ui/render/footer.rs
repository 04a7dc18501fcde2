use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Key hints for the current view.
///
fn hints(state: &State) -> &'static str {
    match state.current_view() {
        View::Blurb => " Digits: ZIP, Enter: start, F2: log, Ctrl-c: quit",
        View::AddressForm if state.resolution().query().is_loading() => {
            " Looking up address, F2: log, Ctrl-c: quit"
        }
        View::AddressForm => {
            " Tab: switch field, Enter: check address, Ctrl-u: clear field, Esc: back, F2: log, Ctrl-c: quit"
        }
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let mode = match state.current_view() {
        View::Blurb => "START:",
        View::AddressForm => "ADDRESS:",
    };
    let controls = Paragraph::new(Line::from(vec![
        Span::styled(mode, styling::active_block_title_style()),
        Span::styled(hints(state), styling::muted_text_style()),
    ]))
    .alignment(Alignment::Left);

    let version = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        styling::muted_text_style(),
    )]);
    let version_width = version.width();
    let version_widget = Paragraph::new(version).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(version_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls, columns[0]);
    frame.render_widget(version_widget, columns[1]);
}
