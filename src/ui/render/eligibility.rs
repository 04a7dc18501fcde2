use super::Frame;
use crate::jurisdiction::Eligibility;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the resolved address and which vote-by-mail flow it leads to.
///
pub fn eligibility(frame: &mut Frame, size: Rect, state: &State) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Eligibility")
        .border_style(styling::normal_block_border_style());

    let locale = match state.resolution().address().locale() {
        Some(locale) => locale,
        None => {
            let widget = Paragraph::new(Span::styled(
                "No address resolved yet.",
                styling::muted_text_style(),
            ))
            .block(block);
            frame.render_widget(widget, size);
            return;
        }
    };

    let mut lines = vec![Line::from(Span::styled(
        locale.one_line(),
        styling::normal_text_style(),
    ))];
    if !locale.is_persisted() {
        lines.push(Line::from(Span::styled(
            "Not saved yet",
            styling::muted_text_style(),
        )));
    }
    lines.push(Line::from(""));

    let verdict = match state.eligibility() {
        Some(Ok(Eligibility::Supported(us_state))) => Span::styled(
            format!("You can apply to vote by mail in {} here.", us_state),
            styling::success_text_style(),
        ),
        Some(Ok(Eligibility::Unsupported(us_state))) => Span::styled(
            format!(
                "{} is not supported yet. Contact your election office to vote by mail.",
                us_state
            ),
            styling::normal_text_style(),
        ),
        Some(Err(e)) => Span::styled(e.to_string(), styling::error_text_style()),
        None => Span::raw(""),
    };
    lines.push(Line::from(verdict));

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, size);
}
