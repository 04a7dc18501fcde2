use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const HEADLINE: &str =
    "MailMyBallot streamlines state vote-by-mail applications by digitizing the voter's signup process.";

pub const PROMPT: &str = "Enter your ZIP Code to get started";

/// Render the ZIP entry banner.
///
pub fn blurb(frame: &mut Frame, size: Rect, state: &State) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Welcome")
        .border_style(styling::active_block_border_style());
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .margin(2)
        .split(size);

    let headline_widget = Paragraph::new(HEADLINE)
        .style(styling::banner_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(headline_widget, rows[0]);

    let prompt = Paragraph::new(Line::from(Span::styled(
        PROMPT,
        styling::normal_text_style(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, rows[1]);

    let zip = state.zip_input();
    let (text, style) = if zip.is_empty() {
        ("ZIP Code".to_string(), styling::muted_text_style())
    } else {
        (zip.to_string(), styling::normal_text_style())
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title("ZIP Code (Enter to submit)")
        .title_style(styling::active_block_title_style())
        .border_style(styling::active_block_border_style());
    let input = Paragraph::new(Span::styled(text, style)).block(input_block);
    frame.render_widget(input, centered(rows[2], 30));
}

/// Horizontally center a column of the given width.
///
fn centered(size: Rect, width: u16) -> Rect {
    let width = width.min(size.width);
    Rect {
        x: size.x + (size.width - width) / 2,
        width,
        ..size
    }
}
