use super::Frame;
use crate::state::{NotificationLevel, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 6;

/// Render the visible notification, if any, in the top right corner.
///
pub fn notification(frame: &mut Frame, size: Rect, state: &State) {
    let notification = match state.notification() {
        Some(notification) => notification,
        None => return,
    };

    let title = match notification.level {
        NotificationLevel::Info => "Info",
        NotificationLevel::Warning => "Warning",
        NotificationLevel::Error => "Error",
    };
    let width = WIDTH.min(size.width);
    let height = HEIGHT.min(size.height);
    let area = Rect {
        x: size.x + size.width - width,
        y: size.y + 1u16.min(size.height - height),
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} (Esc to dismiss)", title))
        .border_style(styling::notification_style(notification.level));
    let widget = Paragraph::new(notification.message.as_str())
        .style(styling::normal_text_style())
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}
