use crate::state::NotificationLevel;
use ratatui::style::{Color, Modifier, Style};

const PRIMARY: Color = Color::Rgb(33, 150, 243);
const TEXT: Color = Color::Rgb(50, 50, 50);
const MUTED: Color = Color::Rgb(140, 140, 140);
const SUCCESS: Color = Color::Rgb(76, 175, 80);
const WARNING: Color = Color::Rgb(255, 152, 0);
const ERROR: Color = Color::Rgb(229, 57, 53);

/// Return the border style for active blocks.
///
pub fn active_block_border_style() -> Style {
    Style::default().fg(PRIMARY)
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style() -> Style {
    Style::default().fg(MUTED)
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted_text_style() -> Style {
    Style::default().fg(MUTED)
}

/// Return the style for the headline.
///
pub fn banner_style() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn loading_text_style() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn success_text_style() -> Style {
    Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD)
}

pub fn error_text_style() -> Style {
    Style::default().fg(ERROR)
}

/// Return the border style matching a notification level.
///
pub fn notification_style(level: NotificationLevel) -> Style {
    match level {
        NotificationLevel::Info => Style::default().fg(PRIMARY),
        NotificationLevel::Warning => Style::default().fg(WARNING),
        NotificationLevel::Error => Style::default().fg(ERROR),
    }
}
