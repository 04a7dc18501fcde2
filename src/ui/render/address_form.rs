use super::{eligibility, Frame};
use crate::state::{FormField, Route, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub const LEGEND: &str = "Enter your address to see if you can Vote by Mail";

/// Render the address form and the eligibility of the last resolved address.
///
pub fn address_form(frame: &mut Frame, size: Rect, state: &State) {
    let title = match state.route() {
        Route::Address { state: us_state, .. } => format!("Vote by Mail in {}", us_state),
        Route::Start => "Vote by Mail".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::normal_block_border_style());
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .margin(1)
        .split(size);

    let legend = Paragraph::new(Line::from(Span::styled(
        LEGEND,
        styling::banner_style(),
    )));
    frame.render_widget(legend, rows[0]);

    let form = state.form();
    let loading = state.resolution().query().is_loading();
    field(
        frame,
        rows[1],
        "Address",
        &form.address,
        form.focus == FormField::Address && !loading,
    );
    field(
        frame,
        rows[2],
        "Unit (optional)",
        &form.unit,
        form.focus == FormField::Unit && !loading,
    );

    eligibility::eligibility(frame, rows[3], state);
}

fn field(frame: &mut Frame, size: Rect, title: &str, value: &str, active: bool) {
    let border_style = if active {
        styling::active_block_border_style()
    } else {
        styling::normal_block_border_style()
    };
    let mut text = value.to_owned();
    if active {
        text.push('▏');
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_owned())
        .border_style(border_style);
    let widget = Paragraph::new(Span::styled(text, styling::normal_text_style())).block(block);
    frame.render_widget(widget, size);
}
