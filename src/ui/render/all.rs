use super::*;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Number of log lines shown when the log panel is open.
///
const LOG_PANEL_HEIGHT: u16 = 10;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Min(10),
        Constraint::Length(1),
        Constraint::Length(1),
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_PANEL_HEIGHT));
    }

    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    header(frame, rows[0], state);
    main(frame, rows[1], state);
    status(frame, rows[2], state);
    footer(frame, rows[3], state);
    if state.is_log_visible() {
        log(frame, rows[4], state);
    }

    // Render on top of everything else
    notification(frame, size, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::{self, FAULT_MESSAGE};
    use crate::state::{Notification, View};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(state: &State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| all(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_blurb_prompts_for_zip() {
        let text = rendered(&State::default());
        assert!(text.contains("Enter your ZIP Code to get started"));
        assert!(text.contains("MailMyBallot streamlines"));
    }

    #[test]
    fn test_address_form_shows_legend_and_address() {
        let mut state = State::default();
        state.show_address_form();
        let text = rendered(&state);
        assert!(text.contains("Enter your address to see if you can Vote by Mail"));
        assert!(text.contains("301 N Olive Ave"));
        assert!(text.contains("No address resolved yet."));
    }

    #[test]
    fn test_status_line_tracks_query() {
        let mut state = State::default();
        state.show_address_form();
        resolution::start_for_test(&mut state);
        assert!(rendered(&state).contains("Looking up your address..."));

        resolution::fail_for_test(&mut state, FAULT_MESSAGE);
        assert!(rendered(&state).contains("Something went wrong"));
    }

    #[test]
    fn test_notification_and_log_panel() {
        let mut state = State::default();
        state.notify(Notification::warning("Please enter a 5-digit ZIP Code."));
        state.toggle_log();
        let text = rendered(&state);
        assert!(text.contains("Please enter a 5-digit ZIP Code."));
        assert!(text.contains("Log (F2 to hide)"));
        assert_eq!(*state.current_view(), View::Blurb);
    }
}
