use super::{footer, log, movie_list, navbar, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const NAVBAR_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const LOG_HEIGHT: u16 = 7;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(LOG_HEIGHT),
        ])
        .split(frame.size());

    navbar(frame, rows[0], state);
    movie_list(frame, rows[1], state);
    footer(frame, rows[2], state);
    log(frame, rows[3], state);
}
