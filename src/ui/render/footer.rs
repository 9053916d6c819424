use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

const HOME_HINTS: &str = "j/k: move  Enter: toggle favorite  Tab: favorites  q: quit";
const FAVORITES_HINTS: &str = "j/k: move  d: remove  Enter: toggle  Tab: home  q: quit";

/// Render the footer: the latest status message, then key hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let hints = match state.current_view() {
        View::Home => HOME_HINTS,
        View::Favorites => FAVORITES_HINTS,
    };

    let mut spans = vec![];
    if let Some(status) = state.get_status() {
        let style = if status.is_error() {
            styling::error_text_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        spans.push(Span::styled(format!(" {} ", status.message()), style));
        spans.push(Span::raw("|"));
    }
    spans.push(Span::styled(format!(" {}", hints), styling::muted_text_style(theme)));

    frame.render_widget(Paragraph::new(Line::from(spans)), size);
}
