use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Log";

/// Render the newest log lines that fit in the pane.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title(BLOCK_TITLE)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let visible = size.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .get_log_entries(visible)
        .into_iter()
        .map(|entry| {
            let style = entry_style(theme, &entry);
            ListItem::new(Span::styled(entry, style))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}

/// Pick the style of a formatted line from its level column.
///
fn entry_style(theme: &Theme, entry: &str) -> Style {
    match entry.split_whitespace().nth(1) {
        Some("ERROR") => styling::error_text_style(theme),
        Some("WARN") => styling::warning_text_style(theme),
        _ => styling::muted_text_style(theme),
    }
}
