use super::Frame;
use crate::state::{nav_links, State, NAV_BRAND};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the navigation bar: brand label followed by one link per view,
/// with the current view's link highlighted.
///
pub fn navbar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();

    let mut spans = vec![
        Span::styled(NAV_BRAND, styling::brand_style(theme)),
        Span::raw("   "),
    ];
    for (index, link) in nav_links().iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if link.view == state.current_view() {
            styling::active_nav_link_style(theme)
        } else {
            styling::muted_text_style(theme)
        };
        spans.push(Span::styled(format!("[{}] {}", index + 1, link.label), style));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), size);
}
