use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const FAVORITE_MARKER: &str = "★ ";
const NO_MARKER: &str = "  ";
const HIGHLIGHT_SYMBOL: &str = "> ";
const EMPTY_CATALOG: &str = "No movies to show. Point catalog_path at a JSON file of movies.";
const EMPTY_FAVORITES: &str =
    "No favorite movies yet. Pick a movie on the home page and press Enter to add it.";

/// Render the movies of the current view. Favorites are marked with a star.
///
pub fn movie_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let view = state.current_view();
    let theme = state.get_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(
            format!(" {} ({}) ", view.title(), view.route()),
            styling::active_block_title_style(),
        ));

    if state.current_items().is_empty() {
        let message = match view {
            View::Home => EMPTY_CATALOG,
            View::Favorites => EMPTY_FAVORITES,
        };
        let paragraph = Paragraph::new(message)
            .style(styling::muted_text_style(theme))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let marker_style = styling::favorite_marker_style(theme);
    let text_style = styling::normal_text_style(theme);
    let highlight_style = styling::active_list_item_style(theme);

    let items: Vec<ListItem> = state
        .current_items()
        .iter()
        .map(|movie| {
            let marker = if state.is_favorite(movie) {
                Span::styled(FAVORITE_MARKER, marker_style)
            } else {
                Span::raw(NO_MARKER)
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(movie.display_title(), text_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    frame.render_stateful_widget(list, size, state.get_list_state());
}
