use crate::catalog::Catalog;
use crate::favorites::{FavoritesStore, Movie};
use crate::logger::LogBuffer;
use crate::ui::Theme;
use log::*;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use super::error::StateError;
use super::navigation::View;

/// Message shown in the footer after an action.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

impl Status {
    pub fn message(&self) -> &str {
        match self {
            Status::Info(message) | Status::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

/// Houses data representative of application state.
///
/// The favorites store is handed in by the caller; every view reads and
/// mutates favorites through it.
pub struct State {
    current_view: View,
    catalog: Catalog,
    favorites: FavoritesStore,
    movies_list_state: ListState,
    favorites_list_state: ListState,
    status: Option<Status>,
    log_buffer: LogBuffer,
    theme: Theme,
    terminal_size: Rect,
}

impl State {
    pub fn new(catalog: Catalog, favorites: FavoritesStore, theme: Theme) -> State {
        let mut state = State {
            current_view: View::Home,
            catalog,
            favorites,
            movies_list_state: ListState::default(),
            favorites_list_state: ListState::default(),
            status: None,
            log_buffer: LogBuffer::new(),
            theme,
            terminal_size: Rect::default(),
        };
        state.clamp_selection(View::Home);
        state.clamp_selection(View::Favorites);
        state
    }

    /// Use `buffer` as the source of the log pane.
    ///
    pub fn with_log_buffer(mut self, buffer: LogBuffer) -> State {
        self.log_buffer = buffer;
        self
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Switch to `view`.
    ///
    pub fn navigate(&mut self, view: View) -> &mut Self {
        if self.current_view != view {
            debug!("Navigating to {}", view.route());
            self.current_view = view;
            self.clamp_selection(view);
        }
        self
    }

    /// Switch to the view addressed by `route`.
    ///
    pub fn navigate_to_route(&mut self, route: &str) -> Result<&mut Self, StateError> {
        let view =
            View::from_route(route).ok_or_else(|| StateError::UnknownRoute(route.to_string()))?;
        Ok(self.navigate(view))
    }

    pub fn next_view(&mut self) -> &mut Self {
        let next = self.current_view.next();
        self.navigate(next)
    }

    pub fn get_catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn get_favorites_store(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn favorites(&self) -> &[Movie] {
        self.favorites.favorites()
    }

    /// Return true if `movie` has an id that is among the favorites.
    ///
    pub fn is_favorite(&self, movie: &Movie) -> bool {
        movie
            .id
            .as_ref()
            .map_or(false, |id| self.favorites.is_favorite(id))
    }

    /// Return the movies listed by the current view.
    ///
    pub fn current_items(&self) -> &[Movie] {
        self.items(self.current_view)
    }

    fn items(&self, view: View) -> &[Movie] {
        match view {
            View::Home => self.catalog.movies(),
            View::Favorites => self.favorites.favorites(),
        }
    }

    fn list_state(&self, view: View) -> &ListState {
        match view {
            View::Home => &self.movies_list_state,
            View::Favorites => &self.favorites_list_state,
        }
    }

    /// Return the list state of the current view, for rendering.
    ///
    pub fn get_list_state(&mut self) -> &mut ListState {
        match self.current_view {
            View::Home => &mut self.movies_list_state,
            View::Favorites => &mut self.favorites_list_state,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state(self.current_view).selected()
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.selected_index()
            .and_then(|index| self.current_items().get(index))
    }

    pub fn next_item(&mut self) -> &mut Self {
        let len = self.current_items().len();
        if len > 0 {
            let next = match self.selected_index() {
                Some(i) if i + 1 < len => i + 1,
                _ => 0,
            };
            self.get_list_state().select(Some(next));
        }
        self
    }

    pub fn previous_item(&mut self) -> &mut Self {
        let len = self.current_items().len();
        if len > 0 {
            let previous = match self.selected_index() {
                Some(i) if i > 0 => i - 1,
                _ => len - 1,
            };
            self.get_list_state().select(Some(previous));
        }
        self
    }

    /// Add the selected movie to the favorites, or remove it if it already is
    /// one. On the favorites view every entry is already a favorite, so an
    /// entry without an id is reported instead of added again.
    ///
    pub fn toggle_selected_favorite(&mut self) -> &mut Self {
        let movie = match self.selected_movie().cloned() {
            Some(movie) => movie,
            None => return self,
        };
        let title = movie.display_title();
        if self.current_view == View::Favorites && movie.id.is_none() {
            return self.report_missing_id(&title);
        }
        match self.favorites.toggle_favorite(movie) {
            Ok(true) => {
                info!("Added \"{}\" to favorites", title);
                self.set_status(Status::Info(format!("Added \"{}\" to favorites", title)));
            }
            Ok(false) => {
                info!("Removed \"{}\" from favorites", title);
                self.set_status(Status::Info(format!("Removed \"{}\" from favorites", title)));
            }
            Err(e) => {
                error!("Failed to update favorites: {}", e);
                self.set_status(Status::Error(format!("Failed to save favorites: {}", e)));
            }
        }
        self.clamp_selection(View::Favorites);
        self
    }

    /// Remove the selected movie from the favorites by id. Only acts on the
    /// favorites view.
    ///
    pub fn remove_selected_favorite(&mut self) -> &mut Self {
        if self.current_view != View::Favorites {
            return self;
        }
        let (id, title) = match self
            .selected_movie()
            .map(|movie| (movie.id.clone(), movie.display_title()))
        {
            Some(selected) => selected,
            None => return self,
        };
        let id = match id {
            Some(id) => id,
            None => return self.report_missing_id(&title),
        };
        match self.favorites.remove_from_favorites(&id) {
            Ok(_) => {
                info!("Removed \"{}\" from favorites", title);
                self.set_status(Status::Info(format!("Removed \"{}\" from favorites", title)));
            }
            Err(e) => {
                error!("Failed to update favorites: {}", e);
                self.set_status(Status::Error(format!("Failed to save favorites: {}", e)));
            }
        }
        self.clamp_selection(View::Favorites);
        self
    }

    pub fn get_status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: Status) -> &mut Self {
        self.status = Some(status);
        self
    }

    pub fn clear_status(&mut self) -> &mut Self {
        self.status = None;
        self
    }

    /// Return the newest `count` log lines.
    ///
    pub fn get_log_entries(&self, count: usize) -> Vec<String> {
        self.log_buffer.tail(count)
    }

    fn report_missing_id(&mut self, title: &str) -> &mut Self {
        warn!("Cannot remove \"{}\": it has no id", title);
        self.set_status(Status::Error(format!(
            "\"{}\" has no id and cannot be removed",
            title
        )))
    }

    /// Keep the selection of `view` inside its list.
    ///
    fn clamp_selection(&mut self, view: View) {
        let len = self.items(view).len();
        let list_state = match view {
            View::Home => &mut self.movies_list_state,
            View::Favorites => &mut self.favorites_list_state,
        };
        let selected = match (list_state.selected(), len) {
            (_, 0) => None,
            (Some(i), len) if i >= len => Some(len - 1),
            (Some(i), _) => Some(i),
            (None, _) => Some(0),
        };
        list_state.select(selected);
    }
}
