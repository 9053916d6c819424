use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::AppResult;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::favorites::FavoritesStore;
use crate::logger::{self, LogBuffer};
use crate::state::State;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};

/// Oversees startup, the render loop and terminal teardown.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration,
    /// opening on the view addressed by `start_route` if given. Returns the
    /// result of the application execution.
    ///
    pub fn start(config: Config, start_route: Option<&str>) -> Result<()> {
        let log_buffer = LogBuffer::new();
        logger::init(LevelFilter::Debug, log_buffer.clone())?;

        info!("Starting application...");
        let mut app = App {
            state: App::build_state(&config)?.with_log_buffer(log_buffer),
        };
        if let Some(route) = start_route {
            app.state.navigate_to_route(route)?;
        }
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Open storage, load the favorites and the catalog, and assemble the
    /// state every view works on.
    ///
    pub fn build_state(config: &Config) -> AppResult<State> {
        let storage = App::open_storage(config)?;
        let favorites = FavoritesStore::load(storage, config.on_corrupt_favorites)?;
        let catalog = Catalog::load(config.catalog_path.as_deref())?;
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to default. Available: {}",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        Ok(State::new(catalog, favorites, theme))
    }

    fn open_storage(config: &Config) -> AppResult<Box<dyn KeyValueStore>> {
        if config.ephemeral {
            info!("Using in-memory storage, favorites will not be kept");
            return Ok(Box::new(MemoryStore::new()));
        }
        let dir = config.resolve_data_dir()?;
        info!("Using favorites storage at {}", dir.display());
        Ok(Box::new(FileStore::open(dir)?))
    }

    /// Run the render loop on the main thread until an exit request or
    /// unrecoverable error, restoring the terminal either way.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            if let Ok(size) = terminal.size() {
                self.state.set_terminal_size(size);
            }
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
