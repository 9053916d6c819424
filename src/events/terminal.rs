use crate::state::{State, View};
use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread. The
    /// thread stops once the handler is dropped or polling fails.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            let event = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Event::Input(key),
                    Ok(_) => Event::Tick,
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => Event::Tick,
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => Ok(true),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) | (KeyCode::Char('h'), _) | (KeyCode::Char('l'), _) => {
            state.clear_status().next_view();
        }
        (KeyCode::Char('1'), _) => {
            state.clear_status().navigate(View::Home);
        }
        (KeyCode::Char('2'), _) => {
            state.clear_status().navigate(View::Favorites);
        }
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => {
            state.next_item();
        }
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => {
            state.previous_item();
        }
        (KeyCode::Enter, _) | (KeyCode::Char('f'), _) | (KeyCode::Char(' '), _) => {
            debug!("Processing toggle favorite event '{:?}'...", key);
            state.toggle_selected_favorite();
        }
        (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => {
            debug!("Processing remove favorite event '{:?}'...", key);
            state.remove_selected_favorite();
        }
        (KeyCode::Esc, _) => {
            state.clear_status();
        }
        _ => (),
    }
    true
}
