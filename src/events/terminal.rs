use crate::state::{State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
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
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => handle_key(state, key),
            Event::Tick => {
                state.tick();
                Ok(true)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
fn handle_key(state: &mut State, key: KeyEvent) -> Result<bool> {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(false);
        }
        KeyEvent {
            code: KeyCode::F(2),
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('l'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => state.toggle_log(),
        KeyEvent {
            code: KeyCode::Esc, ..
        } => {
            if !state.dismiss_notification() && *state.current_view() == View::AddressForm {
                state.show_blurb();
            }
        }
        _ => match state.current_view() {
            View::Blurb => handle_blurb_key(state, key)?,
            View::AddressForm => handle_form_key(state, key)?,
        },
    }
    Ok(true)
}

fn handle_blurb_key(state: &mut State, key: KeyEvent) -> Result<()> {
    match key {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            ..
        } => state.add_zip_char(c),
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => state.remove_zip_char(),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => {
            state.submit_zip()?;
        }
        _ => (),
    }
    Ok(())
}

fn handle_form_key(state: &mut State, key: KeyEvent) -> Result<()> {
    match key {
        KeyEvent {
            code: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => state.clear_form_field(),
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } => state.add_form_char(c),
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => state.remove_form_char(),
        KeyEvent {
            code: KeyCode::Tab | KeyCode::BackTab,
            ..
        } => state.next_form_field(),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => {
            state.submit_address()?;
        }
        _ => (),
    }
    Ok(())
}
