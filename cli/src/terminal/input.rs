//! Keyboard listener that lets the user cancel a running scan.

use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use portdrift_common::warn;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Raises a stop flag when `q` or `Ctrl-C` is pressed.
///
/// The terminal stays in raw mode while the listener lives; dropping it
/// restores the terminal and joins the reader thread.
pub struct KeyListener {
    done: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl KeyListener {
    /// Returns `None` when stdin is not an interactive terminal.
    pub fn start(stop: Arc<AtomicBool>) -> Option<Self> {
        if !std::io::stdin().is_terminal() {
            return None;
        }
        if let Err(e) = enable_raw_mode() {
            warn!("Key listener disabled: {e}");
            return None;
        }

        let done: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
        let done_ref: Arc<AtomicBool> = Arc::clone(&done);

        let handle = thread::spawn(move || {
            while !done_ref.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {
                        if let Ok(Event::Key(key_event)) = event::read()
                            && is_interrupt(&key_event)
                        {
                            stop.store(true, Ordering::Relaxed);
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }
            }
        });

        Some(Self {
            done,
            handle: Some(handle),
        })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.done.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        let _ = disable_raw_mode();
    }
}

fn is_interrupt(key_event: &KeyEvent) -> bool {
    let is_q = key_event.code == KeyCode::Char('q');
    let is_ctrl_c =
        key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL);

    (is_q || is_ctrl_c) && key_event.kind == KeyEventKind::Press
}
