//! Event handling for the chart viewer
//!
//! Keyboard and resize events are read on a background thread and forwarded
//! over a channel, with a tick when the terminal is idle.

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

/// Viewer events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Terminal was resized
    Resize(u16, u16),
    /// Key other than a quit key was pressed
    Key(KeyEvent),
    /// No input within the tick rate
    Tick,
    /// q, Esc or Ctrl-C
    Quit,
}

/// Check if `key` closes the viewer.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Event handler that runs in a separate thread
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl EventHandler {
    /// Create a new event handler polling at `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                let event = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if is_quit_key(&key) => Event::Quit,
                        Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                        Ok(CrosstermEvent::Resize(width, height)) => Event::Resize(width, height),
                        Ok(_) => continue,
                        Err(_) => break,
                    },
                    Ok(false) => Event::Tick,
                    Err(_) => break,
                };
                let quit = event == Event::Quit;
                if tx.send(event).is_err() || quit {
                    break;
                }
            }
        });

        Self {
            rx,
            stop,
            handle: Some(handle),
        }
    }

    /// Get the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event> {
        self.rx
            .recv()
            .map_err(|e| anyhow::anyhow!("Event channel closed: {}", e))
    }

    /// Stop the polling thread and wait for it.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop();
    }
}
