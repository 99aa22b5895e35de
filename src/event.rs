use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Waits up to `timeout` for a key press. Returns `None` on timeout so the
/// caller can redraw the clock.
pub fn next_key_event(timeout: Duration) -> color_eyre::Result<Option<KeyEvent>> {
    while event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
            _ => continue,
        }
    }
    Ok(None)
}
