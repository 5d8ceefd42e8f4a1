use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, AppEvent};

/// Polls crossterm for up to one tick and maps the result to an `AppEvent`.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(map_key(key));
        }
        return Ok(None);
    }
    Ok(Some(AppEvent::Tick))
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppEvent::Quit);
    }
    Some(AppEvent::KeyPress(key.code))
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal, tick_rate: Duration) -> Result<()> {
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(tick_rate)? {
            app.update(event);
        }
    }
    tracing::info!("event loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(map_key(key), Some(AppEvent::Quit)));
    }

    #[test]
    fn plain_keys_pass_through() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(matches!(
            map_key(key),
            Some(AppEvent::KeyPress(KeyCode::Char('c')))
        ));
    }

    #[test]
    fn key_releases_are_dropped() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(map_key(key).is_none());
    }
}
