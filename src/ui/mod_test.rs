use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::app::AppEvent;
use crate::config::{Config, Latency};
use crate::source::{MockPaletteSource, PaletteSource};
use crate::types::Palette;

struct FailingSource;

impl PaletteSource for FailingSource {
    fn random_palette(&mut self) -> Result<Palette> {
        bail!("backend offline")
    }

    fn top_palettes(&mut self) -> Result<Vec<Palette>> {
        bail!("backend offline")
    }
}

fn config() -> Config {
    Config {
        dark_mode: false,
        tick_rate: Duration::from_millis(100),
        latency: Latency::none(),
        gallery_size: 3,
        gallery_stagger: Duration::ZERO,
        log_path: PathBuf::new(),
        verbosity: 0,
    }
}

fn app() -> App {
    let mut app = App::new(Box::new(MockPaletteSource::new()), &config());
    app.advance(Instant::now());
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.update_at(AppEvent::KeyPress(key), Instant::now());
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 60)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn home_prompts_for_a_palette() {
    let screen = render(&app());
    assert!(screen.contains("Palettr"));
    assert!(screen.contains("Random Palette"));
    assert!(screen.contains("Press space to generate a random palette."));
}

#[test]
fn top_view_lists_cards() {
    let mut app = app();
    press(&mut app, KeyCode::Char('t'));
    let screen = render(&app);
    assert!(screen.contains("Top 5 Palettes"));
    assert!(screen.contains("Ocean Breeze"));
    assert!(screen.contains("by Designer5 • 650 votes"));
    assert!(screen.contains("#0077BE"));
}

#[test]
fn search_view_shows_record() {
    let mut app = app();
    press(&mut app, KeyCode::Char('f'));
    for ch in "3366CC".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);
    let screen = render(&app);
    assert!(screen.contains("Color #3366CC"));
    assert!(screen.contains("RGB: 51, 102, 204"));
    assert!(screen.contains("HSV: 220°, 75%, 80%"));
}

#[test]
fn search_view_shows_validation_error() {
    let mut app = app();
    press(&mut app, KeyCode::Char('f'));
    for ch in "#ZZZZZZ".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);
    let screen = render(&app);
    assert!(screen.contains("Please enter a valid 6-digit hex code"));
}

#[test]
fn gallery_and_help_render_in_dark_mode() {
    let mut app = app();
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char(' '));
    let screen = render(&app);
    assert!(screen.contains("Inspiration Gallery"));
    assert!(screen.contains("dark"));
    assert_eq!(app.inspiration_palettes.len(), 3);
    assert!(screen.contains(app.inspiration_palettes[0].title.as_str()));

    press(&mut app, KeyCode::Char('?'));
    assert!(render(&app).contains("Key bindings"));
}

#[test]
fn top_view_failure_shows_once_in_the_footer() {
    let mut app = App::new(Box::new(FailingSource), &config());
    app.advance(Instant::now());
    press(&mut app, KeyCode::Char('t'));
    let screen = render(&app);
    assert_eq!(screen.matches("Failed to load top palettes").count(), 1);
    assert!(screen.contains("No palettes found. Press 'r' to refresh."));
}

#[test]
fn preview_only_shows_for_input_that_would_submit() {
    let mut app = app();
    press(&mut app, KeyCode::Char('f'));
    press(&mut app, KeyCode::Char(' '));
    for ch in "FF0000".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    assert!(!render(&app).contains("Preview"));

    app.search.input = "FF0000".to_string();
    assert!(render(&app).contains("Preview"));
}
