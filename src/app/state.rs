use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::color::{self, ColorRecord};
use crate::config::{Config, Latency};
use crate::source::PaletteSource;
use crate::types::{Palette, PaletteQuery};

use super::{AppEvent, AppView, FocusMode, Loading, Pending, Request, TABS};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    view_history: Vec<AppView>,
    pub focus_mode: FocusMode,
    pub selected_tab_index: usize,
    pub dark_mode: bool,
    pub random_palettes: Vec<Palette>,
    pub top_palettes: Vec<Palette>,
    pub inspiration_palettes: Vec<Palette>,
    gallery_queue: VecDeque<Palette>,
    next_reveal: Option<Instant>,
    pub selected_palette_index: usize,
    pub selected_swatch_index: usize,
    pub search: ColorSearch,
    pub loading: Loading,
    pub status: Option<String>,
    pub ticks: u64,
    pending: Vec<Pending>,
    source: Box<dyn PaletteSource>,
    latency: Latency,
    gallery_size: usize,
    gallery_stagger: Duration,
}

/// State of the hex color inspector.
#[derive(Clone, Debug, Default)]
pub struct ColorSearch {
    pub input: String,
    pub editing: bool,
    pub record: Option<ColorRecord>,
    pub error: Option<String>,
}

impl App {
    pub fn new(source: Box<dyn PaletteSource>, config: &Config) -> Self {
        let mut app = Self {
            running: true,
            view: AppView::Home,
            view_history: Vec::new(),
            focus_mode: FocusMode::Content,
            selected_tab_index: 0,
            dark_mode: config.dark_mode,
            random_palettes: Vec::new(),
            top_palettes: Vec::new(),
            inspiration_palettes: Vec::new(),
            gallery_queue: VecDeque::new(),
            next_reveal: None,
            selected_palette_index: 0,
            selected_swatch_index: 0,
            search: ColorSearch::default(),
            loading: Loading::default(),
            status: None,
            ticks: 0,
            pending: Vec::new(),
            source,
            latency: config.latency,
            gallery_size: config.gallery_size,
            gallery_stagger: config.gallery_stagger,
        };

        // The top list is fetched once on startup
        app.request(Request::Palettes(PaletteQuery::Top), Instant::now());

        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        self.update_at(event, Instant::now());
    }

    pub fn update_at(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Tick => self.ticks = self.ticks.wrapping_add(1),
            AppEvent::KeyPress(key) => self.handle_key(key, now),
            AppEvent::Quit => self.running = false,
        }
        self.advance(now);
    }

    /// Resolve every request whose simulated latency has elapsed and reveal
    /// gallery entries that are due.
    pub fn advance(&mut self, now: Instant) {
        let (ready, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|pending| pending.due <= now);
        self.pending = waiting;
        for pending in ready {
            self.resolve(pending.request, now);
        }
        self.reveal_gallery(now);
    }

    /// Palettes shown by the current view.
    pub fn visible_palettes(&self) -> &[Palette] {
        match self.view {
            AppView::Home => &self.random_palettes,
            AppView::Gallery => &self.inspiration_palettes,
            AppView::Top => &self.top_palettes,
            AppView::Search | AppView::Help => &[],
        }
    }

    pub fn selected_swatch(&self) -> Option<&str> {
        self.visible_palettes()
            .get(self.selected_palette_index)?
            .colors
            .get(self.selected_swatch_index)
            .map(String::as_str)
    }

    fn handle_key(&mut self, key: KeyCode, now: Instant) {
        if self.search.editing {
            self.handle_search_key(key, now);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('h') => self.navigate_to(AppView::Home),
            KeyCode::Char('f') => {
                self.navigate_to(AppView::Search);
                self.search.editing = true;
            }
            KeyCode::Char('g') => self.navigate_to(AppView::Gallery),
            KeyCode::Char('t') => self.navigate_to(AppView::Top),
            KeyCode::Char('?') => {
                if self.view == AppView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(AppView::Help);
                }
            }
            KeyCode::Char('d') => {
                self.dark_mode = !self.dark_mode;
                tracing::debug!(dark_mode = self.dark_mode, "theme toggled");
            }
            KeyCode::Char('/') | KeyCode::Char('e') => {
                if self.view == AppView::Search {
                    self.search.editing = true;
                }
            }
            KeyCode::Char(' ') | KeyCode::Char('r') => self.trigger_view_action(now),
            KeyCode::Tab => {
                if self.focus_mode == FocusMode::TabBar {
                    self.focus_mode = FocusMode::Content;
                } else {
                    self.focus_mode = FocusMode::TabBar;
                }
            }
            KeyCode::Left => {
                if self.focus_mode == FocusMode::TabBar {
                    self.navigate_tab_left();
                } else {
                    self.move_swatch_left();
                }
            }
            KeyCode::Right => {
                if self.focus_mode == FocusMode::TabBar {
                    self.navigate_tab_right();
                } else {
                    self.move_swatch_right();
                }
            }
            KeyCode::Up => {
                if self.focus_mode == FocusMode::Content {
                    self.move_selection_up();
                }
            }
            KeyCode::Down => {
                if self.focus_mode == FocusMode::Content {
                    self.move_selection_down();
                }
            }
            KeyCode::Enter => {
                if self.focus_mode == FocusMode::TabBar {
                    self.activate_selected_tab();
                } else if self.view == AppView::Search {
                    self.search.editing = true;
                } else {
                    self.inspect_selected_swatch(now);
                }
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Esc => self.search.editing = false,
            KeyCode::Enter => {
                self.search.editing = false;
                self.submit_search(now);
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.search.input.pop();
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                self.search.input.push(ch);
            }
            _ => {}
        }
    }

    fn trigger_view_action(&mut self, now: Instant) {
        match self.view {
            AppView::Home => self.request(Request::Palettes(PaletteQuery::Random), now),
            AppView::Gallery => self.request(Request::Palettes(PaletteQuery::Inspiration), now),
            AppView::Top => self.request(Request::Palettes(PaletteQuery::Top), now),
            AppView::Search => self.submit_search(now),
            AppView::Help => {}
        }
    }

    fn submit_search(&mut self, now: Instant) {
        // One lookup in flight at a time
        if self.loading.lookup || self.search.input.trim().is_empty() {
            return;
        }
        match color::validate_hex(&self.search.input) {
            Ok(hex) => {
                self.search.error = None;
                self.request(Request::Lookup(hex), now);
            }
            Err(err) => {
                tracing::debug!(input = %self.search.input, "rejected color input");
                self.search.error = Some(err.to_string());
            }
        }
    }

    fn inspect_selected_swatch(&mut self, now: Instant) {
        if self.loading.lookup {
            return;
        }
        let Some(color) = self.selected_swatch().map(str::to_string) else {
            return;
        };
        self.navigate_to(AppView::Search);
        self.search.input = color;
        self.submit_search(now);
    }

    /// Schedule a request. Requests of a kind that is already in flight are
    /// dropped.
    fn request(&mut self, request: Request, now: Instant) {
        let slot = self.loading.slot(&request);
        if *slot {
            return;
        }
        *slot = true;

        let delay = match &request {
            Request::Palettes(query) => self.latency.for_query(*query),
            Request::Lookup(_) => self.latency.lookup,
        };
        if request == Request::Palettes(PaletteQuery::Inspiration) {
            self.inspiration_palettes.clear();
            self.gallery_queue.clear();
            self.next_reveal = None;
            self.clamp_selection();
        }
        tracing::debug!(?request, ?delay, "request scheduled");
        self.pending.push(Pending {
            request,
            due: now + delay,
        });
    }

    fn resolve(&mut self, request: Request, now: Instant) {
        *self.loading.slot(&request) = false;
        match request {
            Request::Palettes(PaletteQuery::Random) => match self.source.random_palette() {
                Ok(palette) => {
                    tracing::info!(id = palette.id, title = %palette.title, "random palette ready");
                    self.random_palettes = vec![palette];
                    self.clear_status();
                }
                Err(err) => self.fail("random palette", &err),
            },
            Request::Palettes(PaletteQuery::Top) => match self.source.top_palettes() {
                Ok(palettes) => {
                    tracing::info!(count = palettes.len(), "top palettes ready");
                    self.top_palettes = palettes;
                    self.clear_status();
                }
                Err(err) => self.fail("top palettes", &err),
            },
            Request::Palettes(PaletteQuery::Inspiration) => {
                match self.source.inspiration(self.gallery_size) {
                    Ok(palettes) => {
                        tracing::info!(count = palettes.len(), "inspiration ready");
                        self.gallery_queue = palettes.into();
                        self.next_reveal = Some(now);
                        self.clear_status();
                    }
                    Err(err) => self.fail("inspiration", &err),
                }
            }
            Request::Lookup(hex) => {
                let record = ColorRecord::from_hex(hex);
                tracing::debug!(hex = %record.hex, hsv = ?record.hsv, "color looked up");
                self.search.record = Some(record);
            }
        }
        self.clamp_selection();
    }

    fn reveal_gallery(&mut self, now: Instant) {
        while let Some(due) = self.next_reveal {
            if due > now {
                break;
            }
            match self.gallery_queue.pop_front() {
                Some(palette) => {
                    self.inspiration_palettes.push(palette);
                    self.next_reveal = if self.gallery_queue.is_empty() {
                        None
                    } else {
                        Some(due + self.gallery_stagger)
                    };
                }
                None => self.next_reveal = None,
            }
        }
    }

    fn fail(&mut self, what: &str, err: &anyhow::Error) {
        tracing::warn!(error = %err, "failed to load {what}");
        self.status = Some(format!("Failed to load {what}: {err}"));
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn navigate_to(&mut self, view: AppView) {
        if self.view != view {
            self.view_history.push(self.view);
            self.set_view(view);
        }
    }

    fn go_back(&mut self) {
        if let Some(prev_view) = self.view_history.pop() {
            self.set_view(prev_view);
        }
        self.clear_status();
    }

    fn set_view(&mut self, view: AppView) {
        self.view = view;
        self.search.editing = false;
        self.selected_palette_index = 0;
        self.selected_swatch_index = 0;
        if let Some(index) = TABS.iter().position(|v| *v == self.view) {
            self.selected_tab_index = index;
        }
    }

    fn navigate_tab_left(&mut self) {
        if self.selected_tab_index == 0 {
            self.selected_tab_index = TABS.len() - 1;
        } else {
            self.selected_tab_index -= 1;
        }
    }

    fn navigate_tab_right(&mut self) {
        self.selected_tab_index = (self.selected_tab_index + 1) % TABS.len();
    }

    fn activate_selected_tab(&mut self) {
        let target_view = TABS[self.selected_tab_index];
        self.navigate_to(target_view);
        self.focus_mode = FocusMode::Content;
    }

    fn move_selection_up(&mut self) {
        let len = self.visible_palettes().len();
        if len == 0 {
            return;
        }
        if self.selected_palette_index == 0 {
            self.selected_palette_index = len - 1;
        } else {
            self.selected_palette_index -= 1;
        }
        self.clamp_selection();
    }

    fn move_selection_down(&mut self) {
        let len = self.visible_palettes().len();
        if len == 0 {
            return;
        }
        self.selected_palette_index = (self.selected_palette_index + 1) % len;
        self.clamp_selection();
    }

    fn move_swatch_left(&mut self) {
        self.selected_swatch_index = self.selected_swatch_index.saturating_sub(1);
    }

    fn move_swatch_right(&mut self) {
        self.selected_swatch_index += 1;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let palettes = self.visible_palettes();
        let palette_count = palettes.len();
        let swatch_count = palettes
            .get(self.selected_palette_index.min(palette_count.saturating_sub(1)))
            .map_or(0, |palette| palette.colors.len());
        if self.selected_palette_index >= palette_count {
            self.selected_palette_index = palette_count.saturating_sub(1);
        }
        if self.selected_swatch_index >= swatch_count {
            self.selected_swatch_index = swatch_count.saturating_sub(1);
        }
    }
}
