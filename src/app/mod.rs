mod state;

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::color::HexColor;
use crate::types::PaletteQuery;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Home,
    Search,
    Gallery,
    Top,
    Help,
}

impl AppView {
    pub fn label(self) -> &'static str {
        match self {
            AppView::Home => "Home",
            AppView::Search => "Search",
            AppView::Gallery => "Gallery",
            AppView::Top => "Top",
            AppView::Help => "Help",
        }
    }
}

/// Views reachable from the tab bar, in display order.
pub const TABS: [AppView; 4] = [AppView::Home, AppView::Search, AppView::Gallery, AppView::Top];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    TabBar,
    Content,
}

/// Which requests are currently waiting on their simulated response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Loading {
    pub random: bool,
    pub top: bool,
    pub inspiration: bool,
    pub lookup: bool,
}

impl Loading {
    pub fn any(&self) -> bool {
        self.random || self.top || self.inspiration || self.lookup
    }

    fn slot(&mut self, request: &Request) -> &mut bool {
        match request {
            Request::Palettes(PaletteQuery::Random) => &mut self.random,
            Request::Palettes(PaletteQuery::Top) => &mut self.top,
            Request::Palettes(PaletteQuery::Inspiration) => &mut self.inspiration,
            Request::Lookup(_) => &mut self.lookup,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Request {
    Palettes(PaletteQuery),
    Lookup(HexColor),
}

#[derive(Clone, Debug)]
struct Pending {
    request: Request,
    due: Instant,
}
