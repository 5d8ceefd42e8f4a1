use ratatui::style::Color;

use crate::app::App;

/// Light and dark color schemes for the application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn for_app(app: &App) -> Self {
        if app.dark_mode { Theme::Dark } else { Theme::Light }
    }

    /// Page background
    pub fn surface(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(249, 250, 251),
            Theme::Dark => Color::Rgb(17, 24, 39),
        }
    }

    /// Primary branding color
    pub fn primary(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(37, 99, 235),
            Theme::Dark => Color::Rgb(96, 165, 250),
        }
    }

    /// Gallery branding color
    pub fn gallery(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(147, 51, 234),
            Theme::Dark => Color::Rgb(192, 132, 252),
        }
    }

    /// Border color
    pub fn secondary(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(156, 163, 175),
            Theme::Dark => Color::Rgb(75, 85, 99),
        }
    }

    /// Loading indicator
    pub fn active(self) -> Color {
        match self {
            Theme::Light => Color::Green,
            Theme::Dark => Color::LightGreen,
        }
    }

    /// Validation and load errors
    pub fn error(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(220, 38, 38),
            Theme::Dark => Color::Rgb(248, 113, 113),
        }
    }

    /// Selection/highlight
    pub fn highlight(self) -> Color {
        self.primary()
    }

    /// Selection marker/arrow
    pub fn selection_marker(self) -> Color {
        self.active()
    }

    /// Dimmed/inactive text
    pub fn dim(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(107, 114, 128),
            Theme::Dark => Color::Rgb(156, 163, 175),
        }
    }

    /// Normal text
    pub fn text(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(17, 24, 39),
            Theme::Dark => Color::White,
        }
    }

    /// Accent for titles and counts
    pub fn accent(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(55, 65, 81),
            Theme::Dark => Color::Rgb(209, 213, 219),
        }
    }
}
