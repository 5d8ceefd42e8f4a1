use ratatui::style::Color;

use crate::color::{self, RgbColor};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn clamp_name(value: &str, width: usize) -> String {
    let value_len = value.chars().count();
    if value_len <= width {
        return format!("{value:<width$}", width = width);
    }
    let trimmed = value
        .chars()
        .take(width.saturating_sub(2))
        .collect::<String>();
    format!("{trimmed}..")
}

pub fn rgb_to_color(rgb: RgbColor) -> Color {
    Color::Rgb(rgb.red, rgb.green, rgb.blue)
}

pub fn hex_to_color(value: &str) -> Option<Color> {
    let hex = color::validate_hex(value).ok()?;
    Some(rgb_to_color(color::hex_to_rgb(&hex)))
}

/// Black or white, whichever reads better on top of `rgb`.
pub fn contrast_text(rgb: RgbColor) -> Color {
    let hsv = color::rgb_to_hsv(rgb);
    if hsv.value > 70 && hsv.saturation < 60 {
        Color::Black
    } else {
        Color::White
    }
}

pub fn spinner(ticks: u64) -> &'static str {
    SPINNER[(ticks % SPINNER.len() as u64) as usize]
}
