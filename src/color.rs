/// Hex validation and RGB/HSV conversion for the color inspector.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Please enter a valid 6-digit hex code")]
    InvalidHexFormat,
}

/// Six uppercase hex digits, stored without the leading `#`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_hex(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    /// Re-encode as two uppercase hex digits per channel.
    pub fn to_hex(self) -> HexColor {
        HexColor(format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue))
    }
}

/// Hue in degrees `[0, 360)`, saturation and value in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HsvColor {
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorRecord {
    pub hex: HexColor,
    pub rgb: RgbColor,
    pub hsv: HsvColor,
    pub label: String,
}

impl ColorRecord {
    pub fn from_hex(hex: HexColor) -> Self {
        let rgb = hex_to_rgb(&hex);
        let hsv = rgb_to_hsv(rgb);
        let label = format!("Color #{hex}");
        Self {
            hex,
            rgb,
            hsv,
            label,
        }
    }
}

/// Validate a user-entered hex color. One leading `#` is allowed, nothing
/// else is stripped.
pub fn validate_hex(input: &str) -> Result<HexColor, ColorError> {
    let hex = input.strip_prefix('#').unwrap_or(input).to_ascii_uppercase();
    if hex.len() != 6 || !hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')) {
        return Err(ColorError::InvalidHexFormat);
    }
    Ok(HexColor(hex))
}

pub fn hex_to_rgb(hex: &HexColor) -> RgbColor {
    let nibble = |c: u8| -> u8 {
        match c {
            b'0'..=b'9' => c - b'0',
            b'A'..=b'F' => c - b'A' + 10,
            _ => 0,
        }
    };
    let bytes = hex.0.as_bytes();
    let pair = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);

    RgbColor {
        red: pair(0),
        green: pair(2),
        blue: pair(4),
    }
}

pub fn rgb_to_hsv(rgb: RgbColor) -> HsvColor {
    let RgbColor { red, green, blue } = rgb;
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let (r, g, b) = (f64::from(red), f64::from(green), f64::from(blue));
    let max_f = f64::from(max);
    let diff = f64::from(max - min);

    // Red wins ties, then green.
    let sector = if max == min {
        0.0
    } else if max == red {
        ((g - b) / diff) % 6.0
    } else if max == green {
        (b - r) / diff + 2.0
    } else {
        (r - g) / diff + 4.0
    };

    let mut hue = round_half_up(sector * 60.0);
    if hue < 0.0 {
        hue += 360.0;
    }
    let saturation = if max == 0 {
        0.0
    } else {
        round_half_up(diff / max_f * 100.0)
    };
    let value = round_half_up(max_f / 255.0 * 100.0);

    HsvColor {
        hue: (hue as u16) % 360,
        saturation: saturation as u8,
        value: value as u8,
    }
}

/// Halves round toward positive infinity, so `-0.5` becomes `0`.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Validate `input` and describe it in every supported color model.
pub fn lookup_color(input: &str) -> Result<ColorRecord, ColorError> {
    let hex = validate_hex(input)?;
    Ok(ColorRecord::from_hex(hex))
}
