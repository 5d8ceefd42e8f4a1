use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, contrast_text, rgb_to_color, spinner};
use super::theme::Theme;
use crate::app::App;
use crate::color;
use crate::types::Palette;

const SWATCH_WIDTH: usize = 9;

pub fn build_home_text(app: &App, theme: Theme) -> Text<'static> {
    let mut lines = Vec::new();
    if app.loading.random {
        lines.push(loading_line(app, theme, "Generating..."));
        return Text::from(lines);
    }
    if app.random_palettes.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press space to generate a random palette.",
            Style::default().fg(theme.dim()),
        )));
        return Text::from(lines);
    }
    push_cards(&mut lines, app, &app.random_palettes, theme);
    Text::from(lines)
}

pub fn build_top_text(app: &App, theme: Theme) -> Text<'static> {
    let mut lines = Vec::new();
    if app.loading.top {
        lines.push(loading_line(app, theme, "Loading top palettes..."));
        return Text::from(lines);
    }
    if app.top_palettes.is_empty() {
        lines.push(Line::from("No palettes found. Press 'r' to refresh."));
        return Text::from(lines);
    }
    push_cards(&mut lines, app, &app.top_palettes, theme);
    Text::from(lines)
}

pub fn loading_line(app: &App, theme: Theme, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", spinner(app.ticks)),
            Style::default().fg(theme.active()),
        ),
        Span::styled(label.to_string(), Style::default().fg(theme.dim())),
    ])
}

fn push_cards(lines: &mut Vec<Line<'static>>, app: &App, palettes: &[Palette], theme: Theme) {
    for (index, palette) in palettes.iter().enumerate() {
        let selected = index == app.selected_palette_index;
        let swatch = selected.then_some(app.selected_swatch_index);
        lines.extend(palette_card(palette, swatch, theme));
        lines.push(Line::from(""));
    }
}

/// Full card: title row, a two line swatch strip and the hex codes.
/// `selected_swatch` is set when this card holds the selection.
pub fn palette_card(
    palette: &Palette,
    selected_swatch: Option<usize>,
    theme: Theme,
) -> Vec<Line<'static>> {
    let selected = selected_swatch.is_some();
    let marker_style = if selected {
        Style::default()
            .fg(theme.selection_marker())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim())
    };
    let title_style = if selected {
        Style::default()
            .fg(theme.highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.text())
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(if selected { "> " } else { "  " }, marker_style),
        Span::styled(palette.title.clone(), title_style),
        Span::styled(
            format!("  by {} • {} votes", palette.user_name, palette.num_votes),
            Style::default().fg(theme.dim()),
        ),
    ])];

    for row in 0..2 {
        let mut spans = vec![Span::raw("  ")];
        for (index, hex) in palette.colors.iter().enumerate() {
            let label = if row == 1 && selected_swatch == Some(index) {
                format!("{:^width$}", "▲", width = SWATCH_WIDTH - 1)
            } else {
                " ".repeat(SWATCH_WIDTH - 1)
            };
            spans.push(swatch_span(hex, label));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let mut codes = vec![Span::raw("  ")];
    for (index, hex) in palette.colors.iter().enumerate() {
        let style = if selected_swatch == Some(index) {
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.dim())
        };
        codes.push(Span::styled(clamp_name(hex, SWATCH_WIDTH), style));
    }
    lines.push(Line::from(codes));
    lines
}

/// A single colored block; the label is drawn in a contrasting color.
pub fn swatch_span(hex: &str, label: String) -> Span<'static> {
    match color::validate_hex(hex) {
        Ok(valid) => {
            let rgb = color::hex_to_rgb(&valid);
            Span::styled(
                label,
                Style::default()
                    .bg(rgb_to_color(rgb))
                    .fg(contrast_text(rgb)),
            )
        }
        Err(_) => Span::raw(label),
    }
}
