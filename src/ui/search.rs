use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{hex_to_color, rgb_to_color};
use super::palettes::loading_line;
use super::theme::Theme;
use crate::app::App;

pub fn build_search_text(app: &App, theme: Theme) -> Text<'static> {
    let search = &app.search;
    let mut lines = Vec::new();

    let input_style = if search.editing {
        Style::default()
            .fg(theme.highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text())
    };
    let mut input_line = vec![Span::styled("Hex: ", Style::default().fg(theme.dim()))];
    if search.input.is_empty() && !search.editing {
        input_line.push(Span::styled(
            "Enter hex code (e.g., FF5733)",
            Style::default().fg(theme.dim()),
        ));
    } else {
        input_line.push(Span::styled(search.input.clone(), input_style));
    }
    if search.editing {
        input_line.push(Span::styled("_", Style::default().fg(theme.highlight())));
    }
    // Live preview while typing
    if let Some(preview) = hex_to_color(&search.input) {
        input_line.push(Span::raw("  "));
        input_line.push(Span::styled("███", Style::default().fg(preview)));
        input_line.push(Span::raw(" "));
        input_line.push(Span::styled("← Preview", Style::default().fg(theme.dim())));
    }
    lines.push(Line::from(input_line));
    lines.push(Line::from(Span::styled(
        if search.editing {
            "Type a hex code, Enter to search, Esc to stop editing"
        } else {
            "/: Edit  Enter: Edit  space: Search again"
        },
        Style::default().fg(theme.dim()),
    )));
    lines.push(Line::from(""));

    if let Some(error) = &search.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error()),
        )));
        lines.push(Line::from(""));
    }

    if app.loading.lookup {
        lines.push(loading_line(app, theme, "Looking up color..."));
        return Text::from(lines);
    }

    let Some(record) = &search.record else {
        return Text::from(lines);
    };
    let swatch = Style::default().bg(rgb_to_color(record.rgb));
    lines.push(Line::from(vec![
        Span::styled("          ", swatch),
        Span::raw("  "),
        Span::styled(
            record.label.clone(),
            Style::default()
                .fg(theme.text())
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("          ", swatch),
        Span::raw("  "),
        Span::styled(format!("#{}", record.hex), Style::default().fg(theme.dim())),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "RGB: ",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{}, {}, {}",
                record.rgb.red, record.rgb.green, record.rgb.blue
            ),
            Style::default().fg(theme.text()),
        ),
        Span::raw("     "),
        Span::styled(
            "HSV: ",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{}°, {}%, {}%",
                record.hsv.hue, record.hsv.saturation, record.hsv.value
            ),
            Style::default().fg(theme.text()),
        ),
    ]));

    Text::from(lines)
}
