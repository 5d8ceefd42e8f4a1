use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::palettes::{loading_line, swatch_span};
use super::theme::Theme;
use crate::app::App;

pub fn build_gallery_text(app: &App, theme: Theme) -> Text<'static> {
    let mut lines = Vec::new();
    if app.loading.inspiration {
        lines.push(loading_line(app, theme, "Generating..."));
    }
    if app.inspiration_palettes.is_empty() {
        if !app.loading.inspiration {
            lines.push(Line::from(Span::styled(
                "Press space to generate inspiration.",
                Style::default().fg(theme.dim()),
            )));
        }
        return Text::from(lines);
    }

    // Compact cards: one swatch strip and a caption
    for (index, palette) in app.inspiration_palettes.iter().enumerate() {
        let selected = index == app.selected_palette_index;
        let mut strip = vec![Span::styled(
            if selected { "> " } else { "  " },
            Style::default().fg(theme.selection_marker()),
        )];
        for (swatch_index, hex) in palette.colors.iter().enumerate() {
            let label = if selected && swatch_index == app.selected_swatch_index {
                "  ▲  ".to_string()
            } else {
                "     ".to_string()
            };
            strip.push(swatch_span(hex, label));
        }
        strip.push(Span::raw("  "));
        let title_style = if selected {
            Style::default()
                .fg(theme.gallery())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text())
        };
        strip.push(Span::styled(palette.title.clone(), title_style));
        strip.push(Span::styled(
            format!("  by {}", palette.user_name),
            Style::default().fg(theme.dim()),
        ));
        lines.push(Line::from(strip));
    }
    Text::from(lines)
}
