use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text(theme: Theme) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global", theme));
    lines.extend(section_lines(
        &[
            "q / Ctrl+C: Quit",
            "?: Toggle help",
            "d: Toggle dark mode",
            "Tab: Toggle focus (tab bar / content)",
            "Left/Right: Navigate tabs (tab bar focus)",
            "Enter: Activate tab (tab bar focus)",
            "h/f/g/t: Quick nav",
            "esc: Back",
        ],
        theme,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Palettes", theme));
    lines.extend(section_lines(
        &[
            "space / r: Generate (home, gallery) or refresh (top)",
            "Up/Down: Select palette",
            "Left/Right: Select swatch",
            "Enter: Inspect selected swatch",
        ],
        theme,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Search", theme));
    lines.extend(section_lines(
        &[
            "/ or Enter: Edit hex code",
            "Enter (editing): Search",
            "Esc (editing): Stop editing",
            "space: Search again",
        ],
        theme,
    ));

    Text::from(lines)
}

fn section_title(title: &str, theme: Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.primary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str], theme: Theme) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(theme.text()),
            ))
        })
        .collect()
}
