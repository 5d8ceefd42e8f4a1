mod gallery;
mod help;
mod helpers;
mod palettes;
mod search;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::{App, AppView, FocusMode, TABS};
use theme::Theme;

use helpers::spinner;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = Theme::for_app(app);
    let (title, body_text) = match app.view {
        AppView::Home => (" Random Palette ", palettes::build_home_text(app, theme)),
        AppView::Search => (" Search Color ", search::build_search_text(app, theme)),
        AppView::Gallery => (
            " Inspiration Gallery ",
            gallery::build_gallery_text(app, theme),
        ),
        AppView::Top => (" Top 5 Palettes ", palettes::build_top_text(app, theme)),
        AppView::Help => (" Help ", help::build_help_text(theme)),
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Palettr  ",
            Style::default().fg(Color::White).bg(theme.primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palettes",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            if app.dark_mode { "☾ dark" } else { "☀ light" },
            Style::default().fg(theme.dim()),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(panel(theme));
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        tabs_line(app, theme),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(theme.dim()),
    )));
    body_lines.extend(keybinds_lines(app, theme));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(theme.text()))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .block(panel(theme));
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(status_line(app, theme)))
        .alignment(Alignment::Left)
        .block(panel(theme));
    frame.render_widget(footer, layout[2]);
}

fn panel(theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.secondary()))
        .style(Style::default().bg(theme.surface()))
}

fn tabs_line(app: &App, theme: Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, view) in TABS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let active = *view == app.view;
        let focused = app.focus_mode == FocusMode::TabBar && app.selected_tab_index == index;
        let style = if active {
            Style::default()
                .fg(Color::White)
                .bg(theme.highlight())
                .add_modifier(Modifier::BOLD)
        } else if focused {
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.dim())
        };
        spans.push(Span::styled(format!(" {} ", view.label()), style));
    }

    Line::from(spans)
}

/// Loading work first, then errors, then the last inspected color.
fn status_line(app: &App, theme: Theme) -> Line<'static> {
    if app.loading.any() {
        let mut what = Vec::new();
        if app.loading.random {
            what.push("random palette");
        }
        if app.loading.top {
            what.push("top palettes");
        }
        if app.loading.inspiration {
            what.push("inspiration");
        }
        if app.loading.lookup {
            what.push("color");
        }
        return Line::from(vec![
            Span::styled(
                format!(" {} ", spinner(app.ticks)),
                Style::default().fg(theme.active()),
            ),
            Span::styled(
                format!("Loading {}...", what.join(", ")),
                Style::default().fg(theme.text()),
            ),
        ]);
    }
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(theme.error()),
        ));
    }
    if let Some(record) = &app.search.record {
        return Line::from(vec![
            Span::styled(" ● ", Style::default().fg(helpers::rgb_to_color(record.rgb))),
            Span::styled(record.label.clone(), Style::default().fg(theme.text())),
            Span::styled(
                format!(
                    "  HSV {}°, {}%, {}%",
                    record.hsv.hue, record.hsv.saturation, record.hsv.value
                ),
                Style::default().fg(theme.dim()),
            ),
        ]);
    }
    Line::from(Span::styled(" Ready", Style::default().fg(theme.dim())))
}

fn keybinds_lines(app: &App, theme: Theme) -> Vec<Line<'static>> {
    let focus_hint = if app.focus_mode == FocusMode::TabBar {
        "Tab: Switch to content  ←/→: Navigate tabs  Enter: Select"
    } else {
        "Tab: Switch to tab bar  h/f/g/t: Quick nav"
    };

    let (primary, secondary) = match app.view {
        AppView::Home => (
            "space: Generate  Left/Right: Swatch  Enter: Inspect",
            "d: Dark mode  ?: Help  q: Quit",
        ),
        AppView::Search => (
            "/: Edit  space: Search again",
            "esc: Back  d: Dark mode  ?: Help  q: Quit",
        ),
        AppView::Gallery => (
            "space: Generate  Up/Down: Select  Left/Right: Swatch  Enter: Inspect",
            "d: Dark mode  ?: Help  q: Quit",
        ),
        AppView::Top => (
            "Up/Down: Select  Left/Right: Swatch  Enter: Inspect",
            "r: Refresh  d: Dark mode  ?: Help  q: Quit",
        ),
        AppView::Help => ("Press ? or ESC to close this help screen", ""),
    };
    vec![
        Line::from(Span::styled(
            focus_hint,
            Style::default().fg(theme.highlight()),
        )),
        Line::from(Span::styled(primary, Style::default().fg(theme.dim()))),
        Line::from(Span::styled(secondary, Style::default().fg(theme.dim()))),
    ]
}
