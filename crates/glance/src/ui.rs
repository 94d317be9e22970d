//! UI drawing
//!
//! All rendering comes from `App` state. No printing outside ratatui frames.

use chrono::Local;
use glance_common::{Feature, FeatureStatus, ThemeMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::Palette;

/// Draw a full frame
pub fn draw(f: &mut Frame, app: &App) {
    let p = Palette::for_mode(app.theme);
    let size = f.size();

    // Paint the themed background before anything else
    f.render_widget(Block::default().style(Style::default().bg(p.bg).fg(p.fg)), size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(5), // metric cards
            Constraint::Min(5),    // features + recommendations
            Constraint::Length(1), // status bar
        ])
        .split(size);

    draw_header(f, chunks[0], app, &p);
    draw_metric_cards(f, chunks[1], app, &p);
    draw_main(f, chunks[2], app, &p);
    draw_status_bar(f, chunks[3], app, &p);

    if let Some(chat) = &app.chat {
        draw_chat_popup(f, size, chat, &p);
    }

    if app.show_help {
        draw_help_overlay(f, size, &p);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let theme_name = match app.theme {
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
    };
    let now = Local::now().format("%H:%M %b %d").to_string();

    let header = Line::from(vec![
        Span::styled(
            "Glance ",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("AI Business Intelligence", Style::default().fg(p.fg)),
        Span::raw(" | "),
        Span::styled(format!("theme: {theme_name}"), Style::default().fg(p.muted)),
        Span::raw(" | "),
        Span::styled(now, Style::default().fg(p.muted)),
    ]);

    f.render_widget(Paragraph::new(header), area);
}

fn draw_metric_cards(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let m = &app.report.metrics;
    draw_gauge_card(f, cards[0], "CPU Usage", m.cpu_usage, "↑", p);
    draw_gauge_card(f, cards[1], "Memory Usage", m.memory_usage, "↓", p);
    draw_value_card(f, cards[2], "Response Time", format!("{:.0}ms", m.response_time), "→", p);
    draw_value_card(f, cards[3], "Uptime", format!("{}%", m.uptime), "↑", p);
}

fn draw_gauge_card(f: &mut Frame, area: Rect, title: &str, percent: f64, trend: &str, p: &Palette) {
    let gauge = Gauge::default()
        .block(card_block(title, trend, p))
        .gauge_style(Style::default().fg(p.accent).bg(p.bg))
        .percent(percent.clamp(0.0, 100.0) as u16);
    f.render_widget(gauge, area);
}

fn draw_value_card(f: &mut Frame, area: Rect, title: &str, value: String, trend: &str, p: &Palette) {
    let card = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(card_block(title, trend, p));
    f.render_widget(card, area);
}

fn card_block<'a>(title: &'a str, trend: &'a str, p: &Palette) -> Block<'a> {
    Block::default()
        .title(format!("{title} {trend}"))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border))
}

fn draw_main(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    draw_feature_list(f, panes[0], app, p);
    draw_recommendations(f, panes[1], app, p);
}

fn status_span(status: FeatureStatus, p: &Palette) -> Span<'static> {
    let (icon, color) = match status {
        FeatureStatus::Healthy => ("✓", p.healthy),
        FeatureStatus::Warning => ("⚠", p.warning),
        FeatureStatus::Error => ("✗", p.error),
    };
    Span::styled(format!("{icon} "), Style::default().fg(color))
}

fn feature_item<'a>(feature: &'a Feature, p: &Palette) -> ListItem<'a> {
    let mut lines = vec![
        Line::from(vec![
            status_span(feature.status, p),
            Span::styled(
                feature.name.as_str(),
                Style::default().fg(p.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", feature.status.as_str()),
                Style::default().fg(p.muted),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", feature.description),
            Style::default().fg(p.muted),
        )),
    ];
    for rec in &feature.recommendations {
        lines.push(Line::from(Span::styled(
            format!("    • {rec}"),
            Style::default().fg(p.fg),
        )));
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn draw_feature_list(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let items: Vec<ListItem> = app
        .report
        .features
        .iter()
        .map(|feature| feature_item(feature, p))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Feature Status")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(p.border)),
        )
        .highlight_style(Style::default().bg(p.highlight_bg));

    let mut state = ListState::default();
    state.select(Some(app.selected_feature));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_recommendations(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let items: Vec<ListItem> = app
        .report
        .recommendations
        .iter()
        .map(|rec| ListItem::new(Line::from(format!("• {rec}"))))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title("AI Recommendations")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border)),
    );
    f.render_widget(list, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let mut spans = vec![Span::styled(
        "q quit | t theme | c chat | e export | j/k select | ? help",
        Style::default().fg(p.muted),
    )];

    let degraded = app.report.degraded_count();
    if degraded > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{degraded} degraded"),
            Style::default().fg(p.warning),
        ));
    }

    if let Some(status) = &app.status_line {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(status.as_str(), Style::default().fg(p.accent)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_chat_popup(f: &mut Frame, area: Rect, chat: &crate::app::ChatWidget, p: &Palette) {
    let popup = centered_rect(55, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title("AI Assistant")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.accent))
        .style(Style::default().bg(p.bg).fg(p.fg));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner);

    let mut lines: Vec<Line> = chat
        .log
        .messages()
        .iter()
        .map(|msg| {
            if msg.is_ai {
                Line::from(vec![
                    Span::styled(
                        "AI: ",
                        Style::default()
                            .fg(p.assistant_msg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(msg.text.as_str()),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        "You: ",
                        Style::default().fg(p.user_msg).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(msg.text.as_str()),
                ])
            }
        })
        .collect();

    if chat.awaiting_reply {
        lines.push(Line::from(Span::styled(
            "AI is thinking…",
            Style::default().fg(p.muted).add_modifier(Modifier::ITALIC),
        )));
    }

    let messages = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(messages, chunks[0]);

    let input = Paragraph::new(Line::from(vec![
        Span::raw("> "),
        Span::raw(chat.input.as_str()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border))
            .title("Enter sends, Esc closes"),
    );
    f.render_widget(input, chunks[1]);
}

fn draw_help_overlay(f: &mut Frame, area: Rect, p: &Palette) {
    let help_area = centered_rect(50, 50, area);
    f.render_widget(Clear, help_area);

    let key_style = Style::default().fg(p.accent);
    let lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(p.warning).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("q / Esc ", key_style), Span::raw("- Quit")]),
        Line::from(vec![Span::styled("t       ", key_style), Span::raw("- Toggle light/dark theme")]),
        Line::from(vec![Span::styled("c       ", key_style), Span::raw("- Open/close assistant chat")]),
        Line::from(vec![Span::styled("e       ", key_style), Span::raw("- Export report JSON")]),
        Line::from(vec![Span::styled("j / k   ", key_style), Span::raw("- Move feature selection")]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(p.muted),
        )),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.warning))
            .style(Style::default().bg(p.bg).fg(p.fg)),
    );
    f.render_widget(help, help_area);
}

/// Create a centered rect sized as a percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
