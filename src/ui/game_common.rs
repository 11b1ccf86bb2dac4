//! Shared UI chrome for the demo scenes.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_scene_layout`.
pub struct SceneLayout {
    /// Main content area, inside the outer border.
    pub content: Rect,
    /// Status bar area (2 lines) at the bottom left.
    pub status_bar: Rect,
    /// Info panel on the right, with its own border.
    pub info_panel: Rect,
}

/// Create the standard scene layout: bordered content on the left with a
/// two-line status bar under it, info panel on the right.
pub fn create_scene_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> SceneLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::new(
        Direction::Horizontal,
        [Constraint::Min(30), Constraint::Length(info_panel_width)],
    )
    .split(inner);
    let rows = Layout::new(
        Direction::Vertical,
        [Constraint::Min(5), Constraint::Length(2)],
    )
    .split(columns[0]);

    SceneLayout {
        content: rows[0],
        status_bar: rows[1],
        info_panel: columns[1],
    }
}

/// Render a two-line status bar: status message, then key hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        status_text.to_string(),
        Style::default().fg(status_color),
    ))];

    if !controls.is_empty() {
        let hint_spans: Vec<Span> = controls
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(key.to_string(), Style::default().fg(Color::White)),
                    Span::styled(format!(" {}  ", action), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();
        lines.push(Line::from(hint_spans));
    }

    let bar = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

/// Status bar with a braille spinner, for in-flight rolls and flips.
pub fn render_busy_status_bar(frame: &mut Frame, area: Rect, message: &str) {
    use std::time::{SystemTime, UNIX_EPOCH};

    const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let spinner = SPINNER[(elapsed.as_millis() / 100) as usize % SPINNER.len()];

    render_status_bar(frame, area, &format!("{} {}", spinner, message), Color::Yellow, &[]);
}

/// Render a titled side panel frame. Returns the inner Rect for content.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Compact banner at the bottom of an area for a settled result, leaving
/// the table visible behind it.
pub fn render_result_banner(
    frame: &mut Frame,
    area: Rect,
    color: Color,
    title: &str,
    message: &str,
) {
    let banner_height: u16 = 4;
    let banner_area = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(banner_height),
        area.width,
        banner_height,
    );

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            "[Enter] New round  [Esc] Back",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Format a money amount with two decimals, e.g. `411.54`.
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}
