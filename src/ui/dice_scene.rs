//! Dice roll demo scene.

use super::game_common::{
    create_scene_layout, render_busy_status_bar, render_info_panel_frame, render_status_bar,
};
use crate::constants::DICE_DEMO_COUNT;
use crate::dice::DiceDemo;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Pip rows for a die face, 3 lines of 5 characters.
/// `None` renders the tumbling placeholder.
pub fn die_face_lines(face: Option<u8>) -> [&'static str; 3] {
    match face {
        Some(1) => ["     ", "  ●  ", "     "],
        Some(2) => ["●    ", "     ", "    ●"],
        Some(3) => ["●    ", "  ●  ", "    ●"],
        Some(4) => ["●   ●", "     ", "●   ●"],
        Some(5) => ["●   ●", "  ●  ", "●   ●"],
        Some(6) => ["●   ●", "●   ●", "●   ●"],
        _ => ["     ", "  ?  ", "     "],
    }
}

/// Render a row of dice, centered in `area`.
pub fn render_dice_row(frame: &mut Frame, area: Rect, faces: &[Option<u8>]) {
    if faces.is_empty() {
        return;
    }
    // Each die is 7 wide (5 pips + borders) with a gap between dice.
    let die_width = 7u16;
    let row_width = faces.len() as u16 * (die_width + 1) - 1;
    let x_offset = area.x + area.width.saturating_sub(row_width) / 2;
    let y_offset = area.y + area.height.saturating_sub(5) / 2;

    for (i, &face) in faces.iter().enumerate() {
        let x = x_offset + i as u16 * (die_width + 1);
        let style = if face.is_some() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let pips = die_face_lines(face);
        let lines = vec![
            Line::from(Span::styled("┌─────┐", style)),
            Line::from(Span::styled(format!("│{}│", pips[0]), style)),
            Line::from(Span::styled(format!("│{}│", pips[1]), style)),
            Line::from(Span::styled(format!("│{}│", pips[2]), style)),
            Line::from(Span::styled("└─────┘", style)),
        ];
        if x + die_width <= area.x + area.width && y_offset + 5 <= area.y + area.height {
            frame.render_widget(
                Paragraph::new(lines),
                Rect::new(x, y_offset, die_width, 5),
            );
        }
    }
}

/// Render the multi-dice demo scene.
pub fn render_dice_scene(frame: &mut Frame, area: Rect, demo: &DiceDemo) {
    let layout = create_scene_layout(frame, area, " Dice Roll ", Color::Green, 24);

    let faces = if demo.dice.is_empty() {
        vec![None; DICE_DEMO_COUNT]
    } else {
        demo.visible_faces()
    };
    render_dice_row(frame, layout.content, &faces);

    // Total under the dice once everything has landed
    if demo.all_landed() {
        let total_area = Rect {
            y: layout.content.y + layout.content.height.saturating_sub(1),
            height: 1,
            ..layout.content
        };
        let total = Paragraph::new(Line::from(Span::styled(
            format!("Total: {}", demo.total()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(total, total_area);
    }

    if demo.rolling {
        render_busy_status_bar(frame, layout.status_bar, "Rolling...");
    } else {
        render_status_bar(
            frame,
            layout.status_bar,
            "Ready",
            Color::White,
            &[("[Enter]", "Roll"), ("[Esc]", "Back")],
        );
    }

    render_info_panel(frame, layout.info_panel, demo);
}

fn render_info_panel(frame: &mut Frame, area: Rect, demo: &DiceDemo) {
    let inner = render_info_panel_frame(frame, area, " Totals ");

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "DICE ROLL",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} dice land one", DICE_DEMO_COUNT),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "after another.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Recent totals:",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    for total in demo.roll_totals.iter().rev().take(5) {
        lines.push(Line::from(Span::styled(
            format!("  {}", total),
            Style::default().fg(Color::Cyan),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
