//! Coin toss demo scene.

use super::game_common::{
    create_scene_layout, render_busy_status_bar, render_info_panel_frame, render_status_bar,
};
use crate::coin::{CoinSide, CoinTossDemo};
use crate::constants::COIN_DEMO_COUNT;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the coin toss demo scene.
pub fn render_coin_scene(frame: &mut Frame, area: Rect, demo: &CoinTossDemo) {
    let layout = create_scene_layout(frame, area, " Coin Toss ", Color::Cyan, 26);

    let sides = if demo.coins.is_empty() {
        vec![None; COIN_DEMO_COUNT]
    } else {
        demo.visible_sides()
    };
    render_coin_row(frame, layout.content, &sides);

    if demo.flipping {
        render_busy_status_bar(frame, layout.status_bar, "Flipping...");
    } else {
        render_status_bar(
            frame,
            layout.status_bar,
            "Ready",
            Color::White,
            &[("[Enter]", "Toss"), ("[Esc]", "Back")],
        );
    }

    render_info_panel(frame, layout.info_panel, demo);
}

fn render_coin_row(frame: &mut Frame, area: Rect, sides: &[Option<CoinSide>]) {
    if sides.is_empty() {
        return;
    }
    // Each coin is 5 wide with a gap.
    let coin_width = 5u16;
    let row_width = sides.len() as u16 * (coin_width + 1) - 1;
    let x_offset = area.x + area.width.saturating_sub(row_width) / 2;
    let y_offset = area.y + area.height.saturating_sub(3) / 2;

    for (i, &side) in sides.iter().enumerate() {
        let x = x_offset + i as u16 * (coin_width + 1);
        let (symbol, style) = match side {
            Some(CoinSide::Heads) => (
                "H",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(CoinSide::Tails) => (
                "T",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            None => ("?", Style::default().fg(Color::DarkGray)),
        };
        let lines = vec![
            Line::from(Span::styled(" ___ ", style)),
            Line::from(Span::styled(format!("( {} )", symbol), style)),
            Line::from(Span::styled(" ‾‾‾ ", style)),
        ];
        if x + coin_width <= area.x + area.width && y_offset + 3 <= area.y + area.height {
            frame.render_widget(
                Paragraph::new(lines),
                Rect::new(x, y_offset, coin_width, 3),
            );
        }
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, demo: &CoinTossDemo) {
    let inner = render_info_panel_frame(frame, area, " Tally ");

    let dist = demo.distribution;
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "COIN TOSS",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} fair coins per toss.", COIN_DEMO_COUNT),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Heads: ", Style::default().fg(Color::Yellow)),
            Span::styled(dist.heads.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Tails: ", Style::default().fg(Color::Cyan)),
            Span::styled(dist.tails.to_string(), Style::default().fg(Color::White)),
        ]),
    ];

    if dist.total() > 0 {
        lines.push(Line::from(vec![
            Span::styled("Heads %: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0}%", dist.heads_ratio() * 100.0),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    if let Some((side, len)) = demo.streak {
        if len >= 2 {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Streak: {} x{}", side.name(), len),
                Style::default().fg(Color::Green),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
