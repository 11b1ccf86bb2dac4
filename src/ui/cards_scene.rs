//! Card reveal demo scene. The reveal style picks the layout; the logic
//! behind all of them is the same shuffled hand.

use super::game_common::{
    create_scene_layout, render_busy_status_bar, render_info_panel_frame, render_status_bar,
};
use crate::cards::{Card, CardRevealDemo, RevealStyle};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CARD_WIDTH: u16 = 6;
const CARD_HEIGHT: u16 = 4;

/// Render the card reveal demo scene.
pub fn render_cards_scene(frame: &mut Frame, area: Rect, demo: &CardRevealDemo) {
    let title = format!(" Card Reveal - {} ", demo.style.name());
    let layout = create_scene_layout(frame, area, &title, Color::Magenta, 24);

    match demo.style {
        RevealStyle::DealToPiles => render_piles(frame, layout.content, demo),
        // Grid, carousel, and fan spread differ only in on-screen motion;
        // without animation they all read as a row-wrapped spread.
        _ => render_spread(frame, layout.content, demo),
    }

    if demo.dealing {
        render_busy_status_bar(frame, layout.status_bar, "Dealing...");
    } else {
        render_status_bar(
            frame,
            layout.status_bar,
            if demo.all_revealed() {
                "All cards revealed"
            } else {
                "Ready"
            },
            Color::White,
            &[("[Enter]", "Deal"), ("[Tab]", "Style"), ("[Esc]", "Back")],
        );
    }

    render_info_panel(frame, layout.info_panel, demo);
}

fn card_style(card: Card) -> Style {
    if card.suit.is_red() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}

/// Draw one face-up card tile at (x, y).
fn render_card(frame: &mut Frame, bounds: Rect, x: u16, y: u16, card: Card) {
    if x + CARD_WIDTH > bounds.x + bounds.width || y + CARD_HEIGHT > bounds.y + bounds.height {
        return;
    }
    let style = card_style(card);
    let rank = card.rank_label();
    let suit = card.suit.symbol();
    let lines = vec![
        Line::from(Span::styled("┌────┐", style)),
        Line::from(Span::styled(format!("│{:<2}{} │", rank, suit), style)),
        Line::from(Span::styled(format!("│ {}{:>2}│", suit, rank), style)),
        Line::from(Span::styled("└────┘", style)),
    ];
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT),
    );
}

/// Draw one face-down card tile at (x, y).
fn render_card_back(frame: &mut Frame, bounds: Rect, x: u16, y: u16) {
    if x + CARD_WIDTH > bounds.x + bounds.width || y + CARD_HEIGHT > bounds.y + bounds.height {
        return;
    }
    let style = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled("┌────┐", style)),
        Line::from(Span::styled("│░░░░│", style)),
        Line::from(Span::styled("│░░░░│", style)),
        Line::from(Span::styled("└────┘", style)),
    ];
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT),
    );
}

/// Row-wrapped spread of the whole hand, backs for undealt cards.
fn render_spread(frame: &mut Frame, area: Rect, demo: &CardRevealDemo) {
    if demo.hand.is_empty() {
        render_empty_hint(frame, area);
        return;
    }
    let per_row = (area.width / (CARD_WIDTH + 1)).max(1) as usize;
    let rows = demo.hand.len().div_ceil(per_row);
    let used_width = per_row.min(demo.hand.len()) as u16 * (CARD_WIDTH + 1);
    let x_start = area.x + area.width.saturating_sub(used_width) / 2;
    let y_start = area.y + area.height.saturating_sub(rows as u16 * CARD_HEIGHT) / 2;

    for (i, &card) in demo.hand.iter().enumerate() {
        let x = x_start + (i % per_row) as u16 * (CARD_WIDTH + 1);
        let y = y_start + (i / per_row) as u16 * CARD_HEIGHT;
        if i < demo.revealed {
            render_card(frame, area, x, y, card);
        } else {
            render_card_back(frame, area, x, y);
        }
    }
}

/// Left and right piles, dealt alternately.
fn render_piles(frame: &mut Frame, area: Rect, demo: &CardRevealDemo) {
    if demo.hand.is_empty() {
        render_empty_hint(frame, area);
        return;
    }
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (left, right) = demo.piles();
    render_pile(frame, halves[0], "Left pile", &left);
    render_pile(frame, halves[1], "Right pile", &right);
}

fn render_pile(frame: &mut Frame, area: Rect, label: &str, pile: &[Card]) {
    let header = Paragraph::new(Line::from(Span::styled(
        format!("{} ({})", label, pile.len()),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, Rect { height: 1, ..area });

    // Stack the pile with a 1-row overlap so growth is visible.
    let x = area.x + area.width.saturating_sub(CARD_WIDTH) / 2;
    for (i, &card) in pile.iter().enumerate() {
        let y = area.y + 1 + i as u16;
        render_card(frame, area, x, y, card);
    }
}

fn render_empty_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(Span::styled(
        "Press Enter to deal",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    let y = area.y + area.height / 2;
    frame.render_widget(hint, Rect { y, height: 1, ..area });
}

fn render_info_panel(frame: &mut Frame, area: Rect, demo: &CardRevealDemo) {
    let inner = render_info_panel_frame(frame, area, " Deal ");

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "CARD REVEAL",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "12 cards from a",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "shuffled deck, turned",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "over one at a time.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Style: ", Style::default().fg(Color::DarkGray)),
            Span::styled(demo.style.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Revealed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", demo.revealed, demo.hand.len()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
