//! Big/small table scene: betting board, dice, history dots, result banner.

use super::dice_scene::render_dice_row;
use super::game_common::{
    create_scene_layout, format_money, render_busy_status_bar, render_info_panel_frame,
    render_result_banner, render_status_bar,
};
use crate::big_small::{BigSmallGame, GamePhase, RoundCategory};
use crate::constants::{BET_AMOUNTS, PAYOUT_MULTIPLIER};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the big/small table scene.
pub fn render_big_small_scene(frame: &mut Frame, area: Rect, game: &BigSmallGame) {
    let layout = create_scene_layout(frame, area, " Big & Small ", Color::Yellow, 26);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Betting sections
            Constraint::Min(7),    // Dice
            Constraint::Length(1), // History dots
            Constraint::Length(2), // Chip selector
        ])
        .split(layout.content);

    render_bet_sections(frame, chunks[0], game);
    render_dice_row(frame, chunks[1], &game.revealed_faces());
    render_history_dots(frame, chunks[2], game);
    render_chip_selector(frame, chunks[3], game);

    render_status(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if game.phase == GamePhase::Result {
        render_result(frame, layout.content, game);
    }
}

fn render_bet_sections(frame: &mut Frame, area: Rect, game: &BigSmallGame) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_side(frame, halves[0], "BIG", "11-17", game.wager.big, Color::Red);
    render_side(
        frame,
        halves[1],
        "SMALL",
        "4-10",
        game.wager.small,
        Color::Blue,
    );
}

fn render_side(frame: &mut Frame, area: Rect, name: &str, range: &str, stake: f64, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} ({})", name, range),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            if stake > 0.0 {
                format_money(stake)
            } else {
                "-".to_string()
            },
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// One dot per history entry, most recent first. Red for Big, white for
/// Small, dark for Void.
fn render_history_dots(frame: &mut Frame, area: Rect, game: &BigSmallGame) {
    let mut spans = vec![Span::styled("History: ", Style::default().fg(Color::DarkGray))];
    for entry in &game.history {
        let style = match entry.category {
            RoundCategory::Big => Style::default().fg(Color::Red),
            RoundCategory::Small => Style::default().fg(Color::White),
            RoundCategory::Void => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled("● ", style));
    }
    if game.history.is_empty() {
        spans.push(Span::styled("-", Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_chip_selector(frame: &mut Frame, area: Rect, game: &BigSmallGame) {
    let mut spans = vec![Span::styled("Chip: ", Style::default().fg(Color::DarkGray))];
    for (i, amount) in BET_AMOUNTS.iter().enumerate() {
        let style = if i == game.selected_chip {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", amount), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, game: &BigSmallGame) {
    match game.phase {
        GamePhase::Betting => {
            let status = format!(
                "Balance: {}   Staked: {}",
                format_money(game.balance),
                format_money(game.wager.total())
            );
            render_status_bar(
                frame,
                area,
                &status,
                Color::White,
                &[
                    ("[b/s]", "Bet"),
                    ("[←→]", "Chip"),
                    ("[o]", "Other"),
                    ("[a]", "All in"),
                    ("[c]", "Cancel"),
                    ("[Enter]", "Roll"),
                    ("[Esc]", "Back"),
                ],
            );
        }
        GamePhase::Rolling => render_busy_status_bar(frame, area, "Rolling..."),
        GamePhase::Result => {
            let status = format!("Balance: {}", format_money(game.balance));
            render_status_bar(
                frame,
                area,
                &status,
                Color::White,
                &[("[Enter]", "New round"), ("[Esc]", "Back")],
            );
        }
    }
}

fn render_result(frame: &mut Frame, area: Rect, game: &BigSmallGame) {
    if game.settle_failed {
        render_result_banner(frame, area, Color::Red, "ERROR", "Round could not be settled");
        return;
    }
    let result = match game.last_result {
        Some(result) => result,
        None => return,
    };

    let (color, title) = match result.category {
        RoundCategory::Big => (Color::Red, "BIG"),
        RoundCategory::Small => (Color::Blue, "SMALL"),
        RoundCategory::Void => (Color::DarkGray, "VOID"),
    };
    let message = if result.win_amount > 0.0 {
        format!("Sum {} - You won {}!", result.sum, format_money(result.win_amount))
    } else {
        format!("Sum {} - No payout", result.sum)
    };
    render_result_banner(frame, area, color, title, &message);
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &BigSmallGame) {
    let inner = render_info_panel_frame(frame, area, " Table ");

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "RULES",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Three dice are rolled.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Big: sum 11-17",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Small: sum 4-10",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Triple 1s or 6s: void,",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "nothing pays.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Pays ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}x", PAYOUT_MULTIPLIER),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(" the stake", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    // Last few rounds in detail
    if !game.history.is_empty() {
        lines.push(Line::from(Span::styled(
            "Recent rounds:",
            Style::default().fg(Color::DarkGray),
        )));
        for entry in game.history.iter().take(5) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:>2} ", entry.sum),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<5} ", entry.category.name()),
                    Style::default().fg(match entry.category {
                        RoundCategory::Big => Color::Red,
                        RoundCategory::Small => Color::Blue,
                        RoundCategory::Void => Color::DarkGray,
                    }),
                ),
                Span::styled(
                    format!("+{}", format_money(entry.win_amount)),
                    Style::default().fg(if entry.win_amount > 0.0 {
                        Color::Green
                    } else {
                        Color::DarkGray
                    }),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
