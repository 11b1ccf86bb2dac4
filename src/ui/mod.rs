//! Scene rendering, dispatched by the active screen.

pub mod big_small_scene;
pub mod cards_scene;
pub mod coin_scene;
pub mod dice_scene;
pub mod game_common;

use crate::big_small::BigSmallGame;
use crate::cards::CardRevealDemo;
use crate::coin::CoinTossDemo;
use crate::dice::DiceDemo;
use crate::input::{GalleryMenu, Screen, MENU_ITEMS};
use self::game_common::format_money;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the whole UI: header bar, then the active scene.
#[allow(clippy::too_many_arguments)]
pub fn draw_ui(
    frame: &mut Frame,
    screen: Screen,
    menu: &GalleryMenu,
    table: &BigSmallGame,
    dice: &DiceDemo,
    coins: &CoinTossDemo,
    cards: &CardRevealDemo,
) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(size);

    draw_header(frame, v_chunks[0], table);

    match screen {
        Screen::Menu => draw_menu(frame, v_chunks[1], menu),
        Screen::BigSmall => big_small_scene::render_big_small_scene(frame, v_chunks[1], table),
        Screen::Dice => dice_scene::render_dice_scene(frame, v_chunks[1], dice),
        Screen::Coin => coin_scene::render_coin_scene(frame, v_chunks[1], coins),
        Screen::Cards => cards_scene::render_cards_scene(frame, v_chunks[1], cards),
    }
}

/// One-line header with the app name and the table bankroll.
fn draw_header(frame: &mut Frame, area: Rect, table: &BigSmallGame) {
    let spans = vec![
        Span::styled(
            " PARLOUR ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Balance: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_money(table.balance),
            Style::default().fg(Color::White),
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The gallery menu: one entry per demo.
fn draw_menu(frame: &mut Frame, area: Rect, menu: &GalleryMenu) {
    let block = Block::default()
        .title(" Gallery ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let list_height = MENU_ITEMS.len() as u16 * 2;
    let y_start = inner.y + inner.height.saturating_sub(list_height + 3) / 2;

    let mut lines: Vec<Line> = Vec::new();
    for (i, (_, name, blurb)) in MENU_ITEMS.iter().enumerate() {
        let selected = i == menu.selected;
        let marker = if selected { "> " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(*name, name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", blurb),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[↑↓] Select  [Enter] Open  [q] Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    let list_area = Rect::new(inner.x, y_start, inner.width, height).intersection(inner);
    frame.render_widget(text, list_area);
}
