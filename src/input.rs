//! Key dispatch for the gallery and each demo screen.

use crate::big_small::{BetSide, BigSmallGame, GamePhase};
use crate::cards::CardRevealDemo;
use crate::coin::CoinTossDemo;
use crate::constants::{CARD_REVEAL_COUNT, COIN_DEMO_COUNT, DICE_DEMO_COUNT};
use crate::dice::DiceDemo;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    BigSmall,
    Dice,
    Coin,
    Cards,
}

/// Gallery menu entries, in display order.
pub const MENU_ITEMS: [(Screen, &str, &str); 4] = [
    (Screen::BigSmall, "Big & Small", "Three dice, two sides, one payout"),
    (Screen::Dice, "Dice Roll", "A handful of dice, staggered landing"),
    (Screen::Coin, "Coin Toss", "Fair flips and a running tally"),
    (Screen::Cards, "Card Reveal", "Shuffle, draw twelve, turn them over"),
];

/// Menu cursor state.
pub struct GalleryMenu {
    pub selected: usize,
}

impl GalleryMenu {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn move_up(&mut self) {
        self.selected = (self.selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % MENU_ITEMS.len();
    }

    pub fn selected_screen(&self) -> Screen {
        MENU_ITEMS[self.selected].0
    }
}

impl Default for GalleryMenu {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of handling one key event.
pub enum InputResult {
    /// Keep looping.
    Continue,
    /// The table session changed and should be persisted.
    NeedsSave,
    /// Leave the application. Session should be saved first.
    Quit,
}

/// Main dispatcher. Mutates the active demo state and switches screens.
#[allow(clippy::too_many_arguments)]
pub fn handle_input<R: Rng>(
    key: KeyEvent,
    screen: &mut Screen,
    menu: &mut GalleryMenu,
    table: &mut BigSmallGame,
    dice: &mut DiceDemo,
    coins: &mut CoinTossDemo,
    cards: &mut CardRevealDemo,
    rng: &mut R,
) -> InputResult {
    match screen {
        Screen::Menu => handle_menu_input(key, screen, menu),
        Screen::BigSmall => handle_big_small_input(key, screen, table, rng),
        Screen::Dice => handle_dice_input(key, screen, dice, rng),
        Screen::Coin => handle_coin_input(key, screen, coins, rng),
        Screen::Cards => handle_cards_input(key, screen, cards, rng),
    }
}

fn handle_menu_input(key: KeyEvent, screen: &mut Screen, menu: &mut GalleryMenu) -> InputResult {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => menu.move_up(),
        KeyCode::Down | KeyCode::Char('j') => menu.move_down(),
        KeyCode::Enter => *screen = menu.selected_screen(),
        KeyCode::Esc | KeyCode::Char('q') => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}

fn handle_big_small_input<R: Rng>(
    key: KeyEvent,
    screen: &mut Screen,
    table: &mut BigSmallGame,
    rng: &mut R,
) -> InputResult {
    match table.phase {
        GamePhase::Betting => match key.code {
            KeyCode::Char('b') => {
                table.place_bet(BetSide::Big);
            }
            KeyCode::Char('s') => {
                table.place_bet(BetSide::Small);
            }
            KeyCode::Left => table.select_prev_chip(),
            KeyCode::Right => table.select_next_chip(),
            KeyCode::Char('c') => table.cancel_bets(),
            KeyCode::Char('o') => table.switch_sides(),
            KeyCode::Char('a') => table.all_in(),
            KeyCode::Enter => {
                table.start_roll(rng);
            }
            KeyCode::Esc => {
                // Refund open stakes before leaving the table.
                table.cancel_bets();
                *screen = Screen::Menu;
                return InputResult::NeedsSave;
            }
            _ => {}
        },
        // The roll cannot be interrupted once the wager is frozen.
        GamePhase::Rolling => {}
        GamePhase::Result => match key.code {
            KeyCode::Enter | KeyCode::Char('n') => table.new_round(),
            KeyCode::Esc => {
                table.new_round();
                *screen = Screen::Menu;
                return InputResult::NeedsSave;
            }
            _ => {}
        },
    }
    InputResult::Continue
}

fn handle_dice_input<R: Rng>(
    key: KeyEvent,
    screen: &mut Screen,
    dice: &mut DiceDemo,
    rng: &mut R,
) -> InputResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => {
            if !dice.rolling {
                dice.roll_all(DICE_DEMO_COUNT, rng);
            }
        }
        KeyCode::Esc => *screen = Screen::Menu,
        _ => {}
    }
    InputResult::Continue
}

fn handle_coin_input<R: Rng>(
    key: KeyEvent,
    screen: &mut Screen,
    coins: &mut CoinTossDemo,
    rng: &mut R,
) -> InputResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char('t') => {
            if !coins.flipping {
                coins.toss_all(COIN_DEMO_COUNT, rng);
            }
        }
        KeyCode::Esc => *screen = Screen::Menu,
        _ => {}
    }
    InputResult::Continue
}

fn handle_cards_input<R: Rng>(
    key: KeyEvent,
    screen: &mut Screen,
    cards: &mut CardRevealDemo,
    rng: &mut R,
) -> InputResult {
    match key.code {
        KeyCode::Enter | KeyCode::Char('d') => {
            if !cards.dealing {
                cards.deal(CARD_REVEAL_COUNT, rng);
            }
        }
        KeyCode::Tab => cards.cycle_style(),
        KeyCode::Esc => *screen = Screen::Menu,
        _ => {}
    }
    InputResult::Continue
}
