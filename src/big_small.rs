//! Big/small dice table data structures and round orchestration.
//!
//! A round moves through three phases: Betting (stakes mutable), Rolling
//! (wager frozen, dice revealed one at a time), Result (payout settled).
//! The bankroll and rolling history live here, outside the pure evaluator
//! in [`crate::big_small_logic`].

use crate::big_small_logic::evaluate;
use crate::constants::{
    BET_AMOUNTS, DIE_REVEAL_TICKS, HISTORY_LIMIT, PAYOUT_MULTIPLIER, RESULT_DELAY_TICKS,
    STARTING_BALANCE,
};
use crate::dice::DiceRoll;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two sides of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetSide {
    Big,
    Small,
}

/// Amounts staked on each side before a round resolves.
///
/// Frozen when the roll starts; zeroed at the start of each round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Wager {
    pub big: f64,
    pub small: f64,
}

impl Wager {
    pub fn total(&self) -> f64 {
        self.big + self.small
    }
}

/// Resolved outcome classification of a dice sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundCategory {
    Big,
    Small,
    /// Triple ones or triple sixes. Pays nothing.
    Void,
}

impl RoundCategory {
    pub fn name(&self) -> &'static str {
        match self {
            RoundCategory::Big => "Big",
            RoundCategory::Small => "Small",
            RoundCategory::Void => "Void",
        }
    }
}

/// Outcome of one settled round. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// Dice sum, 3..=18.
    pub sum: u8,
    pub category: RoundCategory,
    pub win_amount: f64,
}

/// History entry for the last-N-rounds display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub id: String,
    pub sum: u8,
    pub category: RoundCategory,
    pub big_stake: f64,
    pub small_stake: f64,
    pub win_amount: f64,
    /// Unix seconds at settle time.
    pub settled_at: i64,
}

/// Round phase. Betting accepts stake changes; Rolling reveals dice on a
/// tick schedule; Result waits for the player to start a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Betting,
    Rolling,
    Result,
}

/// The big/small table: bankroll, current round, and history.
#[derive(Debug, Clone)]
pub struct BigSmallGame {
    pub balance: f64,
    pub phase: GamePhase,
    pub wager: Wager,
    /// Index into [`BET_AMOUNTS`] for the selected chip.
    pub selected_chip: usize,
    /// Dice drawn for the round in progress, if any.
    pub roll: Option<DiceRoll>,
    /// Ticks elapsed since the roll started.
    ticks: u32,
    pub last_result: Option<RoundResult>,
    /// Set if settling failed; the UI shows a zero win and an error state.
    pub settle_failed: bool,
    /// Most recent round first, truncated to [`HISTORY_LIMIT`].
    pub history: Vec<RoundSummary>,
}

impl Default for BigSmallGame {
    fn default() -> Self {
        Self::new()
    }
}

impl BigSmallGame {
    pub fn new() -> Self {
        Self::with_session(STARTING_BALANCE, Vec::new())
    }

    /// Resume a table from a persisted bankroll and history.
    pub fn with_session(balance: f64, history: Vec<RoundSummary>) -> Self {
        Self {
            balance,
            phase: GamePhase::Betting,
            wager: Wager::default(),
            selected_chip: 3, // 50.0
            roll: None,
            ticks: 0,
            last_result: None,
            settle_failed: false,
            history,
        }
    }

    pub fn chip_amount(&self) -> f64 {
        BET_AMOUNTS[self.selected_chip]
    }

    pub fn select_next_chip(&mut self) {
        if self.phase == GamePhase::Betting {
            self.selected_chip = (self.selected_chip + 1) % BET_AMOUNTS.len();
        }
    }

    pub fn select_prev_chip(&mut self) {
        if self.phase == GamePhase::Betting {
            self.selected_chip = (self.selected_chip + BET_AMOUNTS.len() - 1) % BET_AMOUNTS.len();
        }
    }

    pub fn can_bet(&self) -> bool {
        self.phase == GamePhase::Betting && self.balance >= self.chip_amount()
    }

    /// Stake the selected chip on one side. Deducts from the bankroll.
    pub fn place_bet(&mut self, side: BetSide) -> bool {
        if !self.can_bet() {
            return false;
        }
        let amount = self.chip_amount();
        match side {
            BetSide::Big => self.wager.big += amount,
            BetSide::Small => self.wager.small += amount,
        }
        self.balance -= amount;
        true
    }

    /// Refund all stakes placed this round.
    pub fn cancel_bets(&mut self) {
        if self.phase != GamePhase::Betting {
            return;
        }
        self.balance += self.wager.total();
        self.wager = Wager::default();
    }

    /// Move a single-sided stake to the other side, or stake both sides if
    /// nothing is placed yet and the bankroll allows it.
    pub fn switch_sides(&mut self) {
        if self.phase != GamePhase::Betting {
            return;
        }
        if self.wager.big > 0.0 && self.wager.small == 0.0 {
            self.wager.small = self.wager.big;
            self.wager.big = 0.0;
        } else if self.wager.small > 0.0 && self.wager.big == 0.0 {
            self.wager.big = self.wager.small;
            self.wager.small = 0.0;
        } else if self.wager.total() == 0.0 {
            if self.balance >= self.chip_amount() * 2.0 {
                self.place_bet(BetSide::Big);
                self.place_bet(BetSide::Small);
            } else if self.balance >= self.chip_amount() {
                self.place_bet(BetSide::Big);
            }
        }
    }

    /// Stake the entire bankroll, split evenly across both sides.
    pub fn all_in(&mut self) {
        if self.phase != GamePhase::Betting || self.balance <= 0.0 {
            return;
        }
        let half = self.balance / 2.0;
        self.wager.big += half;
        self.wager.small += half;
        self.balance = 0.0;
    }

    /// Freeze the wager and draw the dice. Requires at least one stake.
    pub fn start_roll<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.phase != GamePhase::Betting || self.wager.total() == 0.0 {
            return false;
        }
        self.roll = Some(DiceRoll::roll(rng));
        self.ticks = 0;
        self.last_result = None;
        self.settle_failed = false;
        self.phase = GamePhase::Rolling;
        true
    }

    /// Advance the rolling choreography by one tick. Settles the round once
    /// all dice have landed and the result delay has elapsed.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Rolling {
            return;
        }
        self.ticks += 1;
        if self.ticks >= 3 * DIE_REVEAL_TICKS + RESULT_DELAY_TICKS {
            self.settle();
        }
    }

    /// Faces revealed so far, one landing per [`DIE_REVEAL_TICKS`].
    pub fn revealed_faces(&self) -> Vec<Option<u8>> {
        match (self.phase, self.roll) {
            (GamePhase::Betting, _) | (_, None) => vec![None, None, None],
            (GamePhase::Result, Some(roll)) => roll.faces().map(Some).to_vec(),
            (GamePhase::Rolling, Some(roll)) => roll
                .faces()
                .iter()
                .enumerate()
                .map(|(i, &face)| (self.ticks >= (i as u32 + 1) * DIE_REVEAL_TICKS).then_some(face))
                .collect(),
        }
    }

    fn settle(&mut self) {
        let roll = match self.roll {
            Some(roll) => roll,
            None => return,
        };
        match evaluate(&self.wager, roll, PAYOUT_MULTIPLIER) {
            Ok(result) => {
                self.balance += result.win_amount;
                self.history.insert(
                    0,
                    RoundSummary {
                        id: Uuid::new_v4().to_string(),
                        sum: result.sum,
                        category: result.category,
                        big_stake: self.wager.big,
                        small_stake: self.wager.small,
                        win_amount: result.win_amount,
                        settled_at: Utc::now().timestamp(),
                    },
                );
                self.history.truncate(HISTORY_LIMIT);
                self.last_result = Some(result);
            }
            Err(_) => {
                self.last_result = None;
                self.settle_failed = true;
            }
        }
        self.phase = GamePhase::Result;
    }

    /// Return to the betting phase. Bankroll and history carry over; the
    /// wager and dice of the finished round are discarded.
    pub fn new_round(&mut self) {
        if self.phase != GamePhase::Result {
            return;
        }
        self.phase = GamePhase::Betting;
        self.wager = Wager::default();
        self.roll = None;
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run_roll(game: &mut BigSmallGame, rng: &mut StdRng) {
        assert!(game.start_roll(rng));
        while game.phase == GamePhase::Rolling {
            game.tick();
        }
    }

    #[test]
    fn test_new_table() {
        let game = BigSmallGame::new();
        assert_eq!(game.phase, GamePhase::Betting);
        assert_eq!(game.balance, STARTING_BALANCE);
        assert_eq!(game.wager.total(), 0.0);
        assert!(game.history.is_empty());
        assert_eq!(game.chip_amount(), 50.0);
    }

    #[test]
    fn test_place_bet_deducts_balance() {
        let mut game = BigSmallGame::new();
        assert!(game.place_bet(BetSide::Big));
        assert_eq!(game.wager.big, 50.0);
        assert_eq!(game.balance, STARTING_BALANCE - 50.0);
    }

    #[test]
    fn test_cannot_bet_beyond_balance() {
        let mut game = BigSmallGame::with_session(30.0, Vec::new());
        assert!(!game.place_bet(BetSide::Small)); // chip is 50
        assert_eq!(game.balance, 30.0);
        assert_eq!(game.wager.total(), 0.0);
    }

    #[test]
    fn test_cancel_refunds() {
        let mut game = BigSmallGame::new();
        game.place_bet(BetSide::Big);
        game.place_bet(BetSide::Small);
        game.cancel_bets();
        assert_eq!(game.balance, STARTING_BALANCE);
        assert_eq!(game.wager.total(), 0.0);
    }

    #[test]
    fn test_switch_sides_moves_stake() {
        let mut game = BigSmallGame::new();
        game.place_bet(BetSide::Big);
        game.switch_sides();
        assert_eq!(game.wager.big, 0.0);
        assert_eq!(game.wager.small, 50.0);
        game.switch_sides();
        assert_eq!(game.wager.big, 50.0);
        assert_eq!(game.wager.small, 0.0);
    }

    #[test]
    fn test_switch_sides_with_no_stake_bets_both() {
        let mut game = BigSmallGame::new();
        game.switch_sides();
        assert_eq!(game.wager.big, 50.0);
        assert_eq!(game.wager.small, 50.0);
        assert_eq!(game.balance, STARTING_BALANCE - 100.0);
    }

    #[test]
    fn test_all_in_splits_evenly() {
        let mut game = BigSmallGame::new();
        game.all_in();
        assert_eq!(game.balance, 0.0);
        assert_eq!(game.wager.big, STARTING_BALANCE / 2.0);
        assert_eq!(game.wager.small, STARTING_BALANCE / 2.0);
    }

    #[test]
    fn test_cannot_roll_without_stake() {
        let mut game = BigSmallGame::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!game.start_roll(&mut rng));
        assert_eq!(game.phase, GamePhase::Betting);
    }

    #[test]
    fn test_wager_frozen_while_rolling() {
        let mut game = BigSmallGame::new();
        let mut rng = StdRng::seed_from_u64(1);
        game.place_bet(BetSide::Big);
        game.start_roll(&mut rng);
        assert!(!game.place_bet(BetSide::Small));
        game.cancel_bets();
        assert_eq!(game.wager.big, 50.0);
    }

    #[test]
    fn test_staggered_reveal() {
        let mut game = BigSmallGame::new();
        let mut rng = StdRng::seed_from_u64(1);
        game.place_bet(BetSide::Big);
        game.start_roll(&mut rng);

        assert_eq!(game.revealed_faces(), vec![None, None, None]);
        for _ in 0..DIE_REVEAL_TICKS {
            game.tick();
        }
        let revealed = game.revealed_faces();
        assert!(revealed[0].is_some());
        assert!(revealed[1].is_none());
        assert!(revealed[2].is_none());
    }

    #[test]
    fn test_round_settles_and_records_history() {
        let mut game = BigSmallGame::new();
        let mut rng = StdRng::seed_from_u64(1);
        game.place_bet(BetSide::Big);
        run_roll(&mut game, &mut rng);

        assert_eq!(game.phase, GamePhase::Result);
        let result = game.last_result.expect("round should settle");
        assert_eq!(game.history.len(), 1);
        assert_eq!(game.history[0].sum, result.sum);
        assert_eq!(game.history[0].category, result.category);
        assert_eq!(game.history[0].big_stake, 50.0);
        assert!(!game.settle_failed);
    }

    #[test]
    fn test_history_truncated() {
        let mut game = BigSmallGame::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..(HISTORY_LIMIT + 5) {
            // Keep the table funded so a stake can always be placed.
            game.balance += 100.0;
            game.place_bet(BetSide::Small);
            run_roll(&mut game, &mut rng);
            game.new_round();
        }
        assert_eq!(game.history.len(), HISTORY_LIMIT);
    }

    #[test]
    fn test_new_round_resets_wager_keeps_ledger() {
        let mut game = BigSmallGame::new();
        let mut rng = StdRng::seed_from_u64(2);
        game.place_bet(BetSide::Big);
        run_roll(&mut game, &mut rng);
        let balance_after = game.balance;

        game.new_round();
        assert_eq!(game.phase, GamePhase::Betting);
        assert_eq!(game.wager.total(), 0.0);
        assert!(game.roll.is_none());
        assert_eq!(game.balance, balance_after);
        assert_eq!(game.history.len(), 1);
    }

    #[test]
    fn test_invalid_stake_marks_settle_failed() {
        let mut game = BigSmallGame::new();
        let mut rng = StdRng::seed_from_u64(6);
        game.wager.big = -5.0; // corrupt stake, rejected by the evaluator
        let balance_before = game.balance;
        run_roll(&mut game, &mut rng);

        assert_eq!(game.phase, GamePhase::Result);
        assert!(game.settle_failed);
        assert!(game.last_result.is_none());
        assert_eq!(game.balance, balance_before);
        assert!(game.history.is_empty());

        // The table recovers into a clean betting phase
        game.new_round();
        assert_eq!(game.phase, GamePhase::Betting);
        assert_eq!(game.wager.total(), 0.0);
    }

    #[test]
    fn test_settle_credits_exact_payout() {
        // Seed-independent accounting: balance after settle is the balance
        // after staking plus whatever the evaluator reports as the win.
        let mut game = BigSmallGame::new();
        let mut rng = StdRng::seed_from_u64(12);
        game.place_bet(BetSide::Big);
        let staked_balance = game.balance;
        run_roll(&mut game, &mut rng);

        let result = game.last_result.unwrap();
        assert!((game.balance - (staked_balance + result.win_amount)).abs() < 1e-9);
    }
}
