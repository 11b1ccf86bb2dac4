//! Card reveal demo: shuffle a standard deck, draw a hand, and reveal it
//! one card at a time in one of several layouts.

use crate::constants::CARD_REVEAL_TICKS;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }

    /// Hearts and diamonds are the red suits.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Card rank labels, ace high through king.
pub const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    /// Index into [`RANKS`].
    pub rank: usize,
}

impl Card {
    pub fn rank_label(&self) -> &'static str {
        RANKS[self.rank]
    }

    pub fn label(&self) -> String {
        format!("{}{}", self.rank_label(), self.suit.symbol())
    }
}

/// The full 52-card deck in suit-then-rank order.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in 0..RANKS.len() {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// How the revealed hand is laid out by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    Grid,
    Carousel,
    FanSpread,
    DealToPiles,
}

impl RevealStyle {
    pub const ALL: [RevealStyle; 4] = [
        RevealStyle::Grid,
        RevealStyle::Carousel,
        RevealStyle::FanSpread,
        RevealStyle::DealToPiles,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RevealStyle::Grid => "Grid",
            RevealStyle::Carousel => "Carousel",
            RevealStyle::FanSpread => "Fan spread",
            RevealStyle::DealToPiles => "Deal to piles",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// State for the card reveal demo.
///
/// The hand is drawn when the deal starts; one card turns face up per
/// [`CARD_REVEAL_TICKS`]. The layout style only affects rendering, plus the
/// left/right alternation for deal-to-piles.
#[derive(Debug, Clone)]
pub struct CardRevealDemo {
    pub hand: Vec<Card>,
    pub revealed: usize,
    pub style: RevealStyle,
    pub dealing: bool,
    ticks: u32,
}

impl Default for CardRevealDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRevealDemo {
    pub fn new() -> Self {
        Self {
            hand: Vec::new(),
            revealed: 0,
            style: RevealStyle::Grid,
            dealing: false,
            ticks: 0,
        }
    }

    /// Shuffle a fresh deck and draw `count` cards face down.
    pub fn deal<R: Rng>(&mut self, count: usize, rng: &mut R) {
        let mut deck = standard_deck();
        deck.shuffle(rng);
        deck.truncate(count);
        self.hand = deck;
        self.revealed = 0;
        self.ticks = 0;
        // An empty hand has nothing to reveal and must not wedge the demo.
        self.dealing = !self.hand.is_empty();
    }

    /// Advance one tick, turning the next card face up on schedule.
    pub fn tick(&mut self) {
        if !self.dealing {
            return;
        }
        self.ticks += 1;
        if self.ticks % CARD_REVEAL_TICKS == 0 && self.revealed < self.hand.len() {
            self.revealed += 1;
            if self.revealed == self.hand.len() {
                self.dealing = false;
            }
        }
    }

    /// The face-up prefix of the hand.
    pub fn revealed_cards(&self) -> &[Card] {
        &self.hand[..self.revealed]
    }

    pub fn all_revealed(&self) -> bool {
        !self.hand.is_empty() && self.revealed == self.hand.len()
    }

    /// Split the revealed cards into left/right piles, dealt alternately
    /// starting with the left pile.
    pub fn piles(&self) -> (Vec<Card>, Vec<Card>) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (i, &card) in self.revealed_cards().iter().enumerate() {
            if i % 2 == 0 {
                left.push(card);
            } else {
                right.push(card);
            }
        }
        (left, right)
    }

    pub fn cycle_style(&mut self) {
        self.style = self.style.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_standard_deck_is_52_unique() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);
        let unique: HashSet<_> = deck.iter().map(|c| (c.suit as u8, c.rank)).collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_deal_draws_distinct_cards() {
        let mut demo = CardRevealDemo::new();
        let mut rng = StdRng::seed_from_u64(21);
        demo.deal(12, &mut rng);
        assert_eq!(demo.hand.len(), 12);
        let unique: HashSet<_> = demo.hand.iter().map(|c| (c.suit as u8, c.rank)).collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_reveal_schedule() {
        let mut demo = CardRevealDemo::new();
        let mut rng = StdRng::seed_from_u64(21);
        demo.deal(3, &mut rng);
        assert_eq!(demo.revealed, 0);

        for _ in 0..CARD_REVEAL_TICKS {
            demo.tick();
        }
        assert_eq!(demo.revealed, 1);

        for _ in 0..(2 * CARD_REVEAL_TICKS) {
            demo.tick();
        }
        assert_eq!(demo.revealed, 3);
        assert!(demo.all_revealed());
        assert!(!demo.dealing);
    }

    #[test]
    fn test_deal_zero_cards_does_not_start() {
        let mut demo = CardRevealDemo::new();
        let mut rng = StdRng::seed_from_u64(1);
        demo.deal(0, &mut rng);
        assert!(!demo.dealing);
        demo.tick();
        assert!(!demo.dealing);
        assert!(!demo.all_revealed());
    }

    #[test]
    fn test_piles_alternate() {
        let mut demo = CardRevealDemo::new();
        let mut rng = StdRng::seed_from_u64(21);
        demo.deal(6, &mut rng);
        while demo.dealing {
            demo.tick();
        }

        let (left, right) = demo.piles();
        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
        assert_eq!(left[0], demo.hand[0]);
        assert_eq!(right[0], demo.hand[1]);
        assert_eq!(left[1], demo.hand[2]);
    }

    #[test]
    fn test_style_cycles_through_all() {
        let mut demo = CardRevealDemo::new();
        let start = demo.style;
        for _ in 0..RevealStyle::ALL.len() {
            demo.cycle_style();
        }
        assert_eq!(demo.style, start);
    }

    #[test]
    fn test_shuffle_deterministic_with_seed() {
        let mut demo1 = CardRevealDemo::new();
        let mut demo2 = CardRevealDemo::new();
        let mut rng1 = StdRng::seed_from_u64(77);
        let mut rng2 = StdRng::seed_from_u64(77);
        demo1.deal(12, &mut rng1);
        demo2.deal(12, &mut rng2);
        assert_eq!(demo1.hand, demo2.hand);
    }

    #[test]
    fn test_red_suits() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }
}
