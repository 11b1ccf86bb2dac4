//! Coin toss demo: flip a row of fair coins with staggered reveals and a
//! running heads/tails distribution.

use crate::constants::{COIN_DEMO_FLIP_TICKS, COIN_DEMO_STAGGER_TICKS};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub fn name(&self) -> &'static str {
        match self {
            CoinSide::Heads => "Heads",
            CoinSide::Tails => "Tails",
        }
    }

    /// Flip a fair coin.
    pub fn flip<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        }
    }
}

/// One coin in the toss demo.
#[derive(Debug, Clone, Copy)]
pub struct CoinToss {
    pub result: CoinSide,
    /// Tick at which this coin settles and shows its side.
    pub lands_at: u32,
}

/// Running heads/tails tally across the whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TossDistribution {
    pub heads: u32,
    pub tails: u32,
}

impl TossDistribution {
    pub fn total(&self) -> u32 {
        self.heads + self.tails
    }

    pub fn record(&mut self, side: CoinSide) {
        match side {
            CoinSide::Heads => self.heads += 1,
            CoinSide::Tails => self.tails += 1,
        }
    }

    /// Fraction of tosses that came up heads, 0.0 when nothing is recorded.
    pub fn heads_ratio(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.heads as f64 / self.total() as f64
        }
    }
}

/// State for the coin toss demo.
#[derive(Debug, Clone, Default)]
pub struct CoinTossDemo {
    pub coins: Vec<CoinToss>,
    pub ticks: u32,
    pub flipping: bool,
    /// Only settled coins are counted here.
    pub distribution: TossDistribution,
    /// Current run of identical results, updated as coins settle.
    pub streak: Option<(CoinSide, u32)>,
    /// How many coins of the current toss have been tallied.
    tallied: usize,
}

impl CoinTossDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toss `count` coins at once. Results are drawn up front and revealed
    /// one after another.
    pub fn toss_all<R: Rng>(&mut self, count: usize, rng: &mut R) {
        self.coins = (0..count)
            .map(|i| CoinToss {
                result: CoinSide::flip(rng),
                lands_at: COIN_DEMO_FLIP_TICKS + i as u32 * COIN_DEMO_STAGGER_TICKS,
            })
            .collect();
        self.ticks = 0;
        self.tallied = 0;
        self.flipping = true;
    }

    /// Advance one tick, tallying each coin as it settles.
    pub fn tick(&mut self) {
        if !self.flipping {
            return;
        }
        self.ticks += 1;

        while self.tallied < self.coins.len() && self.ticks >= self.coins[self.tallied].lands_at {
            let side = self.coins[self.tallied].result;
            self.distribution.record(side);
            self.streak = match self.streak {
                Some((current, len)) if current == side => Some((side, len + 1)),
                _ => Some((side, 1)),
            };
            self.tallied += 1;
        }

        if self.tallied == self.coins.len() {
            self.flipping = false;
        }
    }

    /// Sides currently showing, in coin order. `None` while still in the air.
    pub fn visible_sides(&self) -> Vec<Option<CoinSide>> {
        self.coins
            .iter()
            .map(|c| (self.ticks >= c.lands_at).then_some(c.result))
            .collect()
    }

    pub fn all_landed(&self) -> bool {
        !self.coins.is_empty() && !self.flipping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settle(demo: &mut CoinTossDemo) {
        while demo.flipping {
            demo.tick();
        }
    }

    #[test]
    fn test_flip_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(11);
        let mut rng2 = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            assert_eq!(CoinSide::flip(&mut rng1), CoinSide::flip(&mut rng2));
        }
    }

    #[test]
    fn test_staggered_reveal_order() {
        let mut demo = CoinTossDemo::new();
        let mut rng = StdRng::seed_from_u64(4);
        demo.toss_all(4, &mut rng);

        assert_eq!(demo.visible_sides(), vec![None; 4]);
        for _ in 0..COIN_DEMO_FLIP_TICKS {
            demo.tick();
        }
        let visible = demo.visible_sides();
        assert!(visible[0].is_some());
        assert!(visible[1].is_none());
    }

    #[test]
    fn test_distribution_counts_every_coin() {
        let mut demo = CoinTossDemo::new();
        let mut rng = StdRng::seed_from_u64(8);
        demo.toss_all(8, &mut rng);
        settle(&mut demo);

        assert!(demo.all_landed());
        assert_eq!(demo.distribution.total(), 8);

        demo.toss_all(8, &mut rng);
        settle(&mut demo);
        assert_eq!(demo.distribution.total(), 16);
    }

    #[test]
    fn test_streak_tracks_runs() {
        let mut demo = CoinTossDemo::new();
        demo.coins = vec![
            CoinToss {
                result: CoinSide::Heads,
                lands_at: 1,
            },
            CoinToss {
                result: CoinSide::Heads,
                lands_at: 2,
            },
            CoinToss {
                result: CoinSide::Tails,
                lands_at: 3,
            },
        ];
        demo.flipping = true;
        settle(&mut demo);

        assert_eq!(demo.streak, Some((CoinSide::Tails, 1)));
        assert_eq!(demo.distribution.heads, 2);
        assert_eq!(demo.distribution.tails, 1);
    }

    #[test]
    fn test_heads_ratio() {
        let mut dist = TossDistribution::default();
        assert_eq!(dist.heads_ratio(), 0.0);
        dist.record(CoinSide::Heads);
        dist.record(CoinSide::Heads);
        dist.record(CoinSide::Tails);
        dist.record(CoinSide::Tails);
        assert!((dist.heads_ratio() - 0.5).abs() < 1e-9);
    }
}
