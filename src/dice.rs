//! Dice types shared by the big/small table and the dice demo.
//!
//! Face values are drawn up front when a roll starts; scenes reveal them
//! on a staggered tick schedule.

use crate::constants::{DICE_DEMO_STAGGER_TICKS, DICE_DEMO_TUMBLE_TICKS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest face on a standard die.
pub const MIN_FACE: u8 = 1;
/// Highest face on a standard die.
pub const MAX_FACE: u8 = 6;

/// Error constructing a [`DiceRoll`] from raw face values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiceRollError {
    #[error("expected exactly 3 dice, got {0}")]
    WrongCount(usize),
    #[error("die face {0} is outside 1..=6")]
    InvalidFace(u8),
}

/// The three face values drawn for one big/small round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll([u8; 3]);

impl DiceRoll {
    /// Draw three faces, each independently uniform in 1..=6.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        DiceRoll([roll_die(rng), roll_die(rng), roll_die(rng)])
    }

    pub fn faces(&self) -> [u8; 3] {
        self.0
    }

    /// Sum of the three faces, always in 3..=18.
    pub fn sum(&self) -> u8 {
        self.0.iter().sum()
    }
}

impl TryFrom<[u8; 3]> for DiceRoll {
    type Error = DiceRollError;

    fn try_from(faces: [u8; 3]) -> Result<Self, Self::Error> {
        for &face in &faces {
            if !(MIN_FACE..=MAX_FACE).contains(&face) {
                return Err(DiceRollError::InvalidFace(face));
            }
        }
        Ok(DiceRoll(faces))
    }
}

impl TryFrom<&[u8]> for DiceRoll {
    type Error = DiceRollError;

    fn try_from(faces: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 3] = faces
            .try_into()
            .map_err(|_| DiceRollError::WrongCount(faces.len()))?;
        DiceRoll::try_from(arr)
    }
}

/// Draw a single face, uniform in 1..=6.
pub fn roll_die<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(MIN_FACE..=MAX_FACE)
}

/// One die in the multi-roll demo.
#[derive(Debug, Clone, Copy)]
pub struct DemoDie {
    /// Final face, drawn when the roll starts.
    pub face: u8,
    /// Tick at which this die stops tumbling and shows its face.
    pub lands_at: u32,
}

/// State for the "roll a handful of dice" demo.
///
/// All faces are drawn when the roll starts; each die lands a few ticks
/// after the previous one.
#[derive(Debug, Clone, Default)]
pub struct DiceDemo {
    pub dice: Vec<DemoDie>,
    pub ticks: u32,
    pub rolling: bool,
    /// Sums of every completed roll this session.
    pub roll_totals: Vec<u32>,
}

impl DiceDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh roll of `count` dice.
    pub fn roll_all<R: Rng>(&mut self, count: usize, rng: &mut R) {
        self.dice = (0..count)
            .map(|i| DemoDie {
                face: roll_die(rng),
                lands_at: DICE_DEMO_TUMBLE_TICKS + i as u32 * DICE_DEMO_STAGGER_TICKS,
            })
            .collect();
        self.ticks = 0;
        // An empty roll has nothing to land and must not wedge the demo.
        self.rolling = !self.dice.is_empty();
    }

    /// Advance one tick. Records the total once every die has landed.
    pub fn tick(&mut self) {
        if !self.rolling {
            return;
        }
        self.ticks += 1;
        if self.all_landed() {
            self.rolling = false;
            self.roll_totals.push(self.total());
        }
    }

    /// Faces currently showing, in die order. `None` while still tumbling.
    pub fn visible_faces(&self) -> Vec<Option<u8>> {
        self.dice
            .iter()
            .map(|d| (self.ticks >= d.lands_at).then_some(d.face))
            .collect()
    }

    pub fn all_landed(&self) -> bool {
        !self.dice.is_empty() && self.dice.iter().all(|d| self.ticks >= d.lands_at)
    }

    /// Sum of all final faces.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| d.face as u32).sum()
    }
}
