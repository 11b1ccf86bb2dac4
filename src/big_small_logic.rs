//! Payout evaluation for the big/small dice table.
//!
//! The evaluator is pure: given the frozen wager, the three dice, and the
//! payout multiplier it produces a [`RoundResult`] with no side effects.
//! A miscomputed payout is a financial-correctness bug, so inputs are
//! validated and rejected rather than clamped.

use crate::big_small::{RoundCategory, RoundResult, Wager};
use crate::dice::{DiceRoll, MAX_FACE, MIN_FACE};
use thiserror::Error;

/// Input validation failures for [`evaluate`].
#[derive(Debug, Error, PartialEq)]
pub enum EvaluateError {
    #[error("die face {0} is outside 1..=6")]
    InvalidDie(u8),
    #[error("wager amount {0} is not a valid non-negative stake")]
    InvalidWager(f64),
    #[error("payout multiplier {0} must be positive and finite")]
    InvalidMultiplier(f64),
}

/// Classify a dice sum.
///
/// Big is 11..=17 and Small is 4..=10. Triple ones (sum 3) and triple
/// sixes (sum 18) are Void and never pay out.
pub fn category_for_sum(sum: u8) -> RoundCategory {
    match sum {
        11..=17 => RoundCategory::Big,
        4..=10 => RoundCategory::Small,
        _ => RoundCategory::Void,
    }
}

/// Evaluate one round: sum the dice, classify, and pay the matching side.
///
/// At most one side can win per round since the categories are mutually
/// exclusive. A Void round pays nothing regardless of stakes.
pub fn evaluate(
    wager: &Wager,
    roll: DiceRoll,
    payout_multiplier: f64,
) -> Result<RoundResult, EvaluateError> {
    for face in roll.faces() {
        if !(MIN_FACE..=MAX_FACE).contains(&face) {
            return Err(EvaluateError::InvalidDie(face));
        }
    }
    for stake in [wager.big, wager.small] {
        if !stake.is_finite() || stake < 0.0 {
            return Err(EvaluateError::InvalidWager(stake));
        }
    }
    if !payout_multiplier.is_finite() || payout_multiplier <= 0.0 {
        return Err(EvaluateError::InvalidMultiplier(payout_multiplier));
    }

    let sum = roll.sum();
    let category = category_for_sum(sum);

    let mut win_amount = 0.0;
    if category == RoundCategory::Big && wager.big > 0.0 {
        win_amount += wager.big * payout_multiplier;
    }
    if category == RoundCategory::Small && wager.small > 0.0 {
        win_amount += wager.small * payout_multiplier;
    }
    // Void never pays, even if something above went wrong.
    if category == RoundCategory::Void {
        win_amount = 0.0;
    }

    Ok(RoundResult {
        sum,
        category,
        win_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(faces: [u8; 3]) -> DiceRoll {
        DiceRoll::try_from(faces).unwrap()
    }

    #[test]
    fn test_big_win() {
        let wager = Wager {
            big: 50.0,
            small: 0.0,
        };
        let result = evaluate(&wager, roll([4, 4, 3]), 1.95).unwrap();
        assert_eq!(result.sum, 11);
        assert_eq!(result.category, RoundCategory::Big);
        assert!((result.win_amount - 97.5).abs() < 1e-9);
    }

    #[test]
    fn test_small_win() {
        let wager = Wager {
            big: 0.0,
            small: 100.0,
        };
        let result = evaluate(&wager, roll([2, 3, 4]), 1.95).unwrap();
        assert_eq!(result.sum, 9);
        assert_eq!(result.category, RoundCategory::Small);
        assert!((result.win_amount - 195.0).abs() < 1e-9);
    }

    #[test]
    fn test_losing_side_pays_nothing() {
        let wager = Wager {
            big: 0.0,
            small: 100.0,
        };
        let result = evaluate(&wager, roll([6, 6, 5]), 1.95).unwrap();
        assert_eq!(result.category, RoundCategory::Big);
        assert_eq!(result.win_amount, 0.0);
    }

    #[test]
    fn test_void_pays_nothing_regardless_of_stakes() {
        let wager = Wager {
            big: 100.0,
            small: 100.0,
        };
        let triple_ones = evaluate(&wager, roll([1, 1, 1]), 1.95).unwrap();
        assert_eq!(triple_ones.sum, 3);
        assert_eq!(triple_ones.category, RoundCategory::Void);
        assert_eq!(triple_ones.win_amount, 0.0);

        let triple_sixes = evaluate(&wager, roll([6, 6, 6]), 1.95).unwrap();
        assert_eq!(triple_sixes.sum, 18);
        assert_eq!(triple_sixes.category, RoundCategory::Void);
        assert_eq!(triple_sixes.win_amount, 0.0);
    }

    #[test]
    fn test_both_sides_staked_only_one_pays() {
        let wager = Wager {
            big: 30.0,
            small: 20.0,
        };
        let result = evaluate(&wager, roll([5, 5, 5]), 1.95).unwrap();
        assert_eq!(result.category, RoundCategory::Big);
        assert!((result.win_amount - 30.0 * 1.95).abs() < 1e-9);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(category_for_sum(3), RoundCategory::Void);
        assert_eq!(category_for_sum(4), RoundCategory::Small);
        assert_eq!(category_for_sum(10), RoundCategory::Small);
        assert_eq!(category_for_sum(11), RoundCategory::Big);
        assert_eq!(category_for_sum(17), RoundCategory::Big);
        assert_eq!(category_for_sum(18), RoundCategory::Void);
    }

    #[test]
    fn test_rejects_negative_wager() {
        let wager = Wager {
            big: -10.0,
            small: 0.0,
        };
        assert_eq!(
            evaluate(&wager, roll([2, 3, 4]), 1.95),
            Err(EvaluateError::InvalidWager(-10.0))
        );
    }

    #[test]
    fn test_rejects_non_finite_wager() {
        let wager = Wager {
            big: f64::NAN,
            small: 0.0,
        };
        assert!(matches!(
            evaluate(&wager, roll([2, 3, 4]), 1.95),
            Err(EvaluateError::InvalidWager(_))
        ));
    }

    #[test]
    fn test_rejects_bad_multiplier() {
        let wager = Wager::default();
        assert_eq!(
            evaluate(&wager, roll([2, 3, 4]), 0.0),
            Err(EvaluateError::InvalidMultiplier(0.0))
        );
        assert_eq!(
            evaluate(&wager, roll([2, 3, 4]), -1.0),
            Err(EvaluateError::InvalidMultiplier(-1.0))
        );
    }

    #[test]
    fn test_idempotent() {
        let wager = Wager {
            big: 50.0,
            small: 20.0,
        };
        let a = evaluate(&wager, roll([4, 4, 3]), 1.95).unwrap();
        let b = evaluate(&wager, roll([4, 4, 3]), 1.95).unwrap();
        assert_eq!(a, b);
    }
}
