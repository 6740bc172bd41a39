use crate::error::{MlMathError, Result};
use rand::Rng;
use std::fmt;

pub const DEFAULT_TRIALS: usize = 10_000;

/// Bucket tallies and empirical frequencies of a two-dice simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct DiceRollEstimate {
    pub trials: usize,
    pub count_sum_7: usize,
    pub count_sum_2: usize,
    pub count_sum_gt_10: usize,
    /// Sums that fall in none of the reported buckets.
    pub count_other: usize,
}

impl DiceRollEstimate {
    pub fn p_sum_7(&self) -> f64 {
        self.count_sum_7 as f64 / self.trials as f64
    }

    pub fn p_sum_2(&self) -> f64 {
        self.count_sum_2 as f64 / self.trials as f64
    }

    pub fn p_sum_gt_10(&self) -> f64 {
        self.count_sum_gt_10 as f64 / self.trials as f64
    }
}

impl fmt::Display for DiceRollEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "P(Sum = 7): {:.4}", self.p_sum_7())?;
        writeln!(f, "P(Sum = 2): {:.4}", self.p_sum_2())?;
        write!(f, "P(Sum > 10): {:.4}", self.p_sum_gt_10())
    }
}

/// Rolls two fair dice `n` times and tallies the sums.
pub fn simulate_dice_rolls<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<DiceRollEstimate> {
    if n == 0 {
        return Err(MlMathError::InvalidArgument(
            "number of trials must be positive".to_string(),
        ));
    }

    let mut estimate = DiceRollEstimate {
        trials: n,
        count_sum_7: 0,
        count_sum_2: 0,
        count_sum_gt_10: 0,
        count_other: 0,
    };

    for _ in 0..n {
        let die1: u8 = rng.gen_range(1..=6);
        let die2: u8 = rng.gen_range(1..=6);

        match die1 + die2 {
            7 => estimate.count_sum_7 += 1,
            2 => estimate.count_sum_2 += 1,
            total if total > 10 => estimate.count_sum_gt_10 += 1,
            _ => estimate.count_other += 1,
        }
    }

    tracing::debug!(
        trials = n,
        sum_7 = estimate.count_sum_7,
        sum_2 = estimate.count_sum_2,
        sum_gt_10 = estimate.count_sum_gt_10,
        "dice simulation finished"
    );

    Ok(estimate)
}
