//! Probability estimators built on the shared helpers.
//!
//! This module provides:
//! - `conditional_probability`: `P(A|B)` from joint and marginal probabilities
//! - `SpamCounts`: Bayes' theorem applied to spam/"free" email counts
//! - `simulate_dice_rolls`: Monte Carlo estimate of two-dice sum frequencies
//!
//! # Examples
//!
//! ## Conditional probability
//! ```rust
//! use mlmath::conditional_probability;
//! use std::collections::HashMap;
//!
//! let events = HashMap::from([("A_and_B".to_string(), 0.12), ("B".to_string(), 0.3)]);
//! let p = conditional_probability(&events).unwrap();
//! assert!((p - 0.4).abs() < 1e-12);
//! ```
//!
//! ## Bayes' theorem
//! ```rust
//! use mlmath::SpamCounts;
//!
//! let counts = SpamCounts::new(100, 40, 30, 24);
//! let breakdown = counts.spam_given_free().unwrap();
//! assert!((breakdown.p_spam_given_free - 0.6).abs() < 1e-12);
//! ```
//!
//! ## Dice simulation
//! ```rust
//! use mlmath::simulate_dice_rolls;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let estimate = simulate_dice_rolls(1000, &mut rng).unwrap();
//! println!("{}", estimate);
//! ```

mod bayes;
mod conditional;
mod dice;

pub use bayes::{BayesBreakdown, SpamCounts};
pub use conditional::{conditional_probability, JOINT_KEY, MARGINAL_KEY};
pub use dice::{simulate_dice_rolls, DiceRollEstimate, DEFAULT_TRIALS};
