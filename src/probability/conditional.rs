use crate::error::{MlMathError, Result};
use std::collections::HashMap;

pub const JOINT_KEY: &str = "A_and_B";
pub const MARGINAL_KEY: &str = "B";

/// `P(A|B) = P(A and B) / P(B)`, reading both terms from `events`.
pub fn conditional_probability(events: &HashMap<String, f64>) -> Result<f64> {
    let (p_ab, p_b) = match (events.get(JOINT_KEY), events.get(MARGINAL_KEY)) {
        (Some(&p_ab), Some(&p_b)) => (p_ab, p_b),
        _ => {
            return Err(MlMathError::InvalidInput(format!(
                "missing keys in events, required: '{JOINT_KEY}' and '{MARGINAL_KEY}'"
            )));
        }
    };

    if p_b == 0.0 {
        return Err(MlMathError::DivisionByZero("P(B) cannot be zero".to_string()));
    }

    Ok(p_ab / p_b)
}
