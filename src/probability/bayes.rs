use super::conditional::{conditional_probability, JOINT_KEY, MARGINAL_KEY};
use crate::error::{MlMathError, Result};
use std::collections::HashMap;
use std::fmt;

/// Email counts used to infer `P(spam | contains "free")`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpamCounts {
    pub total_emails: u64,
    pub emails_with_free: u64,
    pub spam_emails: u64,
    pub spam_and_free: u64,
}

/// Every intermediate probability of one Bayes computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BayesBreakdown {
    pub p_spam: f64,
    pub p_free: f64,
    pub p_free_given_spam: f64,
    pub p_spam_given_free: f64,
}

impl SpamCounts {
    pub fn new(total_emails: u64, emails_with_free: u64, spam_emails: u64, spam_and_free: u64) -> Self {
        Self {
            total_emails,
            emails_with_free,
            spam_emails,
            spam_and_free,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_emails == 0 || self.spam_emails == 0 || self.emails_with_free == 0 {
            return Err(MlMathError::InvalidInput(
                "Counts must be greater than 0 to compute probabilities.".to_string(),
            ));
        }

        if self.spam_emails > self.total_emails
            || self.emails_with_free > self.total_emails
            || self.spam_and_free > self.spam_emails
        {
            return Err(MlMathError::InvalidInput("Invalid input relationships.".to_string()));
        }

        Ok(())
    }

    pub fn spam_given_free(&self) -> Result<BayesBreakdown> {
        self.validate()?;

        let total = self.total_emails as f64;
        let p_spam = self.spam_emails as f64 / total;
        let p_free = self.emails_with_free as f64 / total;

        let events = HashMap::from([
            (JOINT_KEY.to_string(), self.spam_and_free as f64),
            (MARGINAL_KEY.to_string(), self.spam_emails as f64),
        ]);
        let p_free_given_spam = conditional_probability(&events)?;

        Ok(BayesBreakdown {
            p_spam,
            p_free,
            p_free_given_spam,
            p_spam_given_free: p_free_given_spam * p_spam / p_free,
        })
    }
}

impl fmt::Display for BayesBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(Spam | Free): {:.4}", self.p_spam_given_free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spam_given_free() {
        let breakdown = SpamCounts::new(100, 40, 30, 24).spam_given_free().unwrap();

        assert!((breakdown.p_spam - 0.3).abs() < 1e-12);
        assert!((breakdown.p_free - 0.4).abs() < 1e-12);
        assert!((breakdown.p_free_given_spam - 0.8).abs() < 1e-12);
        assert!((breakdown.p_spam_given_free - 0.6).abs() < 1e-12);
        assert_eq!(breakdown.to_string(), "P(Spam | Free): 0.6000");
    }

    #[test]
    fn test_zero_counts_rejected() {
        for counts in [
            SpamCounts::new(0, 0, 0, 0),
            SpamCounts::new(10, 0, 5, 0),
            SpamCounts::new(10, 5, 0, 0),
        ] {
            let err = counts.spam_given_free().unwrap_err();
            assert!(err.to_string().contains("greater than 0"));
        }
    }

    #[test]
    fn test_inconsistent_counts_rejected() {
        for counts in [
            SpamCounts::new(10, 5, 11, 0),
            SpamCounts::new(10, 11, 5, 0),
            SpamCounts::new(10, 5, 5, 6),
        ] {
            let err = counts.validate().unwrap_err();
            assert!(matches!(err, MlMathError::InvalidInput(_)));
            assert!(err.to_string().contains("relationships"));
        }
    }

    #[test]
    fn test_no_spam_with_free() {
        let breakdown = SpamCounts::new(50, 10, 20, 0).spam_given_free().unwrap();
        assert_eq!(breakdown.p_spam_given_free, 0.0);
    }
}
