//! Unit-interval scores
//!
//! Fraud likelihood, image authenticity, and analysis confidence are all
//! scalars in [0, 1]. The `Score` newtype clamps on construction so those
//! invariants hold everywhere downstream, the same way `Money` normalizes
//! its decimal precision on construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar in the closed interval [0, 1]
///
/// Construction clamps out-of-range values; a NaN input collapses to 0.
/// Collaborators are contractually required to stay in range, so clamping
/// only matters at the trust boundary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Zero signal (no fraud detected, no confidence)
    pub const ZERO: Score = Score(0.0);

    /// Full signal (fully authentic, complete confidence)
    pub const ONE: Score = Score(1.0);

    /// The neutral fallback used when a scoring stage fails
    pub const NEUTRAL: Score = Score(0.5);

    /// Creates a score, clamping into [0, 1]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Score(0.0);
        }
        Score(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns `1 - self`, e.g. turning a fraud score into a trust term
    pub fn invert(&self) -> Score {
        Score(1.0 - self.0)
    }

    /// Arithmetic mean of the given scores, `None` for an empty set
    pub fn mean<I>(scores: I) -> Option<Score>
    where
        I: IntoIterator<Item = Score>,
    {
        let mut sum = 0.0;
        let mut count = 0usize;
        for score in scores {
            sum += score.0;
            count += 1;
        }
        if count == 0 {
            None
        } else {
            Some(Score::new(sum / count as f64))
        }
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Score::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> f64 {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps() {
        assert_eq!(Score::new(1.7).value(), 1.0);
        assert_eq!(Score::new(-0.3).value(), 0.0);
        assert_eq!(Score::new(0.42).value(), 0.42);
    }

    #[test]
    fn test_score_nan_collapses_to_zero() {
        assert_eq!(Score::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn test_score_invert() {
        assert_eq!(Score::new(0.3).invert().value(), 0.7);
        assert_eq!(Score::ONE.invert(), Score::ZERO);
    }

    #[test]
    fn test_score_mean() {
        let mean = Score::mean([Score::new(0.2), Score::new(0.8)]).unwrap();
        assert_eq!(mean.value(), 0.5);

        assert!(Score::mean(std::iter::empty()).is_none());
    }

    #[test]
    fn test_score_serde_round_trip() {
        let score = Score::new(0.75);
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(json, "0.75");

        let back: Score = serde_json::from_str("1.25").unwrap();
        assert_eq!(back, Score::ONE);
    }
}
