//! Terminal recommendation
//!
//! A pure decision function from (fraud score, confidence, authenticity) to
//! one of three verdicts. Rejection is checked first: either a high fraud
//! score or a failed authenticity check alone is enough. Approval requires
//! all three signals to clear their thresholds. Everything else, boundary
//! values included, lands in review.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Score;

use crate::config::DecisionThresholds;

/// Terminal verdict of the analysis pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Pay the claim
    Approve,
    /// Deny the claim
    Reject,
    /// Route to a human adjuster
    Review,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Recommendation::Approve => "approve",
            Recommendation::Reject => "reject",
            Recommendation::Review => "review",
        };
        write!(f, "{name}")
    }
}

/// Maps fused signals to a recommendation
pub struct RecommendationEngine {
    thresholds: DecisionThresholds,
}

impl RecommendationEngine {
    /// Creates an engine with the given thresholds
    pub fn new(thresholds: DecisionThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the verdict for the given signals
    pub fn recommend(
        &self,
        fraud_score: Score,
        confidence: Score,
        authenticity: Score,
    ) -> Recommendation {
        let t = &self.thresholds;

        if fraud_score > t.reject_fraud_above || authenticity < t.reject_authenticity_below {
            return Recommendation::Reject;
        }

        if fraud_score < t.approve_fraud_below
            && confidence > t.approve_confidence_above
            && authenticity > t.approve_authenticity_above
        {
            return Recommendation::Approve;
        }

        Recommendation::Review
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(DecisionThresholds::default())
    }
}
