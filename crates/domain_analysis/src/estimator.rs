//! Payout amount estimation
//!
//! Derives a single estimated payout from document amounts, image cost
//! estimates, and the claim-type base-rate table, then bounds the result
//! against the requested amount. Estimation never aborts an analysis: any
//! internal failure falls back to a discounted requested amount.

use tracing::{debug, warn};

use core_kernel::{Money, MoneyError};

use crate::config::EstimatorConfig;
use crate::evidence::{ClaimEvidence, DocumentResults, ImageResults};

/// Estimates the payout amount for a claim
pub struct AmountEstimator {
    config: EstimatorConfig,
}

impl AmountEstimator {
    /// Creates an estimator with the given rule tables
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Estimates the payout for a claim
    ///
    /// Base estimate priority: maximum document amount, then maximum image
    /// cost estimate, then the claim-type base rate scaled by the first
    /// matching description keyword rule. The base is then bounded against
    /// the requested amount. Falls back to a discounted requested amount if
    /// estimation fails internally.
    pub fn estimate(
        &self,
        evidence: &ClaimEvidence,
        documents: &DocumentResults,
        images: &ImageResults,
    ) -> Money {
        match self.try_estimate(evidence, documents, images) {
            Ok(amount) => amount,
            Err(error) => {
                warn!(
                    claim_id = %evidence.claim_id,
                    %error,
                    "amount estimation failed, using discounted requested amount"
                );
                evidence
                    .requested_amount
                    .scale(self.config.bounding.fallback_discount)
            }
        }
    }

    fn try_estimate(
        &self,
        evidence: &ClaimEvidence,
        documents: &DocumentResults,
        images: &ImageResults,
    ) -> Result<Money, MoneyError> {
        let requested = evidence.requested_amount;
        let currency = requested.currency();

        // Malformed entries (error markers, negative or foreign-currency
        // amounts) are skipped, not fatal.
        let document_amounts = documents
            .ok_values()
            .filter_map(|document| document.extracted_amount)
            .filter(|amount| amount.currency() == currency && !amount.is_negative());
        let image_costs = images
            .ok_values()
            .filter_map(|image| image.estimated_cost)
            .filter(|amount| amount.currency() == currency && !amount.is_negative());

        let base = if let Some(max) = Self::max_amount(document_amounts)? {
            debug!(claim_id = %evidence.claim_id, base = %max, "base estimate from document amounts");
            max
        } else if let Some(max) = Self::max_amount(image_costs)? {
            debug!(claim_id = %evidence.claim_id, base = %max, "base estimate from image cost estimates");
            max
        } else {
            self.base_rate_estimate(evidence)
        };

        // Base far above the request: evidence says more is owed, but the
        // stated estimate is capped relative to the request.
        let bounding = &self.config.bounding;
        if base.amount() > requested.scale(bounding.overstatement_trigger).amount() {
            return base.checked_min(&requested.scale(bounding.overstatement_cap));
        }

        // A base far below the request is returned unmodified; the gap
        // itself is the overstatement signal reviewers act on.
        Ok(base)
    }

    fn base_rate_estimate(&self, evidence: &ClaimEvidence) -> Money {
        let rate = self.config.base_rates.rate_for(evidence.claim_type);
        let mut base = Money::new(rate, evidence.requested_amount.currency());

        if let Some(rule) = self.config.matching_rule(&evidence.description) {
            debug!(
                claim_id = %evidence.claim_id,
                rule = %rule.name,
                multiplier = %rule.multiplier,
                "description keyword rule applied"
            );
            base = base.scale(rule.multiplier);
        }

        base
    }

    fn max_amount<I>(amounts: I) -> Result<Option<Money>, MoneyError>
    where
        I: Iterator<Item = Money>,
    {
        let mut max: Option<Money> = None;
        for amount in amounts {
            max = Some(match max {
                Some(current) => current.checked_max(&amount)?,
                None => amount,
            });
        }
        Ok(max)
    }
}
