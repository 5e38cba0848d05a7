//! Analysis configuration
//!
//! The heuristic tables the pipeline depends on (claim-type base rates,
//! description keyword multipliers, bounding factors, decision thresholds)
//! live here rather than inline in the components, so the rule set can be
//! tuned and tested without touching the estimator or the recommendation
//! engine. Defaults encode the production rule set; overrides load from the
//! environment.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::Score;

use crate::evidence::ClaimType;

static DEFAULT_BASE_RATES: Lazy<HashMap<ClaimType, Decimal>> = Lazy::new(|| {
    HashMap::from([
        (ClaimType::Health, dec!(1000)),
        (ClaimType::Vehicle, dec!(2500)),
        (ClaimType::Travel, dec!(500)),
        (ClaimType::ProductWarranty, dec!(300)),
        (ClaimType::Pet, dec!(800)),
        (ClaimType::Agricultural, dec!(5000)),
    ])
});

/// Base payout rates per claim type, used when no evidence carries an amount
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRateTable {
    /// Rate per claim type
    pub rates: HashMap<ClaimType, Decimal>,
    /// Rate for claim types missing from the table
    pub default_rate: Decimal,
}

impl Default for BaseRateTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_BASE_RATES.clone(),
            default_rate: dec!(1000),
        }
    }
}

impl BaseRateTable {
    /// Returns the base rate for a claim type
    pub fn rate_for(&self, claim_type: ClaimType) -> Decimal {
        self.rates
            .get(&claim_type)
            .copied()
            .unwrap_or(self.default_rate)
    }
}

/// A description-keyword scaling rule
///
/// Rules are evaluated in table order and the first rule with any matching
/// keyword wins; multipliers are never combined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Rule name for logging
    pub name: String,
    /// Keywords that trigger this rule (matched case-insensitively)
    pub keywords: Vec<String>,
    /// Multiplier applied to the base rate
    pub multiplier: Decimal,
}

impl KeywordRule {
    /// Returns true when the description contains any of the keywords
    pub fn matches(&self, description: &str) -> bool {
        let description = description.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| description.contains(&keyword.to_lowercase()))
    }
}

fn default_keyword_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule {
            name: "urgency".to_string(),
            keywords: vec![
                "emergency".to_string(),
                "urgent".to_string(),
                "critical".to_string(),
            ],
            multiplier: dec!(1.5),
        },
        KeywordRule {
            name: "diminishing".to_string(),
            keywords: vec![
                "minor".to_string(),
                "small".to_string(),
                "slight".to_string(),
            ],
            multiplier: dec!(0.7),
        },
    ]
}

/// Bounds applied to the base estimate relative to the requested amount
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingPolicy {
    /// Base estimates above this multiple of the requested amount get capped
    pub overstatement_trigger: Decimal,
    /// Cap factor applied when the overstatement trigger fires
    pub overstatement_cap: Decimal,
    /// Base estimates below this multiple of the requested amount are
    /// returned unmodified, leaving the gap visible to reviewers
    pub understatement_trigger: Decimal,
    /// Discount applied to the requested amount when estimation fails
    pub fallback_discount: Decimal,
}

impl Default for BoundingPolicy {
    fn default() -> Self {
        Self {
            overstatement_trigger: dec!(1.5),
            overstatement_cap: dec!(1.2),
            understatement_trigger: dec!(0.5),
            fallback_discount: dec!(0.8),
        }
    }
}

/// Configuration for the amount estimator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Claim-type base rates
    pub base_rates: BaseRateTable,
    /// Ordered keyword scaling rules
    #[serde(default = "default_keyword_rules")]
    pub keyword_multipliers: Vec<KeywordRule>,
    /// Requested-amount bounding
    pub bounding: BoundingPolicy,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_rates: BaseRateTable::default(),
            keyword_multipliers: default_keyword_rules(),
            bounding: BoundingPolicy::default(),
        }
    }
}

impl EstimatorConfig {
    /// Returns the first keyword rule matching the description, if any
    pub fn matching_rule(&self, description: &str) -> Option<&KeywordRule> {
        self.keyword_multipliers
            .iter()
            .find(|rule| rule.matches(description))
    }
}

/// Thresholds for the three-way recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    /// Fraud score above this rejects outright
    pub reject_fraud_above: Score,
    /// Authenticity below this rejects outright
    pub reject_authenticity_below: Score,
    /// Approval requires fraud below this
    pub approve_fraud_below: Score,
    /// Approval requires confidence above this
    pub approve_confidence_above: Score,
    /// Approval requires authenticity above this
    pub approve_authenticity_above: Score,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            reject_fraud_above: Score::new(0.7),
            reject_authenticity_below: Score::new(0.3),
            approve_fraud_below: Score::new(0.3),
            approve_confidence_above: Score::new(0.8),
            approve_authenticity_above: Score::new(0.8),
        }
    }
}

/// Top-level analysis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Amount estimator tables
    pub estimator: EstimatorConfig,
    /// Recommendation thresholds
    pub thresholds: DecisionThresholds,
}

impl AnalysisConfig {
    /// Loads configuration from `ANALYSIS`-prefixed environment variables,
    /// falling back to the defaults for anything unset
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("ANALYSIS").separator("__"))
            .build()?
            .try_deserialize()
    }
}
