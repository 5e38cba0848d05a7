//! Claim Analysis Domain
//!
//! This crate fuses heterogeneous claim evidence into a single adjudication
//! decision. Upstream collaborators (OCR, fraud detection, image analysis)
//! produce per-item results; the components here aggregate them, derive an
//! estimated payout and a confidence score, and map the combined signals to
//! a terminal recommendation.
//!
//! # Pipeline
//!
//! ```text
//! evidence -> aggregate documents/images -> fraud analysis
//!          -> estimate amount -> score confidence -> recommend
//! ```
//!
//! Data flows strictly downstream; each analysis is one shot and shares no
//! state with concurrent analyses.

pub mod evidence;
pub mod ports;
pub mod config;
pub mod aggregator;
pub mod estimator;
pub mod confidence;
pub mod recommendation;
pub mod result;
pub mod service;
pub mod error;

pub use evidence::{
    ClaimEvidence, ClaimType, DocumentResult, ImageResult,
    DocumentKind, DamageAssessment, ItemOutcome, EvidenceMap,
    DocumentResults, ImageResults,
};
pub use ports::{OcrPort, FraudPort, VisionPort, FraudAssessment};
pub use config::{
    AnalysisConfig, EstimatorConfig, BaseRateTable, KeywordRule,
    BoundingPolicy, DecisionThresholds,
};
pub use aggregator::EvidenceAggregator;
pub use estimator::AmountEstimator;
pub use confidence::ConfidenceScorer;
pub use recommendation::{Recommendation, RecommendationEngine};
pub use result::AnalysisResult;
pub use service::ClaimAnalysisService;
pub use error::AnalysisError;
