//! Claim analysis orchestration
//!
//! One-shot pipeline per claim: aggregate evidence, run fraud analysis on
//! the extracted text, fuse the signals into an amount, a confidence, and
//! a recommendation. Each invocation operates on its own evidence and
//! shares no mutable state, so independent claims can be analyzed
//! concurrently without locking.

use std::sync::Arc;
use tracing::info;

use core_kernel::{CollaboratorStatus, Score};

use crate::aggregator::EvidenceAggregator;
use crate::config::AnalysisConfig;
use crate::confidence::ConfidenceScorer;
use crate::error::AnalysisError;
use crate::estimator::AmountEstimator;
use crate::evidence::ClaimEvidence;
use crate::ports::{FraudPort, OcrPort, VisionPort};
use crate::recommendation::RecommendationEngine;
use crate::result::AnalysisResult;

/// Orchestrates the analysis pipeline over the three collaborators
pub struct ClaimAnalysisService {
    ocr: Arc<dyn OcrPort>,
    fraud: Arc<dyn FraudPort>,
    vision: Arc<dyn VisionPort>,
    aggregator: EvidenceAggregator,
    estimator: AmountEstimator,
    scorer: ConfidenceScorer,
    engine: RecommendationEngine,
}

impl ClaimAnalysisService {
    /// Creates a service over the given collaborators and rule tables
    pub fn new(
        ocr: Arc<dyn OcrPort>,
        fraud: Arc<dyn FraudPort>,
        vision: Arc<dyn VisionPort>,
        config: AnalysisConfig,
    ) -> Self {
        let aggregator = EvidenceAggregator::new(Arc::clone(&ocr), Arc::clone(&vision));
        Self {
            ocr,
            fraud,
            vision,
            aggregator,
            estimator: AmountEstimator::new(config.estimator),
            scorer: ConfidenceScorer::new(),
            engine: RecommendationEngine::new(config.thresholds),
        }
    }

    /// Analyzes one claim and returns the fused verdict
    ///
    /// Document and image aggregation run concurrently; fraud analysis runs
    /// only when documents were submitted (the fraud score stays 0 without
    /// text evidence), and authenticity is the per-image mean only when
    /// images were submitted (1.0 otherwise). Per-item collaborator
    /// failures are recorded in the result; a fraud-collaborator failure
    /// aborts the analysis and surfaces here.
    pub async fn analyze_claim(
        &self,
        evidence: &ClaimEvidence,
    ) -> Result<AnalysisResult, AnalysisError> {
        if evidence.requested_amount.is_negative() {
            return Err(AnalysisError::InvalidEvidence(format!(
                "requested amount must be non-negative, got {}",
                evidence.requested_amount
            )));
        }

        info!(
            claim_id = %evidence.claim_id,
            claim_type = %evidence.claim_type,
            documents = evidence.documents.len(),
            images = evidence.images.len(),
            "analyzing claim"
        );

        let (documents, images) = tokio::join!(
            self.aggregator.aggregate_documents(&evidence.documents),
            self.aggregator
                .aggregate_images(&evidence.images, evidence.claim_type),
        );

        let mut fraud_score = Score::ZERO;
        let mut detected_issues = Vec::new();
        if !documents.is_empty() {
            let text = documents.extracted_text();
            let assessment = self
                .fraud
                .analyze(&text, evidence.claim_type, evidence.requested_amount)
                .await?;
            fraud_score = assessment.fraud_score;
            detected_issues.extend(assessment.issues);
        }

        // Error markers count as fully authentic in the mean.
        let authenticity = if images.is_empty() {
            Score::ONE
        } else {
            let per_image = images
                .outcomes()
                .map(|outcome| outcome.ok().map(|i| i.authenticity_score).unwrap_or(Score::ONE));
            Score::mean(per_image).unwrap_or(Score::ONE)
        };

        let estimated_amount = self.estimator.estimate(evidence, &documents, &images);
        let confidence = self.scorer.score(&documents, &images, fraud_score, authenticity);
        let recommendation = self.engine.recommend(fraud_score, confidence, authenticity);

        info!(
            claim_id = %evidence.claim_id,
            fraud = %fraud_score,
            confidence = %confidence,
            recommendation = %recommendation,
            "claim analysis complete"
        );

        Ok(AnalysisResult {
            claim_id: evidence.claim_id,
            claim_type: evidence.claim_type,
            fraud_score,
            authenticity_score: authenticity,
            estimated_amount,
            confidence,
            detected_issues,
            ocr_results: documents,
            image_analysis: images,
            recommendation,
        })
    }

    /// Returns a readiness snapshot for each collaborator
    ///
    /// Callers that gate intake on collaborator readiness query this once
    /// at startup or per health probe; analysis itself does not gate on it.
    pub async fn collaborator_status(&self) -> Vec<CollaboratorStatus> {
        vec![
            self.ocr.health_check().await,
            self.fraud.health_check().await,
            self.vision.health_check().await,
        ]
    }
}
