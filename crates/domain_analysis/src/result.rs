//! Final analysis result

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Money, Score};

use crate::evidence::{ClaimType, DocumentResults, ImageResults};
use crate::recommendation::Recommendation;

/// The aggregate outcome of one claim analysis
///
/// Constructed once per analysis and never mutated after return. Given
/// identical evidence and identical collaborator responses, repeated
/// analysis produces an identical result. Field names serialize in the
/// camelCase shape downstream consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Claim identifier
    pub claim_id: ClaimId,
    /// Claim domain
    pub claim_type: ClaimType,
    /// Fraud likelihood, 0 = no fraud signal
    pub fraud_score: Score,
    /// Image authenticity, 1.0 when no image evidence was submitted
    pub authenticity_score: Score,
    /// Estimated payout
    pub estimated_amount: Money,
    /// Overall analysis confidence
    pub confidence: Score,
    /// Issues flagged by the fraud collaborator
    pub detected_issues: Vec<String>,
    /// Per-document OCR outcomes, error markers included
    pub ocr_results: DocumentResults,
    /// Per-image analysis outcomes, error markers included
    pub image_analysis: ImageResults,
    /// Terminal verdict
    pub recommendation: Recommendation,
}
