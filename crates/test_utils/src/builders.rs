//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests only spell out the fields they care about.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Currency, DocumentRef, ImageRef, Money, Score};
use domain_analysis::{
    ClaimEvidence, ClaimType, DamageAssessment, DocumentKind, DocumentResult, ImageResult,
};

/// Builder for claim evidence
pub struct ClaimEvidenceBuilder {
    claim_id: ClaimId,
    claim_type: ClaimType,
    requested_amount: Money,
    description: String,
    documents: Vec<DocumentRef>,
    images: Vec<ImageRef>,
}

impl Default for ClaimEvidenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimEvidenceBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            claim_id: ClaimId::new_v7(),
            claim_type: ClaimType::Health,
            requested_amount: Money::new(dec!(1000), Currency::USD),
            description: "routine claim".to_string(),
            documents: vec![],
            images: vec![],
        }
    }

    pub fn claim_id(mut self, claim_id: ClaimId) -> Self {
        self.claim_id = claim_id;
        self
    }

    pub fn claim_type(mut self, claim_type: ClaimType) -> Self {
        self.claim_type = claim_type;
        self
    }

    pub fn requested_amount(mut self, amount: Decimal) -> Self {
        self.requested_amount = Money::new(amount, Currency::USD);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn document(mut self, reference: impl Into<DocumentRef>) -> Self {
        self.documents.push(reference.into());
        self
    }

    pub fn image(mut self, reference: impl Into<ImageRef>) -> Self {
        self.images.push(reference.into());
        self
    }

    pub fn build(self) -> ClaimEvidence {
        ClaimEvidence {
            claim_id: self.claim_id,
            claim_type: self.claim_type,
            requested_amount: self.requested_amount,
            description: self.description,
            documents: self.documents,
            images: self.images,
        }
    }
}

/// Builder for OCR results
pub struct DocumentResultBuilder {
    text: Option<String>,
    confidence: Option<Score>,
    document_kind: DocumentKind,
    extracted_amount: Option<Money>,
}

impl Default for DocumentResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentResultBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            text: Some("extracted document text".to_string()),
            confidence: Some(Score::new(0.95)),
            document_kind: DocumentKind::General,
            extracted_amount: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn no_text(mut self) -> Self {
        self.text = None;
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(Score::new(confidence));
        self
    }

    pub fn no_confidence(mut self) -> Self {
        self.confidence = None;
        self
    }

    pub fn document_kind(mut self, kind: DocumentKind) -> Self {
        self.document_kind = kind;
        self
    }

    pub fn extracted_amount(mut self, amount: Decimal) -> Self {
        self.extracted_amount = Some(Money::new(amount, Currency::USD));
        self
    }

    pub fn build(self) -> DocumentResult {
        DocumentResult {
            text: self.text,
            confidence: self.confidence,
            document_kind: self.document_kind,
            extracted_amount: self.extracted_amount,
        }
    }
}

/// Builder for image analysis results
pub struct ImageResultBuilder {
    authenticity_score: Score,
    damage_assessment: Option<DamageAssessment>,
    estimated_cost: Option<Money>,
    confidence: Option<Score>,
}

impl Default for ImageResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageResultBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            authenticity_score: Score::new(0.92),
            damage_assessment: None,
            estimated_cost: None,
            confidence: Some(Score::new(0.88)),
        }
    }

    pub fn authenticity(mut self, score: f64) -> Self {
        self.authenticity_score = Score::new(score);
        self
    }

    pub fn damage_assessment(mut self, assessment: DamageAssessment) -> Self {
        self.damage_assessment = Some(assessment);
        self
    }

    pub fn estimated_cost(mut self, cost: Decimal) -> Self {
        self.estimated_cost = Some(Money::new(cost, Currency::USD));
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(Score::new(confidence));
        self
    }

    pub fn no_confidence(mut self) -> Self {
        self.confidence = None;
        self
    }

    pub fn build(self) -> ImageResult {
        ImageResult {
            authenticity_score: self.authenticity_score,
            damage_assessment: self.damage_assessment,
            estimated_cost: self.estimated_cost,
            confidence: self.confidence,
        }
    }
}
