//! Pre-built test data for common entities

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, Currency, Money, Score};
use domain_analysis::{
    ClaimEvidence, ClaimType, DamageAssessment, DocumentKind, DocumentResult, ImageResult,
};

/// Common monetary values
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard requested amount for scenario tests
    pub fn requested(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    pub fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }
}

/// Pre-built claim evidence
pub struct EvidenceFixtures;

impl EvidenceFixtures {
    /// A vehicle claim with no supporting evidence
    pub fn bare_vehicle_claim() -> ClaimEvidence {
        ClaimEvidence {
            claim_id: ClaimId::new_v7(),
            claim_type: ClaimType::Vehicle,
            requested_amount: MoneyFixtures::requested(dec!(2000)),
            description: "rear bumper damage after parking lot collision".to_string(),
            documents: vec![],
            images: vec![],
        }
    }

    /// A health claim with an urgency keyword in the description
    pub fn emergency_health_claim() -> ClaimEvidence {
        ClaimEvidence {
            claim_id: ClaimId::new_v7(),
            claim_type: ClaimType::Health,
            requested_amount: MoneyFixtures::requested(dec!(2000)),
            description: "emergency surgery needed".to_string(),
            documents: vec![],
            images: vec![],
        }
    }
}

/// Pre-built OCR results
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// A clean medical bill with an extracted amount
    pub fn medical_bill(amount: Decimal) -> DocumentResult {
        DocumentResult {
            text: Some(format!("Hospital invoice, total due {amount}")),
            confidence: Some(Score::new(0.95)),
            document_kind: DocumentKind::MedicalBill,
            extracted_amount: Some(MoneyFixtures::usd(amount)),
        }
    }

    /// A receipt that produced text but no amount
    pub fn receipt_without_amount() -> DocumentResult {
        DocumentResult {
            text: Some("Pharmacy receipt, illegible totals".to_string()),
            confidence: Some(Score::new(0.6)),
            document_kind: DocumentKind::Receipt,
            extracted_amount: None,
        }
    }
}

/// Pre-built image analysis results
pub struct ImageFixtures;

impl ImageFixtures {
    /// An authentic damage photo with a cost estimate
    pub fn damage_photo(cost: Decimal) -> ImageResult {
        ImageResult {
            authenticity_score: Score::new(0.92),
            damage_assessment: Some(DamageAssessment::ModerateDamage),
            estimated_cost: Some(MoneyFixtures::usd(cost)),
            confidence: Some(Score::new(0.88)),
        }
    }

    /// An image the authenticity model flagged as manipulated
    pub fn manipulated_photo() -> ImageResult {
        ImageResult {
            authenticity_score: Score::new(0.15),
            damage_assessment: Some(DamageAssessment::SevereDamage),
            estimated_cost: None,
            confidence: Some(Score::new(0.9)),
        }
    }
}
