//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that respects the
//! collaborator contracts (scores already in range, non-negative amounts).

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money, Score};
use domain_analysis::{
    ClaimType, DamageAssessment, DocumentKind, DocumentResult, ImageResult, ItemOutcome,
};

/// Strategy for generating claim types
pub fn claim_type_strategy() -> impl Strategy<Value = ClaimType> {
    prop_oneof![
        Just(ClaimType::Health),
        Just(ClaimType::Vehicle),
        Just(ClaimType::Travel),
        Just(ClaimType::ProductWarranty),
        Just(ClaimType::Pet),
        Just(ClaimType::Agricultural),
        Just(ClaimType::Other),
    ]
}

/// Strategy for generating scores in the unit interval
pub fn score_strategy() -> impl Strategy<Value = Score> {
    (0.0f64..=1.0f64).prop_map(Score::new)
}

/// Strategy for generating optional scores
pub fn optional_score_strategy() -> impl Strategy<Value = Option<Score>> {
    proptest::option::of(score_strategy())
}

/// Strategy for generating non-negative USD amounts (two decimal places)
pub fn usd_amount_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_00i64).prop_map(|minor| Money::new(Decimal::new(minor, 2), Currency::USD))
}

/// Strategy for generating document kinds
pub fn document_kind_strategy() -> impl Strategy<Value = DocumentKind> {
    prop_oneof![
        Just(DocumentKind::MedicalBill),
        Just(DocumentKind::Invoice),
        Just(DocumentKind::Receipt),
        Just(DocumentKind::PoliceReport),
        Just(DocumentKind::RepairQuote),
        Just(DocumentKind::General),
    ]
}

/// Strategy for generating OCR results
pub fn document_result_strategy() -> impl Strategy<Value = DocumentResult> {
    (
        proptest::option::of("[a-z ]{1,40}"),
        optional_score_strategy(),
        document_kind_strategy(),
        proptest::option::of(usd_amount_strategy()),
    )
        .prop_map(|(text, confidence, document_kind, extracted_amount)| DocumentResult {
            text,
            confidence,
            document_kind,
            extracted_amount,
        })
}

/// Strategy for generating damage assessments
pub fn damage_assessment_strategy() -> impl Strategy<Value = DamageAssessment> {
    prop_oneof![
        Just(DamageAssessment::NoDamage),
        Just(DamageAssessment::MinorDamage),
        Just(DamageAssessment::ModerateDamage),
        Just(DamageAssessment::SevereDamage),
        Just(DamageAssessment::TotalLoss),
        Just(DamageAssessment::NoVisibleInjury),
        Just(DamageAssessment::VisibleInjury),
    ]
}

/// Strategy for generating image analysis results
pub fn image_result_strategy() -> impl Strategy<Value = ImageResult> {
    (
        score_strategy(),
        proptest::option::of(damage_assessment_strategy()),
        proptest::option::of(usd_amount_strategy()),
        optional_score_strategy(),
    )
        .prop_map(
            |(authenticity_score, damage_assessment, estimated_cost, confidence)| ImageResult {
                authenticity_score,
                damage_assessment,
                estimated_cost,
                confidence,
            },
        )
}

/// Strategy for generating per-item outcomes with occasional failures
pub fn document_outcome_strategy() -> impl Strategy<Value = ItemOutcome<DocumentResult>> {
    prop_oneof![
        4 => document_result_strategy().prop_map(ItemOutcome::Ok),
        1 => "[a-z ]{1,20}".prop_map(|message| ItemOutcome::error(message)),
    ]
}

/// Strategy for generating per-item image outcomes with occasional failures
pub fn image_outcome_strategy() -> impl Strategy<Value = ItemOutcome<ImageResult>> {
    prop_oneof![
        4 => image_result_strategy().prop_map(ItemOutcome::Ok),
        1 => "[a-z ]{1,20}".prop_map(|message| ItemOutcome::error(message)),
    ]
}
