//! Custom assertion helpers for analysis invariants

use core_kernel::{Money, Score};
use domain_analysis::AnalysisResult;

/// Asserts a score sits in the closed unit interval
pub fn assert_unit_interval(score: Score, label: &str) {
    assert!(
        (0.0..=1.0).contains(&score.value()),
        "{label} out of [0,1]: {}",
        score.value()
    );
}

/// Asserts an amount is non-negative
pub fn assert_non_negative(amount: Money, label: &str) {
    assert!(!amount.is_negative(), "{label} is negative: {amount}");
}

/// Asserts the cross-cutting invariants every analysis result must satisfy
pub fn assert_result_invariants(result: &AnalysisResult) {
    assert_unit_interval(result.fraud_score, "fraud score");
    assert_unit_interval(result.authenticity_score, "authenticity score");
    assert_unit_interval(result.confidence, "confidence");
    assert_non_negative(result.estimated_amount, "estimated amount");
}

/// Asserts the result kept one entry per input reference
pub fn assert_no_silent_drops(result: &AnalysisResult, documents: usize, images: usize) {
    assert_eq!(
        result.ocr_results.len(),
        documents,
        "document results dropped entries"
    );
    assert_eq!(
        result.image_analysis.len(),
        images,
        "image results dropped entries"
    );
}
