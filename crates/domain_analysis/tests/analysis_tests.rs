//! End-to-end tests for the claim analysis pipeline

use rust_decimal_macros::dec;

use core_kernel::{Currency, DocumentRef, ImageRef, Money, Score};
use domain_analysis::ports::mock::{MockFraudPort, MockOcrPort, MockVisionPort};
use domain_analysis::{
    AnalysisError, ClaimType, FraudAssessment, Recommendation,
};
use test_utils::{
    assert_no_silent_drops, assert_result_invariants, AnalysisHarness, ClaimEvidenceBuilder,
    DocumentResultBuilder, ImageResultBuilder,
};

// ============================================================================
// Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    #[tokio::test]
    async fn test_vehicle_claim_without_evidence_approves_at_base_rate() {
        let service = AnalysisHarness::new().build();
        let evidence = ClaimEvidenceBuilder::new()
            .claim_type(ClaimType::Vehicle)
            .requested_amount(dec!(2000))
            .description("rear bumper damage")
            .build();

        let result = service.analyze_claim(&evidence).await.unwrap();

        // base rate 2500 is inside [0.5x, 1.5x] of the 2000 request
        assert_eq!(result.estimated_amount.amount(), dec!(2500));
        assert_eq!(result.fraud_score, Score::ZERO);
        assert_eq!(result.authenticity_score, Score::ONE);
        // only the inverted fraud score and authenticity contribute
        assert_eq!(result.confidence, Score::ONE);
        assert_eq!(result.recommendation, Recommendation::Approve);
        assert_result_invariants(&result);
    }

    #[tokio::test]
    async fn test_emergency_health_claim_scales_base_rate() {
        let service = AnalysisHarness::new().build();
        let evidence = ClaimEvidenceBuilder::new()
            .claim_type(ClaimType::Health)
            .requested_amount(dec!(2000))
            .description("emergency surgery needed")
            .build();

        let result = service.analyze_claim(&evidence).await.unwrap();
        assert_eq!(result.estimated_amount.amount(), dec!(1500));
    }

    #[tokio::test]
    async fn test_document_amount_at_bounding_boundary_is_not_capped() {
        let ocr = MockOcrPort::new().with_result(
            "QmBill",
            DocumentResultBuilder::new()
                .text("invoice total 1500")
                .extracted_amount(dec!(1500))
                .build(),
        );
        let service = AnalysisHarness::new().ocr(ocr).build();
        let evidence = ClaimEvidenceBuilder::new()
            .claim_type(ClaimType::Health)
            .requested_amount(dec!(1000))
            .document("QmBill")
            .build();

        let result = service.analyze_claim(&evidence).await.unwrap();

        // 1500 is exactly 1.5x the request; the cap requires strictly greater
        assert_eq!(result.estimated_amount.amount(), dec!(1500));
    }

    #[tokio::test]
    async fn test_one_document_failure_keeps_batch_and_lowers_confidence() {
        let ocr = MockOcrPort::new()
            .with_result("QmA", DocumentResultBuilder::new().confidence(0.9).build())
            .with_failure("QmB", "ocr engine crashed")
            .with_result("QmC", DocumentResultBuilder::new().confidence(0.9).build());
        let service = AnalysisHarness::new().ocr(ocr).build();
        let evidence = ClaimEvidenceBuilder::new()
            .requested_amount(dec!(1000))
            .document("QmA")
            .document("QmB")
            .document("QmC")
            .build();

        let result = service.analyze_claim(&evidence).await.unwrap();

        assert_no_silent_drops(&result, 3, 0);
        assert_eq!(result.ocr_results.error_count(), 1);
        let marker = result.ocr_results.get(&DocumentRef::new("QmB")).unwrap();
        assert!(marker.error_message().unwrap().contains("ocr engine crashed"));

        // document component: (0.9 + 0.5 + 0.9) / 3, then averaged with the
        // fraud and authenticity terms (both 1.0)
        let expected = ((0.9 + 0.5 + 0.9) / 3.0 + 1.0 + 1.0) / 3.0;
        assert!((result.confidence.value() - expected).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_image_costs_drive_estimate_when_documents_lack_amounts() {
        let ocr = MockOcrPort::new().with_result(
            "QmDoc",
            DocumentResultBuilder::new().text("no totals here").build(),
        );
        let vision = MockVisionPort::new().with_result(
            "QmImg",
            ImageResultBuilder::new().estimated_cost(dec!(1900)).build(),
        );
        let service = AnalysisHarness::new().ocr(ocr).vision(vision).build();
        let evidence = ClaimEvidenceBuilder::new()
            .claim_type(ClaimType::Vehicle)
            .requested_amount(dec!(2000))
            .document("QmDoc")
            .image("QmImg")
            .build();

        let result = service.analyze_claim(&evidence).await.unwrap();
        assert_eq!(result.estimated_amount.amount(), dec!(1900));
    }
}

// ============================================================================
// Fraud Stage Tests
// ============================================================================

mod fraud_tests {
    use super::*;

    #[tokio::test]
    async fn test_fraud_analysis_receives_concatenated_text() {
        let ocr = MockOcrPort::new()
            .with_result("QmA", DocumentResultBuilder::new().text("first page").build())
            .with_result("QmB", DocumentResultBuilder::new().no_text().build())
            .with_result("QmC", DocumentResultBuilder::new().text("last page").build());
        let (service, fraud) = AnalysisHarness::new().ocr(ocr).build_with_fraud_handle();
        let evidence = ClaimEvidenceBuilder::new()
            .document("QmA")
            .document("QmB")
            .document("QmC")
            .build();

        service.analyze_claim(&evidence).await.unwrap();

        assert_eq!(
            fraud.analyzed_text().await.as_deref(),
            Some("first page last page")
        );
    }

    #[tokio::test]
    async fn test_fraud_analysis_is_skipped_without_documents() {
        let (service, fraud) = AnalysisHarness::new().build_with_fraud_handle();
        let evidence = ClaimEvidenceBuilder::new().build();

        let result = service.analyze_claim(&evidence).await.unwrap();

        assert_eq!(result.fraud_score, Score::ZERO);
        assert!(fraud.analyzed_text().await.is_none());
    }

    #[tokio::test]
    async fn test_fraud_issues_surface_in_detected_issues() {
        let ocr = MockOcrPort::new()
            .with_result("QmDoc", DocumentResultBuilder::new().build());
        let fraud = MockFraudPort::new().with_assessment(FraudAssessment {
            fraud_score: Score::new(0.45),
            issues: vec!["amount inconsistent with description".to_string()],
        });
        let service = AnalysisHarness::new().ocr(ocr).fraud(fraud).build();
        let evidence = ClaimEvidenceBuilder::new().document("QmDoc").build();

        let result = service.analyze_claim(&evidence).await.unwrap();

        assert_eq!(result.fraud_score, Score::new(0.45));
        assert_eq!(
            result.detected_issues,
            vec!["amount inconsistent with description".to_string()]
        );
        assert_eq!(result.recommendation, Recommendation::Review);
    }

    #[tokio::test]
    async fn test_fraud_collaborator_failure_aborts_analysis() {
        let ocr = MockOcrPort::new()
            .with_result("QmDoc", DocumentResultBuilder::new().build());
        let fraud = MockFraudPort::new().with_failure("model not loaded");
        let service = AnalysisHarness::new().ocr(ocr).fraud(fraud).build();
        let evidence = ClaimEvidenceBuilder::new().document("QmDoc").build();

        let error = service.analyze_claim(&evidence).await.unwrap_err();
        assert!(matches!(error, AnalysisError::Collaborator(_)));
    }
}

// ============================================================================
// Authenticity and Recommendation Tests
// ============================================================================

mod verdict_tests {
    use super::*;

    #[tokio::test]
    async fn test_authenticity_is_mean_of_image_scores() {
        let vision = MockVisionPort::new()
            .with_result("QmA", ImageResultBuilder::new().authenticity(0.9).build())
            .with_result("QmB", ImageResultBuilder::new().authenticity(0.7).build());
        let service = AnalysisHarness::new().vision(vision).build();
        let evidence = ClaimEvidenceBuilder::new()
            .claim_type(ClaimType::Vehicle)
            .requested_amount(dec!(2000))
            .image("QmA")
            .image("QmB")
            .build();

        let result = service.analyze_claim(&evidence).await.unwrap();
        assert!((result.authenticity_score.value() - 0.8).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_failed_image_counts_as_authentic_in_mean() {
        let vision = MockVisionPort::new()
            .with_result("QmA", ImageResultBuilder::new().authenticity(0.6).build())
            .with_failure("QmB", "decoder error");
        let service = AnalysisHarness::new().vision(vision).build();
        let evidence = ClaimEvidenceBuilder::new()
            .claim_type(ClaimType::Vehicle)
            .requested_amount(dec!(2000))
            .image("QmA")
            .image("QmB")
            .build();

        let result = service.analyze_claim(&evidence).await.unwrap();

        assert_no_silent_drops(&result, 0, 2);
        assert!((result.authenticity_score.value() - 0.8).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_manipulated_images_force_rejection() {
        let vision = MockVisionPort::new()
            .with_result("QmA", ImageResultBuilder::new().authenticity(0.1).build())
            .with_result("QmB", ImageResultBuilder::new().authenticity(0.2).build());
        let service = AnalysisHarness::new().vision(vision).build();
        let evidence = ClaimEvidenceBuilder::new()
            .claim_type(ClaimType::Vehicle)
            .requested_amount(dec!(2000))
            .image("QmA")
            .image("QmB")
            .build();

        let result = service.analyze_claim(&evidence).await.unwrap();

        // authenticity 0.15 trips the rejection clause despite zero fraud
        assert_eq!(result.recommendation, Recommendation::Reject);
        assert_result_invariants(&result);
    }

    #[tokio::test]
    async fn test_high_fraud_rejects_despite_authentic_images() {
        let ocr = MockOcrPort::new()
            .with_result("QmDoc", DocumentResultBuilder::new().build());
        let fraud = MockFraudPort::new().with_assessment(FraudAssessment {
            fraud_score: Score::new(0.8),
            issues: vec!["duplicate invoice".to_string()],
        });
        let vision = MockVisionPort::new()
            .with_result("QmImg", ImageResultBuilder::new().authenticity(0.9).build());
        let service = AnalysisHarness::new().ocr(ocr).fraud(fraud).vision(vision).build();
        let evidence = ClaimEvidenceBuilder::new()
            .document("QmDoc")
            .image("QmImg")
            .build();

        let result = service.analyze_claim(&evidence).await.unwrap();
        assert_eq!(result.recommendation, Recommendation::Reject);
    }
}

// ============================================================================
// Orchestrator Contract Tests
// ============================================================================

mod orchestrator_tests {
    use super::*;

    #[tokio::test]
    async fn test_repeated_analysis_is_identical() {
        let ocr = MockOcrPort::new()
            .with_result(
                "QmBill",
                DocumentResultBuilder::new()
                    .text("invoice total 1500")
                    .extracted_amount(dec!(1500))
                    .build(),
            )
            .with_failure("QmBad", "unreadable");
        let vision = MockVisionPort::new()
            .with_result("QmImg", ImageResultBuilder::new().authenticity(0.85).build());
        let service = AnalysisHarness::new().ocr(ocr).vision(vision).build();
        let evidence = ClaimEvidenceBuilder::new()
            .requested_amount(dec!(1200))
            .document("QmBill")
            .document("QmBad")
            .image("QmImg")
            .build();

        let first = service.analyze_claim(&evidence).await.unwrap();
        let second = service.analyze_claim(&evidence).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_negative_requested_amount_is_rejected() {
        let service = AnalysisHarness::new().build();
        let mut evidence = ClaimEvidenceBuilder::new().build();
        evidence.requested_amount = Money::new(dec!(-500), Currency::USD);

        let error = service.analyze_claim(&evidence).await.unwrap_err();
        assert!(matches!(error, AnalysisError::InvalidEvidence(_)));
    }

    #[tokio::test]
    async fn test_collaborator_status_reports_all_three() {
        let service = AnalysisHarness::new().build();

        let statuses = service.collaborator_status().await;

        let ids: Vec<&str> = statuses
            .iter()
            .map(|status| status.collaborator_id.as_str())
            .collect();
        assert_eq!(ids, vec!["ocr", "fraud", "vision"]);
        assert!(statuses.iter().all(|status| status.is_ready()));
    }

    #[tokio::test]
    async fn test_image_failure_keys_are_preserved_in_result() {
        let vision = MockVisionPort::new()
            .with_result("QmA", ImageResultBuilder::new().build())
            .with_failure("QmB", "decoder error")
            .with_result("QmC", ImageResultBuilder::new().build());
        let service = AnalysisHarness::new().vision(vision).build();
        let evidence = ClaimEvidenceBuilder::new()
            .claim_type(ClaimType::Travel)
            .image("QmA")
            .image("QmB")
            .image("QmC")
            .build();

        let result = service.analyze_claim(&evidence).await.unwrap();

        let keys: Vec<&str> = result
            .image_analysis
            .iter()
            .map(|(reference, _)| reference.as_str())
            .collect();
        assert_eq!(keys, vec!["QmA", "QmB", "QmC"]);
        assert!(result
            .image_analysis
            .get(&ImageRef::new("QmB"))
            .unwrap()
            .is_error());
    }
}
