//! Overall confidence scoring
//!
//! Fuses OCR confidence, image-analysis confidence, the inverted fraud
//! score, and the authenticity score into a single scalar. Entries that
//! carry no confidence reading (including per-item error markers) count as
//! neutral rather than being dropped, so a batch with failures scores lower
//! than a clean one.

use tracing::warn;

use core_kernel::Score;

use crate::evidence::{DocumentResults, ImageResults};

/// Computes the overall confidence for one analysis
#[derive(Debug, Default)]
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    /// Creates a scorer
    pub fn new() -> Self {
        Self
    }

    /// Returns the mean of the populated component scores
    ///
    /// Components: per-document OCR confidence mean (when documents exist),
    /// per-image confidence mean (when images exist), `1 - fraud_score`,
    /// and the authenticity score. The last two are always present. Falls
    /// back to neutral if no component could be computed.
    pub fn score(
        &self,
        documents: &DocumentResults,
        images: &ImageResults,
        fraud_score: Score,
        authenticity: Score,
    ) -> Score {
        let mut components = Vec::with_capacity(4);

        if !documents.is_empty() {
            let per_document = documents
                .outcomes()
                .map(|outcome| outcome.ok().and_then(|d| d.confidence).unwrap_or(Score::NEUTRAL));
            if let Some(mean) = Score::mean(per_document) {
                components.push(mean);
            }
        }

        if !images.is_empty() {
            let per_image = images
                .outcomes()
                .map(|outcome| outcome.ok().and_then(|i| i.confidence).unwrap_or(Score::NEUTRAL));
            if let Some(mean) = Score::mean(per_image) {
                components.push(mean);
            }
        }

        components.push(fraud_score.invert());
        components.push(authenticity);

        Score::mean(components).unwrap_or_else(|| {
            warn!("confidence scoring produced no components, using neutral default");
            Score::NEUTRAL
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::{DocumentKind, DocumentResult, EvidenceMap, ImageResult, ItemOutcome};
    use core_kernel::{DocumentRef, ImageRef};

    fn documents_with_confidences(confidences: &[Option<f64>]) -> DocumentResults {
        let mut map = EvidenceMap::new();
        for (i, confidence) in confidences.iter().enumerate() {
            map.insert(
                DocumentRef::new(format!("QmDoc{i}")),
                ItemOutcome::Ok(DocumentResult {
                    text: Some("scan".to_string()),
                    confidence: confidence.map(Score::new),
                    document_kind: DocumentKind::General,
                    extracted_amount: None,
                }),
            );
        }
        map
    }

    fn images_with_confidences(confidences: &[f64]) -> ImageResults {
        let mut map = EvidenceMap::new();
        for (i, confidence) in confidences.iter().enumerate() {
            map.insert(
                ImageRef::new(format!("QmImg{i}")),
                ItemOutcome::Ok(ImageResult {
                    authenticity_score: Score::new(0.9),
                    damage_assessment: None,
                    estimated_cost: None,
                    confidence: Some(Score::new(*confidence)),
                }),
            );
        }
        map
    }

    #[test]
    fn test_no_evidence_uses_fraud_and_authenticity_only() {
        let scorer = ConfidenceScorer::new();
        let confidence = scorer.score(
            &EvidenceMap::new(),
            &EvidenceMap::new(),
            Score::ZERO,
            Score::ONE,
        );
        assert_eq!(confidence, Score::ONE);
    }

    #[test]
    fn test_all_four_components_are_averaged() {
        let scorer = ConfidenceScorer::new();
        let documents = documents_with_confidences(&[Some(0.9), Some(0.7)]);
        let images = images_with_confidences(&[0.6]);

        // components: docs 0.8, images 0.6, 1 - 0.2 = 0.8, authenticity 1.0
        let confidence = scorer.score(&documents, &images, Score::new(0.2), Score::ONE);
        assert!((confidence.value() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_missing_confidence_defaults_to_neutral() {
        let scorer = ConfidenceScorer::new();
        let documents = documents_with_confidences(&[Some(0.9), None]);

        // docs component: (0.9 + 0.5) / 2 = 0.7
        let confidence = scorer.score(&documents, &EvidenceMap::new(), Score::ZERO, Score::ONE);
        // components: 0.7, 1.0, 1.0
        assert!((confidence.value() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_error_marker_counts_as_neutral() {
        let scorer = ConfidenceScorer::new();
        let mut documents = documents_with_confidences(&[Some(0.9), Some(0.9)]);
        documents.insert(DocumentRef::new("QmBad"), ItemOutcome::error("ocr failed"));

        // docs component: (0.9 + 0.9 + 0.5) / 3
        let expected_docs = (0.9 + 0.9 + 0.5) / 3.0;
        let confidence = scorer.score(&documents, &EvidenceMap::new(), Score::ZERO, Score::ONE);
        let expected = (expected_docs + 1.0 + 1.0) / 3.0;
        assert!((confidence.value() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_high_fraud_drags_confidence_down() {
        let scorer = ConfidenceScorer::new();
        let low_fraud = scorer.score(
            &EvidenceMap::new(),
            &EvidenceMap::new(),
            Score::new(0.1),
            Score::ONE,
        );
        let high_fraud = scorer.score(
            &EvidenceMap::new(),
            &EvidenceMap::new(),
            Score::new(0.9),
            Score::ONE,
        );
        assert!(high_fraud < low_fraud);
    }
}
