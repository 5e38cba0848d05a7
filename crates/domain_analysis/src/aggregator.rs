//! Evidence aggregation
//!
//! Collects per-item collaborator results into ordered mappings. A failure
//! on one reference is caught and recorded as an error marker under that
//! reference's key; partial results are always returned and no key is ever
//! dropped.

use std::sync::Arc;
use tracing::{debug, warn};

use core_kernel::{DocumentRef, ImageRef};

use crate::evidence::{
    ClaimType, DamageAssessment, DocumentResults, EvidenceMap, ImageResults, ItemOutcome,
};
use crate::ports::{OcrPort, VisionPort};

impl DocumentResults {
    /// Space-joins the extracted text of every successful entry, in
    /// insertion order, for downstream fraud analysis
    ///
    /// Entries without text (and error markers) contribute nothing.
    pub fn extracted_text(&self) -> String {
        self.ok_values()
            .filter_map(|document| document.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Aggregates per-item collaborator results for one claim
pub struct EvidenceAggregator {
    ocr: Arc<dyn OcrPort>,
    vision: Arc<dyn VisionPort>,
}

impl EvidenceAggregator {
    /// Creates an aggregator over the given collaborators
    pub fn new(ocr: Arc<dyn OcrPort>, vision: Arc<dyn VisionPort>) -> Self {
        Self { ocr, vision }
    }

    /// Runs OCR over every document reference
    ///
    /// The returned mapping carries one entry per input reference, error
    /// markers included, in input order.
    pub async fn aggregate_documents(&self, documents: &[DocumentRef]) -> DocumentResults {
        let mut results = EvidenceMap::new();
        for reference in documents {
            let outcome = match self.ocr.process(reference).await {
                Ok(result) => ItemOutcome::Ok(result),
                Err(error) => {
                    warn!(document = %reference, %error, "document processing failed");
                    ItemOutcome::error(error.to_string())
                }
            };
            results.insert(reference.clone(), outcome);
        }
        debug!(
            total = results.len(),
            failed = results.error_count(),
            "document aggregation complete"
        );
        results
    }

    /// Runs image analysis over every image reference
    ///
    /// When the collaborator omits a damage assessment, a claim-type
    /// default is filled in (damage label for vehicle claims, injury label
    /// otherwise).
    pub async fn aggregate_images(
        &self,
        images: &[ImageRef],
        claim_type: ClaimType,
    ) -> ImageResults {
        let mut results = EvidenceMap::new();
        for reference in images {
            let outcome = match self.vision.analyze(reference, claim_type).await {
                Ok(mut result) => {
                    result
                        .damage_assessment
                        .get_or_insert(DamageAssessment::default_for(claim_type));
                    ItemOutcome::Ok(result)
                }
                Err(error) => {
                    warn!(image = %reference, %error, "image analysis failed");
                    ItemOutcome::error(error.to_string())
                }
            };
            results.insert(reference.clone(), outcome);
        }
        debug!(
            total = results.len(),
            failed = results.error_count(),
            "image aggregation complete"
        );
        results
    }
}
