//! Analysis Domain Ports
//!
//! Port interfaces for the three external collaborators the analysis core
//! consumes. The collaborators are black boxes: the core only sees their
//! structured outputs. Adapters implement these traits against the real
//! model services; the `mock` module provides scripted in-memory adapters
//! for testing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_analysis::{ClaimAnalysisService, AnalysisConfig};
//! use std::sync::Arc;
//!
//! let service = ClaimAnalysisService::new(
//!     Arc::new(ocr_adapter),
//!     Arc::new(fraud_adapter),
//!     Arc::new(vision_adapter),
//!     AnalysisConfig::default(),
//! );
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use core_kernel::{DocumentRef, DomainPort, HealthCheckable, ImageRef, Money, PortError, Score};

use crate::evidence::{ClaimType, DocumentResult, ImageResult};

/// Output of the fraud-detection collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAssessment {
    /// Fraud likelihood, 0 = no fraud signal
    pub fraud_score: Score,
    /// Human-readable issues the model flagged
    pub issues: Vec<String>,
}

impl FraudAssessment {
    /// An assessment with no fraud signal
    pub fn clean() -> Self {
        Self {
            fraud_score: Score::ZERO,
            issues: Vec::new(),
        }
    }
}

/// Port to the OCR collaborator
///
/// One call per document reference; a failed call is recorded per item by
/// the aggregator and never aborts the batch.
#[async_trait]
pub trait OcrPort: DomainPort + HealthCheckable {
    /// Extracts text, category, and any monetary amount from one document
    async fn process(&self, document: &DocumentRef) -> Result<DocumentResult, PortError>;
}

/// Port to the fraud-detection collaborator
#[async_trait]
pub trait FraudPort: DomainPort + HealthCheckable {
    /// Scores the concatenated document text for fraud signals
    async fn analyze(
        &self,
        text: &str,
        claim_type: ClaimType,
        requested_amount: Money,
    ) -> Result<FraudAssessment, PortError>;
}

/// Port to the image-analysis collaborator
#[async_trait]
pub trait VisionPort: DomainPort + HealthCheckable {
    /// Assesses authenticity, damage, and estimated cost for one image
    async fn analyze(
        &self,
        image: &ImageRef,
        claim_type: ClaimType,
    ) -> Result<ImageResult, PortError>;
}

/// Scripted in-memory collaborators for testing
///
/// Each mock answers from a response table keyed by reference, so tests can
/// stage exact collaborator behavior including per-item failures.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    use core_kernel::CollaboratorStatus;

    /// Scripted OCR collaborator
    #[derive(Debug, Default)]
    pub struct MockOcrPort {
        responses: HashMap<DocumentRef, Result<DocumentResult, String>>,
    }

    impl MockOcrPort {
        /// Creates a mock with no scripted responses
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripts a successful result for a reference
        pub fn with_result(mut self, document: impl Into<DocumentRef>, result: DocumentResult) -> Self {
            self.responses.insert(document.into(), Ok(result));
            self
        }

        /// Scripts a failure for a reference
        pub fn with_failure(mut self, document: impl Into<DocumentRef>, message: impl Into<String>) -> Self {
            self.responses.insert(document.into(), Err(message.into()));
            self
        }
    }

    impl DomainPort for MockOcrPort {}

    #[async_trait]
    impl HealthCheckable for MockOcrPort {
        async fn health_check(&self) -> CollaboratorStatus {
            CollaboratorStatus::ready("ocr")
        }
    }

    #[async_trait]
    impl OcrPort for MockOcrPort {
        async fn process(&self, document: &DocumentRef) -> Result<DocumentResult, PortError> {
            match self.responses.get(document) {
                Some(Ok(result)) => Ok(result.clone()),
                Some(Err(message)) => Err(PortError::internal(message.clone())),
                None => Err(PortError::validation(format!(
                    "no scripted response for document {document}"
                ))),
            }
        }
    }

    /// Scripted fraud collaborator
    ///
    /// Records the text it was asked to analyze so tests can assert on the
    /// aggregated input.
    #[derive(Debug)]
    pub struct MockFraudPort {
        assessment: Result<FraudAssessment, String>,
        analyzed_text: RwLock<Option<String>>,
    }

    impl Default for MockFraudPort {
        fn default() -> Self {
            Self {
                assessment: Ok(FraudAssessment::clean()),
                analyzed_text: RwLock::new(None),
            }
        }
    }

    impl MockFraudPort {
        /// Creates a mock that reports no fraud signal
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripts the assessment returned for every call
        pub fn with_assessment(mut self, assessment: FraudAssessment) -> Self {
            self.assessment = Ok(assessment);
            self
        }

        /// Scripts a failure for every call
        pub fn with_failure(mut self, message: impl Into<String>) -> Self {
            self.assessment = Err(message.into());
            self
        }

        /// Returns the text passed to the most recent `analyze` call
        pub async fn analyzed_text(&self) -> Option<String> {
            self.analyzed_text.read().await.clone()
        }
    }

    impl DomainPort for MockFraudPort {}

    #[async_trait]
    impl HealthCheckable for MockFraudPort {
        async fn health_check(&self) -> CollaboratorStatus {
            CollaboratorStatus::ready("fraud")
        }
    }

    #[async_trait]
    impl FraudPort for MockFraudPort {
        async fn analyze(
            &self,
            text: &str,
            _claim_type: ClaimType,
            _requested_amount: Money,
        ) -> Result<FraudAssessment, PortError> {
            *self.analyzed_text.write().await = Some(text.to_string());
            match &self.assessment {
                Ok(assessment) => Ok(assessment.clone()),
                Err(message) => Err(PortError::internal(message.clone())),
            }
        }
    }

    /// Scripted image-analysis collaborator
    #[derive(Debug, Default)]
    pub struct MockVisionPort {
        responses: HashMap<ImageRef, Result<ImageResult, String>>,
    }

    impl MockVisionPort {
        /// Creates a mock with no scripted responses
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripts a successful result for a reference
        pub fn with_result(mut self, image: impl Into<ImageRef>, result: ImageResult) -> Self {
            self.responses.insert(image.into(), Ok(result));
            self
        }

        /// Scripts a failure for a reference
        pub fn with_failure(mut self, image: impl Into<ImageRef>, message: impl Into<String>) -> Self {
            self.responses.insert(image.into(), Err(message.into()));
            self
        }
    }

    impl DomainPort for MockVisionPort {}

    #[async_trait]
    impl HealthCheckable for MockVisionPort {
        async fn health_check(&self) -> CollaboratorStatus {
            CollaboratorStatus::ready("vision")
        }
    }

    #[async_trait]
    impl VisionPort for MockVisionPort {
        async fn analyze(
            &self,
            image: &ImageRef,
            _claim_type: ClaimType,
        ) -> Result<ImageResult, PortError> {
            match self.responses.get(image) {
                Some(Ok(result)) => Ok(result.clone()),
                Some(Err(message)) => Err(PortError::internal(message.clone())),
                None => Err(PortError::validation(format!(
                    "no scripted response for image {image}"
                ))),
            }
        }
    }
}
