//! Scripted-collaborator wiring for pipeline tests
//!
//! Wires the mock OCR, fraud, and vision ports into a ready-to-call
//! `ClaimAnalysisService`, so integration tests stage collaborator behavior
//! in one place and then drive the real pipeline.

use std::sync::Arc;

use domain_analysis::ports::mock::{MockFraudPort, MockOcrPort, MockVisionPort};
use domain_analysis::ports::FraudPort;
use domain_analysis::{AnalysisConfig, ClaimAnalysisService};

/// Assembles a `ClaimAnalysisService` over scripted collaborators
pub struct AnalysisHarness {
    ocr: MockOcrPort,
    fraud: MockFraudPort,
    vision: MockVisionPort,
    config: AnalysisConfig,
}

impl Default for AnalysisHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHarness {
    /// Creates a harness with unscripted collaborators and default config
    pub fn new() -> Self {
        Self {
            ocr: MockOcrPort::new(),
            fraud: MockFraudPort::new(),
            vision: MockVisionPort::new(),
            config: AnalysisConfig::default(),
        }
    }

    /// Replaces the scripted OCR collaborator
    pub fn ocr(mut self, ocr: MockOcrPort) -> Self {
        self.ocr = ocr;
        self
    }

    /// Replaces the scripted fraud collaborator
    pub fn fraud(mut self, fraud: MockFraudPort) -> Self {
        self.fraud = fraud;
        self
    }

    /// Replaces the scripted vision collaborator
    pub fn vision(mut self, vision: MockVisionPort) -> Self {
        self.vision = vision;
        self
    }

    /// Replaces the analysis configuration
    pub fn config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the service
    pub fn build(self) -> ClaimAnalysisService {
        ClaimAnalysisService::new(
            Arc::new(self.ocr),
            Arc::new(self.fraud),
            Arc::new(self.vision),
            self.config,
        )
    }

    /// Builds the service while keeping a handle on the fraud mock, for
    /// tests that assert on the text passed to fraud analysis
    pub fn build_with_fraud_handle(self) -> (ClaimAnalysisService, Arc<MockFraudPort>) {
        let fraud = Arc::new(self.fraud);
        let fraud_dyn: Arc<dyn FraudPort> = fraud.clone();
        let service = ClaimAnalysisService::new(
            Arc::new(self.ocr),
            fraud_dyn,
            Arc::new(self.vision),
            self.config,
        );
        (service, fraud)
    }
}
