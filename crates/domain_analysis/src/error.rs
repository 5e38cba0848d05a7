//! Analysis domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors surfaced at the analysis boundary
///
/// Per-item collaborator failures and stage-level computation failures are
/// recovered inside the pipeline; only evidence contract violations and
/// batch-level collaborator failures reach the caller.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid evidence: {0}")]
    InvalidEvidence(String),

    #[error("Collaborator failure: {0}")]
    Collaborator(#[from] PortError),
}
