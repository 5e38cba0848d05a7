//! Ports infrastructure for external collaborators
//!
//! The analysis core consumes three black-box collaborators: OCR, fraud
//! detection, and image analysis. Each domain defines its own port trait
//! over the shared types here; adapters implement those traits against the
//! real model services or as in-memory mocks.
//!
//! Readiness is reported through [`CollaboratorStatus`] snapshots rather
//! than mutable flags on a long-lived service object, so "am I ready" stays
//! an explicit query against injected dependencies.

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error type for collaborator port operations
///
/// A unified error type that all port implementations use, so the analysis
/// core can classify failures the same way regardless of which adapter
/// produced them.
#[derive(Debug, Error)]
pub enum PortError {
    /// The collaborator rejected the input
    #[error("Validation error: {message}")]
    Validation {
        message: String,
    },

    /// Connection to the collaborator failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The collaborator call timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// The collaborator is unavailable (model not loaded, service down)
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// The collaborator returned a response the core could not interpret
    #[error("Transformation error: {message}")]
    Transformation {
        message: String,
    },

    /// An internal error occurred inside the adapter
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a ServiceUnavailable error
    pub fn unavailable(service: impl Into<String>) -> Self {
        PortError::ServiceUnavailable {
            service: service.into(),
        }
    }

    /// Creates a Transformation error
    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// Health of a single collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorHealth {
    /// Collaborator is loaded and answering
    Ready,
    /// Collaborator is answering but degraded
    Degraded,
    /// Collaborator is not operational
    Unavailable,
    /// Health has not been determined
    Unknown,
}

/// Status snapshot for one collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorStatus {
    /// Collaborator identifier (e.g. "ocr", "fraud", "vision")
    pub collaborator_id: String,
    /// Current health
    pub health: CollaboratorHealth,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl CollaboratorStatus {
    /// Creates a ready status for the given collaborator
    pub fn ready(collaborator_id: impl Into<String>) -> Self {
        Self {
            collaborator_id: collaborator_id.into(),
            health: CollaboratorHealth::Ready,
            message: None,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Creates an unavailable status with a reason
    pub fn unavailable(collaborator_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            collaborator_id: collaborator_id.into(),
            health: CollaboratorHealth::Unavailable,
            message: Some(reason.into()),
            checked_at: chrono::Utc::now(),
        }
    }

    /// Returns true when the collaborator can serve requests
    pub fn is_ready(&self) -> bool {
        matches!(
            self.health,
            CollaboratorHealth::Ready | CollaboratorHealth::Degraded
        )
    }
}

impl fmt::Display for CollaboratorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.collaborator_id, self.health)
    }
}

/// Trait for collaborator adapters that report their readiness
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Returns a status snapshot for this collaborator
    async fn health_check(&self) -> CollaboratorStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_transient() {
        let timeout = PortError::Timeout {
            operation: "ocr process".to_string(),
            duration_ms: 5000,
        };
        assert!(timeout.is_transient());

        let unavailable = PortError::unavailable("fraud");
        assert!(unavailable.is_transient());

        let validation = PortError::validation("unreadable scan");
        assert!(!validation.is_transient());
    }

    #[test]
    fn test_port_error_display() {
        let error = PortError::unavailable("vision");
        assert!(error.to_string().contains("vision"));
    }

    #[test]
    fn test_collaborator_status() {
        let ready = CollaboratorStatus::ready("ocr");
        assert!(ready.is_ready());
        assert_eq!(ready.health, CollaboratorHealth::Ready);

        let down = CollaboratorStatus::unavailable("fraud", "model not loaded");
        assert!(!down.is_ready());
        assert_eq!(down.message.as_deref(), Some("model not loaded"));
    }
}
