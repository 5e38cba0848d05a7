//! Core Kernel - Foundational types and utilities for the claim analysis system
//!
//! This crate provides the fundamental building blocks used across the
//! analysis domain:
//! - Money types with precise decimal arithmetic
//! - Unit-interval scores for fraud, authenticity, and confidence values
//! - Common identifiers and evidence references
//! - Port infrastructure for external collaborators (OCR, fraud, vision)

pub mod money;
pub mod score;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use score::Score;
pub use identifiers::{ClaimId, DocumentRef, ImageRef};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, HealthCheckable,
    CollaboratorHealth, CollaboratorStatus,
};
