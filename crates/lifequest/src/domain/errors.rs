//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::FallbackReason;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

/// Failures raised by mentor providers.
///
/// Never surfaced to gateway callers: the generation service converts each
/// of these into a fallback outcome.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("API credential missing or rejected: {0}")]
    Credential(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Empty response from model")]
    EmptyResponse,
}

impl GenerationError {
    /// Which fallback branch this failure selects
    pub fn fallback_reason(&self) -> FallbackReason {
        match self {
            Self::Credential(_) => FallbackReason::Credential,
            Self::Transport(_) | Self::Api { .. } => FallbackReason::Transport,
            Self::Malformed(_) | Self::EmptyResponse => FallbackReason::Malformed,
        }
    }
}
