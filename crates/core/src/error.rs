//! Domain error model.

use core::fmt::Display;

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures callers can act on (validation,
/// missing entities, malformed identifiers). None of these are retried
/// internally; retry is a caller policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more entity fields failed their rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An identifier string was not a canonical UUID.
    #[error("ID is not a valid UUID: {0}")]
    InvalidIdentifierFormat(String),

    /// No stored entity matched the identifier(s).
    #[error("Entity \"{entity_type}\" with id(s) \"{ids}\" not found.")]
    NotFound {
        entity_type: &'static str,
        ids: String,
    },

    /// A search asked to sort by a field the repository does not expose.
    ///
    /// Only raised by repositories that opt into strict sorting.
    #[error("cannot sort \"{entity_type}\" by unknown field \"{field}\"")]
    UnsupportedSortField {
        entity_type: &'static str,
        field: String,
    },

    /// An internal invariant was violated (e.g. a poisoned repository lock).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn invalid_id(input: impl Into<String>) -> Self {
        Self::InvalidIdentifierFormat(input.into())
    }

    pub fn not_found(id: impl Display, entity_type: &'static str) -> Self {
        Self::NotFound {
            entity_type,
            ids: id.to_string(),
        }
    }

    pub fn not_found_many<I, T>(ids: I, entity_type: &'static str) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let ids = ids
            .into_iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::NotFound { entity_type, ids }
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn unsupported_sort(field: impl Into<String>, entity_type: &'static str) -> Self {
        Self::UnsupportedSortField {
            entity_type,
            field: field.into(),
        }
    }

    /// Returns the wrapped validation error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
