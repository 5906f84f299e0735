//! Unified error types for the domain layer
//!
//! Every caller-visible failure of a setter, constructor, registration or
//! aggregation is a `DomainError`. Snapshot I/O failures are not domain errors;
//! the engine's codec swallows and logs them.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field constraint was violated; the field keeps its previous value
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Registration was attempted without a value
    #[error("{entity_type} cannot be registered without a value")]
    NullEntity { entity_type: &'static str },

    /// A group was supplied with fewer members than its capacity
    #[error("Group requires {required} members but {supplied} were supplied")]
    Capacity { required: usize, supplied: usize },

    /// The aggregation selector does not name a known attribute
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
}

impl DomainError {
    /// Creates a validation error for a single field.
    ///
    /// # Example
    /// ```ignore
    /// if value < 0 {
    ///     return Err(DomainError::validation("hp", "cannot be negative"));
    /// }
    /// ```
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a null entity error
    pub fn null_entity(entity_type: &'static str) -> Self {
        Self::NullEntity { entity_type }
    }

    /// Create a capacity error
    pub fn capacity(required: usize, supplied: usize) -> Self {
        Self::Capacity { required, supplied }
    }

    /// Create an unknown attribute error
    pub fn unknown_attribute(selector: impl Into<String>) -> Self {
        Self::UnknownAttribute(selector.into())
    }

    /// Name of the offending field, for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
