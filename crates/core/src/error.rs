//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Catalog operations only ever fail while building a value; membership
/// changes on a grouping are no-ops rather than errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a negative price).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// The validation message without the `validation failed:` prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) => msg.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_carries_message() {
        let err = DomainError::validation("Price cannot be negative");
        assert_eq!(err.to_string(), "validation failed: Price cannot be negative");
        assert_eq!(err.message(), "Price cannot be negative");
    }
}
