//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The simulation itself is total; these only surface when a roster or an item
/// is built from caller-supplied values that break the stock contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Item policy constants are out of range (negative stock or threshold,
    /// non-positive reorder amount).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A conflict occurred (e.g. two roster entries with the same name).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = DomainError::invalid_configuration("reorder_amount must be positive (got 0)");
        assert_eq!(
            err.to_string(),
            "invalid configuration: reorder_amount must be positive (got 0)"
        );
        assert_eq!(
            DomainError::conflict("duplicate item").to_string(),
            "conflict: duplicate item"
        );
    }
}
