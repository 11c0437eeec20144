//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ListingsError`] via `From`.

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum ListingsError {
    /// A domain invariant was violated by the caller's input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The persistence layer failed (connectivity, constraint, decoding, …).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a property payload is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A numeric field holds text that does not parse as a number.
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A numeric field parsed but is negative or not finite.
    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },
}
