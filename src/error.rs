//! Error types for coltype operations.

use thiserror::Error;

use crate::types::TypeId;

/// Result type alias using [`ColtypeError`].
pub type Result<T> = std::result::Result<T, ColtypeError>;

/// Error types for typed value operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColtypeError {
    /// Binary operation between values of different concrete types.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: TypeId, actual: TypeId },

    /// Payload length inconsistent with the type's fixed width.
    #[error("Malformed {type_id} payload: expected {expected} bytes, got {actual}")]
    MalformedPayload {
        type_id: TypeId,
        expected: usize,
        actual: usize,
    },

    /// Payload of the right width that does not hold a valid value.
    #[error("Invalid {type_id} value: {reason}")]
    InvalidValue { type_id: TypeId, reason: String },

    /// Operation not defined for this type (e.g. batch evaluation of a
    /// variable-length type).
    #[error("Unsupported operation for {type_id}: {operation}")]
    UnsupportedForType {
        type_id: TypeId,
        operation: &'static str,
    },

    /// Type not registered, or a value reporting no identity.
    #[error("Unknown type: {0}")]
    UnknownType(TypeId),

    /// Type already registered in a catalog.
    #[error("Duplicate type: {0}")]
    DuplicateType(TypeId),

    /// Packed batch shape errors.
    #[error("Invalid batch: {0}")]
    InvalidBatch(String),

    /// Allocation failure.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),
}
