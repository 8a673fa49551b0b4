use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Every variant is an expected, recoverable outcome that callers match
/// exhaustively; only [`CoreError::Internal`] represents a genuinely
/// unanticipated fault. The HTTP layer maps each variant to its own
/// status and body shape, so none of them collapse into a generic error.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No record with the given id exists.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A unique constraint rejected the write (duplicate `name` on create).
    #[error("{entity} already exists")]
    Duplicate { entity: &'static str },

    /// A selection was requested from an empty record set.
    #[error("no {entity} records exist")]
    EmptyCollection { entity: &'static str },

    /// A presented secret did not match. Raised strictly before any
    /// record lookup so existence is never disclosed on a failed check.
    #[error("{0}")]
    Unauthorized(&'static str),

    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// An unexpected internal fault.
    ///
    /// Kept so the taxonomy stays closed and exhaustively matchable;
    /// storage faults normally surface through the HTTP layer's sqlx
    /// classification rather than being constructed as this variant.
    #[error("{0}")]
    Internal(String),
}
