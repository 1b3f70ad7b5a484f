//! Error type shared by spec ingestion and power models.

use thiserror::Error;

/// Errors surfaced by spec ingestion and power computations.
///
/// All errors are raised synchronously at the point of computation and passed
/// through to the caller unchanged. A computation either fully succeeds or
/// fully fails; there are no partial results and nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A required field is absent from the ingested document.
    #[error("missing required field `{0}`")]
    MissingField(String),
    /// A field is present but cannot be coerced to its declared type.
    #[error("field `{field}` is not a valid {expected}: {value}")]
    InvalidType {
        /// Name of the offending field.
        field: String,
        /// The declared type of the field.
        expected: &'static str,
        /// The offending value as it appears in the document.
        value: String,
    },
    /// A mathematically undefined operation on otherwise well-typed input,
    /// e.g. a zero clock period or a zero refresh interval.
    #[error("domain error: {0}")]
    Domain(String),
    /// A component was invoked without a required collaborator, or an input
    /// document could not be read at all.
    #[error("configuration error: {0}")]
    Configuration(String),
}
