use thiserror::Error;

/// Errors surfaced while decoding kind records.
///
/// An unrecognized identifier is not an error: it resolves to
/// [`KindIdentifier::Unknown`](crate::KindIdentifier::Unknown).
#[derive(Debug, Error)]
pub enum KindError {
    /// The input was neither an identifier string nor an object carrying an
    /// `identifier` field.
    #[error("malformed kind record: {0}")]
    MalformedRecord(#[source] serde_json::Error),
}
