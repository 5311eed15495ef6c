use thiserror::Error;

/// Errors surfaced by the stripping API.
///
/// There is only one failure mode: the caller handed over something that is
/// not text. Everything else (empty preserve entries, unknown option fields,
/// no matches) degrades to a no-op instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StripError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl StripError {
    pub(crate) fn not_a_string() -> Self {
        StripError::InvalidArgument("input must be a string".to_string())
    }
}
