use serde::{Deserialize, Serialize};

/// Reason a lookup ended in `LookupState::Failed`.
///
/// This is the whole taxonomy the presentation layer has to handle. Every
/// boundary (input validation, fetching, mapping) collapses its own failures
/// into one of these four values.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Empty or whitespace-only input, detected before any I/O
    #[error("invalid input")]
    InvalidInput,

    /// Transport failure, non-2xx status or undecodable body
    #[error("network error")]
    NetworkError,

    /// The payload did not have the expected shape
    #[error("malformed response")]
    MalformedResponse,

    /// A well-formed response with nothing in it
    #[error("not found")]
    NotFound,
}

impl ErrorKind {
    /// Static, user-facing message for this failure reason
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Please enter a value before searching.",
            ErrorKind::NetworkError => "Could not reach the service. Try again.",
            ErrorKind::MalformedResponse => "The service returned an unexpected response.",
            ErrorKind::NotFound => "No results were found for this search.",
        }
    }
}

/// Failure produced by a response mapper.
///
/// Mappers never panic on a bad payload; every problem with the shape of the
/// data ends up as one of these variants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("unexpected payload shape: {0}")]
    Shape(String),

    #[error("required collection `{0}` is empty")]
    Empty(&'static str),

    #[error("the service has no prediction for this input")]
    Indeterminate,

    #[error("no matching results")]
    NotFound,
}

impl MappingError {
    /// Collapse the mapping failure into the reason shown to the user.
    ///
    /// A missing prediction is reported like an empty result set: the response
    /// was well formed, there is just nothing to show.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MappingError::Shape(_) | MappingError::Empty(_) => ErrorKind::MalformedResponse,
            MappingError::Indeterminate | MappingError::NotFound => ErrorKind::NotFound,
        }
    }
}

impl From<serde_json::Error> for MappingError {
    fn from(err: serde_json::Error) -> Self {
        MappingError::Shape(err.to_string())
    }
}
