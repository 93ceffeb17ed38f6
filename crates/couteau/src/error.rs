/// Failure reported by an `HttpFetcher`.
///
/// The lookup controller does not distinguish between these; all of them end
/// the lookup as `ErrorKind::NetworkError`. The detail is kept for logs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Response body is not valid JSON: {0}")]
    Decode(String),
}
