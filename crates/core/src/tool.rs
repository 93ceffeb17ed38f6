use serde::Serialize;

use crate::error::{ErrorKind, MappingError};

/// One remote lookup: how to validate input, where to send it, and how to
/// read the answer.
///
/// Implementations are plain data (an endpoint base URL) plus pure functions,
/// so the same value can drive the async controller and be unit tested on its
/// own.
pub trait Tool: Send + Sync + 'static {
    /// Typed result carried by `LookupState::Succeeded`
    type Output: Clone + Serialize + Send + Sync + 'static;

    /// Short identifier used in logs and on the command line
    const NAME: &'static str;

    /// Normalize raw user input.
    ///
    /// The default trims surrounding whitespace and rejects empty input.
    fn validate(&self, raw: &str) -> Result<String, ErrorKind> {
        non_empty_trimmed(raw)
    }

    /// Build the request URL from already validated input
    fn build_url(&self, input: &str) -> String;

    /// Map a raw JSON payload into this tool's result
    fn map(&self, payload: &serde_json::Value) -> Result<Self::Output, MappingError>;
}

/// Trim `raw` and reject it if nothing is left
pub fn non_empty_trimmed(raw: &str) -> Result<String, ErrorKind> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ErrorKind::InvalidInput)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Strip any trailing slashes from a configured base URL
pub fn base(url: &str) -> &str {
    url.trim_end_matches('/')
}
