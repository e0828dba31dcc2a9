//! Wire types for the HTTP boundary
//!
//! `/search` answers with the document text encoded as a single JSON string
//! followed by a newline. Client and server errors are plain-text bodies.

use serde::{Deserialize, Serialize};

/// Body returned when `q` is missing or blank
pub const MISSING_QUERY: &str = "missing search query in URL params";

/// Body returned when the result cannot be encoded
pub const ENCODING_FAILURE: &str = "encoding failure";

/// The search query from `/search`'s decoded query string
///
/// Repeated `q` parameters are allowed; the first one is used. `None` when
/// it is missing or empty.
pub fn search_query(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
}

/// `/status` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Total searches answered (found or not)
    pub queries_served: u64,
    /// Searches that matched no document
    pub not_found: u64,
    /// Size of the indexed corpus
    pub corpus_bytes: usize,
    /// Number of catalog titles
    pub titles: usize,
    /// Number of boundary exceptions in force
    pub exceptions: usize,
}

/// Encode a search result as a JSON string plus trailing newline
pub fn encode_text(text: &str) -> serde_json::Result<Vec<u8>> {
    let mut body = serde_json::to_vec(text)?;
    body.push(b'\n');
    Ok(body)
}
