use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while fetching field metadata.
///
/// Cloneable so a single failure can be delivered to every subscriber of a
/// shared fetch.
#[derive(Debug, Clone, Error)]
pub enum MetadataError {
    /// The request could not be sent or the connection failed
    #[error("Metadata request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Arc<reqwest::Error>,
    },
    /// The backend answered with a non-success status
    #[error("Metadata request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    /// The response body was not a valid metadata document
    #[error("Invalid metadata response from {url}: {message}")]
    Decode { url: String, message: String },
}
