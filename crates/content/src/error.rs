//! Error type for content ingress

use thiserror::Error;

/// Errors produced while ingesting upstream records.
///
/// The matching and estimation functions themselves are total and never
/// fail; errors only arise at the JSON boundary.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Payload was not valid JSON for the expected shape.
    #[error("malformed post payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record parsed but violated the boundary contract.
    #[error("invalid post record: {0}")]
    InvalidRecord(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ContentError>;
