//! Error types for rs-linkpreview.
//!
//! Network and parsing failures inside the pipeline degrade to empty or
//! partial results rather than surfacing here; only misuse of the public
//! API produces an error.

/// Error type for link preview operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source URL handed to the library is not an absolute http(s) URL.
    #[error("invalid source URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for link preview operations.
pub type Result<T> = std::result::Result<T, Error>;
