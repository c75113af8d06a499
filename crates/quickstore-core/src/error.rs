//! Error types for local storage and configuration.
//!
//! HTTP failures have their own taxonomy in [`crate::api::ApiError`].

use thiserror::Error;

/// Errors raised while reading or writing client-side state.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No platform configuration directory could be determined.
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// A specialized Result type for storage and configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
