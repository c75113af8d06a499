//! # API Errors
//!
//! Error types for API operations.

use thiserror::Error;

/// Errors that can occur during API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connectivity, DNS, TLS...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("server error: {status} - {}", .message.as_deref().unwrap_or("no details"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// Human-readable message extracted from the body, if any.
        message: Option<String>,
    },

    /// A success response could not be decoded.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Whether the request failed before a response arrived.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// HTTP status for server-reported failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server-provided message, when there is one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The server-provided message, or `fallback` for every other case.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
