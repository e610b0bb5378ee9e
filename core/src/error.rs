//! Error types for the consumption API client.
//!
//! # Design
//! Failures are exactly the ones the transport and JSON layers can signal.
//! There is deliberately no variant for non-2xx statuses: the client never
//! inspects status codes, so a server error with a JSON body decodes and is
//! returned as an ordinary value (see `WaterClient`).

use std::fmt;

/// Errors returned by `WaterClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read.
    Transport(String),

    /// The response body could not be deserialized as JSON.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
