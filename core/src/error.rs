//! Error type for the places API client.
//!
//! # Design
//! `Unauthorized` and `NotFound` get dedicated variants because callers
//! branch on them: an invalid session token must flip the session to
//! logged-out, and deleting an already-deleted card is an expected path.
//! Every other non-2xx response lands in `Http` with the raw status and
//! body so the caller has enough detail to decide what to show.

use std::fmt;

/// Errors returned by the client operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed: DNS failure, refused connection,
    /// broken stream. Wraps the transport's own message.
    Transport(String),

    /// The server returned 401: missing, expired, or invalid credential.
    Unauthorized,

    /// The server returned 404: the requested card or user does not exist.
    NotFound,

    /// Any other non-2xx status, with the raw response body.
    Http { status: u16, body: String },

    /// The request payload could not be encoded as JSON.
    Serialization(String),

    /// The response body could not be decoded into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::Unauthorized => write!(f, "authorization required"),
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Serialization(msg) => write!(f, "request encoding failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "response decoding failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
