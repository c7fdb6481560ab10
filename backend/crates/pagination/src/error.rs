//! Error types for page requests and cursor decoding.

use thiserror::Error;

/// Errors raised when constructing a [`crate::PageRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page size was zero.
    #[error("page size must be at least 1")]
    EmptyPageSize,
}

/// Errors raised while decoding an opaque cursor token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The token was not valid unpadded URL-safe base64.
    #[error("cursor is not valid base64: {message}")]
    InvalidEncoding {
        /// Decoder failure description.
        message: String,
    },
    /// The decoded bytes were not a cursor payload.
    #[error("cursor payload is malformed: {message}")]
    InvalidPayload {
        /// Parser failure description.
        message: String,
    },
    /// The payload decoded but describes an unusable page request.
    #[error("cursor describes an invalid page request: {0}")]
    InvalidPageRequest(#[from] PageRequestError),
}
