//! Opaque cursor tokens addressing a page of results.
//!
//! A cursor is unpadded URL-safe base64 over a small JSON payload. Clients
//! treat the token as opaque and hand it back unchanged.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::CursorError;
use crate::page::PageRequest;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CursorPayload {
    page: usize,
    page_size: usize,
}

/// Opaque continuation token for one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Cursor {
    request: PageRequest,
}

impl Cursor {
    /// Page request addressed by this cursor.
    #[must_use]
    pub const fn request(&self) -> PageRequest {
        self.request
    }

    /// Encode the cursor as an opaque token.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::{Cursor, PageRequest};
    ///
    /// let cursor = Cursor::from(PageRequest::new(3, 5).expect("valid"));
    /// let token = cursor.encode();
    /// assert_eq!(Cursor::decode(&token), Ok(cursor));
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        let payload = CursorPayload {
            page: self.request.page(),
            page_size: self.request.page_size(),
        };
        // Serialising two integers cannot fail.
        let json = serde_json::to_vec(&payload).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Decode an opaque token produced by [`Cursor::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`CursorError`] when the token is not base64, the payload is
    /// not a cursor, or the payload describes an invalid page size.
    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token.trim())
            .map_err(|error| CursorError::InvalidEncoding {
                message: error.to_string(),
            })?;
        let payload: CursorPayload =
            serde_json::from_slice(&bytes).map_err(|error| CursorError::InvalidPayload {
                message: error.to_string(),
            })?;
        let request = PageRequest::new(payload.page, payload.page_size)?;
        Ok(Self { request })
    }
}

impl From<PageRequest> for Cursor {
    fn from(request: PageRequest) -> Self {
        Self { request }
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.encode()
    }
}

impl TryFrom<String> for Cursor {
    type Error = CursorError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::decode(&token)
    }
}
