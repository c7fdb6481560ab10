//! Reqwest-backed Overpass restaurant source.
//!
//! This adapter owns transport details only: request serialisation, timeout and
//! HTTP error mapping, and JSON decoding into raw domain elements.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::OverpassResponseDto;
use crate::domain::OverpassQuery;
use crate::domain::ports::{RawElement, RestaurantSource, RestaurantSourceError};

/// User-agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "dining-backend-discovery/0.1";
/// Contact header value sent when none is configured.
pub const DEFAULT_CONTACT: &str = "ops@dining.invalid";

/// Outbound identity for Overpass requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverpassHttpIdentity {
    /// HTTP user-agent sent to Overpass.
    pub user_agent: String,
    /// Contact header value sent to Overpass.
    pub contact: String,
}

impl Default for OverpassHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            contact: DEFAULT_CONTACT.to_owned(),
        }
    }
}

/// Restaurant source that performs HTTP POST requests against one Overpass
/// endpoint.
pub struct OverpassHttpSource {
    client: Client,
    endpoint: Url,
    identity: OverpassHttpIdentity,
}

impl OverpassHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let source = OverpassHttpSource::new(endpoint, Duration::from_secs(30))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(endpoint, timeout, OverpassHttpIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        endpoint: Url,
        timeout: Duration,
        identity: OverpassHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            identity,
        })
    }
}

#[async_trait]
impl RestaurantSource for OverpassHttpSource {
    async fn fetch_elements(
        &self,
        query: &OverpassQuery,
    ) -> Result<Vec<RawElement>, RestaurantSourceError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.identity.user_agent.as_str())
            .header("Contact", self.identity.contact.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let elements = parse_elements(body.as_ref())?;
        debug!(
            endpoint = %self.endpoint,
            bytes = body.len(),
            elements = elements.len(),
            "overpass response decoded"
        );
        Ok(elements)
    }
}

fn parse_elements(body: &[u8]) -> Result<Vec<RawElement>, RestaurantSourceError> {
    let decoded: OverpassResponseDto = serde_json::from_slice(body).map_err(|error| {
        RestaurantSourceError::decode(format!("invalid Overpass JSON payload: {error}"))
    })?;
    Ok(decoded.into_raw_elements())
}

fn map_transport_error(error: reqwest::Error) -> RestaurantSourceError {
    if error.is_timeout() {
        RestaurantSourceError::timeout(error.to_string())
    } else {
        RestaurantSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RestaurantSourceError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => RestaurantSourceError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            RestaurantSourceError::timeout(message)
        }
        _ if status.is_client_error() => RestaurantSourceError::invalid_request(message),
        _ => RestaurantSourceError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
