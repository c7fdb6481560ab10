//! Overpass adapter configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::DiscoveryConfig;
use crate::domain::query::DEFAULT_QUERY_TIMEOUT_SECONDS;
use crate::outbound::overpass::{DEFAULT_CONTACT, DEFAULT_USER_AGENT, OverpassHttpIdentity};

/// Public Overpass API interpreter.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";
const DEFAULT_RETRY_BACKOFF_MILLIS: u64 = 500;

/// Configuration values for the Overpass source and discovery calls.
///
/// The request timeout and attempt count carry defaults; every other field is
/// optional and its accessor falls back to a default.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "OVERPASS")]
pub struct OverpassSettings {
    /// Interpreter endpoint URL.
    pub endpoint: Option<String>,
    /// Client-side HTTP timeout in seconds.
    #[ortho_config(default = 30)]
    pub request_timeout_seconds: u64,
    /// Server-side timeout directive embedded in each query.
    pub query_timeout_seconds: Option<u32>,
    /// User-agent header value.
    pub user_agent: Option<String>,
    /// Contact header value.
    pub contact: Option<String>,
    /// Fetch attempts per discovery call, including the first.
    #[ortho_config(default = 1)]
    pub max_attempts: u32,
    /// Delay before the first retry in milliseconds.
    pub retry_backoff_ms: Option<u64>,
}

impl OverpassSettings {
    /// Configured endpoint, falling back to the public interpreter.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured endpoint is not a valid URL.
    pub fn endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    }

    /// Client-side HTTP timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds.max(1))
    }

    /// Outbound identity headers.
    pub fn identity(&self) -> OverpassHttpIdentity {
        OverpassHttpIdentity {
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            contact: self
                .contact
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTACT.to_owned()),
        }
    }

    /// Discovery tunables derived from these settings.
    pub fn discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            query_timeout_seconds: self
                .query_timeout_seconds
                .unwrap_or(DEFAULT_QUERY_TIMEOUT_SECONDS)
                .max(1),
            max_fetch_attempts: self.max_attempts.max(1),
            retry_backoff: Duration::from_millis(
                self.retry_backoff_ms.unwrap_or(DEFAULT_RETRY_BACKOFF_MILLIS),
            ),
        }
    }
}
