//! Configuration for the Hirelink API client.

use crate::error::{ClientError, Result};

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "HIRELINK_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Configuration for the Hirelink API client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL all resource paths are appended to.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Enable request/response logging.
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: 30000,
            connect_timeout_secs: 10,
            user_agent: format!("hirelink-client/{}", env!("CARGO_PKG_VERSION")),
            enable_logging: false,
        }
    }
}

impl ClientConfig {
    /// Config pointing at an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Config from the environment, falling back to the local default when
    /// `HIRELINK_API_URL` is unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Validate that the base URL parses as an absolute URL.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {:?}: {}", self.base_url, e)))?;
        Ok(())
    }

    /// Join a resource path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
