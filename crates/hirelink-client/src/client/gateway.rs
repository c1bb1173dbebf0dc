//! Main Hirelink API client implementation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::client::transport::{ReqwestTransport, Transport};
use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError, Result};
use crate::session::SessionStore;
use crate::types::{ApiRequest, ApiResponse};

/// The shared HTTP client every resource service goes through.
///
/// Before each call it reads the current token from the injected
/// [`SessionStore`] and, when present, attaches it as a bearer credential.
/// Every failure — a non-2xx answer or no answer at all — leaves as
/// [`ClientError::Api`] carrying the normalized shape. Calls are fire-once:
/// no retry, no backoff, no caching.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
    session: SessionStore,
}

impl ApiClient {
    /// Client over a fresh reqwest transport built from the config.
    pub fn new(config: ClientConfig, session: SessionStore) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(ApiClient {
            transport: Arc::new(ReqwestTransport::new(client)),
            config: Arc::new(config),
            session,
        })
    }

    /// Client over an externally supplied transport. This is the seam tests
    /// use to observe outgoing requests without a live server.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        config: ClientConfig,
        session: SessionStore,
    ) -> Result<Self> {
        config.validate()?;
        Ok(ApiClient {
            transport,
            config: Arc::new(config),
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Perform a request and deserialize the payload body.
    ///
    /// On success callers see only the payload, never status or headers.
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.execute(request).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Perform a request whose response body is uninteresting.
    ///
    /// Unlike [`request`](Self::request) this tolerates empty bodies, e.g.
    /// a 204 from a delete or acknowledgement endpoint.
    pub async fn request_unit(&self, request: ApiRequest) -> Result<()> {
        self.execute(request).await?;
        Ok(())
    }

    /// Perform a request, returning the raw response on 2xx.
    ///
    /// Failure normalization happens here, in exactly two cases: the server
    /// answered non-2xx (normalized from its body), or no response arrived
    /// (synthetic 500).
    pub async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse> {
        if let Some(token) = self.session.token() {
            request = request.with_header("authorization", format!("Bearer {token}"));
        }

        let url = self.config.endpoint(&request.path);
        let request_id = uuid::Uuid::new_v4().simple().to_string();
        self.log_request(&request_id, &url, &request);

        let response = match self.transport.send(&url, request).await {
            Ok(response) => response,
            Err(ClientError::Transport(reason)) => {
                if self.config.enable_logging {
                    tracing::debug!("[{}] no response: {}", request_id, reason);
                }
                return Err(ClientError::Api(ApiError::network()));
            }
            Err(other) => return Err(other),
        };

        self.log_response(&request_id, &response);

        if !response.is_success() {
            return Err(ClientError::Api(ApiError::from_response(
                response.status,
                &response.body,
            )));
        }

        Ok(response)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::get(path)).await
    }

    pub async fn post<T, B>(&self, path: &str, payload: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(ApiRequest::new("POST", path).with_json(payload)?)
            .await
    }

    pub async fn put<T, B>(&self, path: &str, payload: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(ApiRequest::new("PUT", path).with_json(payload)?)
            .await
    }

    pub async fn patch<T, B>(&self, path: &str, payload: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(ApiRequest::new("PATCH", path).with_json(payload)?)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::new("DELETE", path)).await
    }

    fn log_request(&self, request_id: &str, url: &str, request: &ApiRequest) {
        if self.config.enable_logging {
            tracing::debug!(
                "[{}] {} {} authorized={}",
                request_id,
                request.method,
                url,
                request.header("authorization").is_some()
            );
        }
    }

    fn log_response(&self, request_id: &str, response: &ApiResponse) {
        if self.config.enable_logging {
            tracing::debug!(
                "[{}] status={} body_len={}",
                request_id,
                response.status,
                response.body.len()
            );
        }
    }
}
