//! Network seam between the gateway and the wire.

use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeMap;

use crate::error::{ClientError, Result};
use crate::types::{ApiRequest, ApiResponse};

/// Abstraction for performing one HTTP exchange.
///
/// An `Err` from [`send`](Transport::send) means no response was received
/// at all; a server answer of any status comes back as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, url: &str, request: ApiRequest) -> Result<ApiResponse>;
}

/// Transport backed by a shared [`reqwest::Client`].
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, request: ApiRequest) -> Result<ApiResponse> {
        let method = match request.method.to_uppercase().as_str() {
            "GET" => reqwest::Method::GET,
            "POST" => reqwest::Method::POST,
            "PUT" => reqwest::Method::PUT,
            "DELETE" => reqwest::Method::DELETE,
            "PATCH" => reqwest::Method::PATCH,
            other => {
                return Err(ClientError::Config(format!(
                    "unsupported HTTP method {other:?}"
                )))
            }
        };

        let mut req_builder = self.client.request(method, url);

        for (k, v) in &request.headers {
            req_builder = req_builder.header(k, v);
        }

        if !request.body.is_empty() {
            if request.header("content-type").is_none() {
                req_builder =
                    req_builder.header(reqwest::header::CONTENT_TYPE, "application/json");
            }
            req_builder = req_builder.body(request.body.clone());
        }

        if let Some(timeout) = request.timeout {
            req_builder = req_builder.timeout(timeout);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let mut headers = BTreeMap::new();
        for (k, v) in response.headers() {
            if let Ok(val) = v.to_str() {
                headers.insert(k.as_str().to_string(), val.to_string());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
