//! Assistant chat endpoint.

use std::time::Duration;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{ChatRequest, ChatResponse};
use crate::types::ApiRequest;

/// Replies are generated server-side and can outlive the default request
/// timeout, so chat calls carry their own override.
const CHAT_TIMEOUT: Duration = Duration::from_secs(120);

pub async fn send(client: &ApiClient, message: &str) -> Result<ChatResponse> {
    exchange(
        client,
        ChatRequest {
            message: message.to_string(),
            context: None,
        },
    )
    .await
}

pub async fn send_with_context(
    client: &ApiClient,
    message: &str,
    context: &str,
) -> Result<ChatResponse> {
    exchange(
        client,
        ChatRequest {
            message: message.to_string(),
            context: Some(context.to_string()),
        },
    )
    .await
}

async fn exchange(client: &ApiClient, payload: ChatRequest) -> Result<ChatResponse> {
    client
        .request(
            ApiRequest::new("POST", "/ai/chat")
                .with_json(&payload)?
                .with_timeout(CHAT_TIMEOUT),
        )
        .await
}
