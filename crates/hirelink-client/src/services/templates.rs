//! Outreach message templates.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{MessageTemplate, TemplateDraft};

pub async fn list(client: &ApiClient) -> Result<Vec<MessageTemplate>> {
    client.get("/templates").await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<MessageTemplate> {
    client.get(&format!("/templates/{id}")).await
}

pub async fn create(client: &ApiClient, draft: &TemplateDraft) -> Result<MessageTemplate> {
    client.post("/templates", draft).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    draft: &TemplateDraft,
) -> Result<MessageTemplate> {
    client.put(&format!("/templates/{id}"), draft).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<MessageTemplate> {
    client.delete(&format!("/templates/{id}")).await
}
