//! User accounts.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::Result;
use crate::session::UserProfile;

/// Partial profile update; absent fields stay untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

pub async fn list(client: &ApiClient) -> Result<Vec<UserProfile>> {
    client.get("/users").await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<UserProfile> {
    client.get(&format!("/users/{id}")).await
}

pub async fn update(client: &ApiClient, id: &str, update: &ProfileUpdate) -> Result<UserProfile> {
    client.put(&format!("/users/{id}"), update).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<UserProfile> {
    client.delete(&format!("/users/{id}")).await
}
