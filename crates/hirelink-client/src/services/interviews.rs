//! Interview scheduling.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Interview, InterviewRequest, StatusUpdate};

pub async fn list(client: &ApiClient) -> Result<Vec<Interview>> {
    client.get("/interviews").await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Interview> {
    client.get(&format!("/interviews/{id}")).await
}

pub async fn schedule(client: &ApiClient, request: &InterviewRequest) -> Result<Interview> {
    client.post("/interviews", request).await
}

pub async fn update_status(client: &ApiClient, id: &str, status: &str) -> Result<Interview> {
    let payload = StatusUpdate {
        status: status.to_string(),
    };
    client
        .patch(&format!("/interviews/{id}/status"), &payload)
        .await
}
