//! Job postings.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Job, NewJob, StatusUpdate};

pub async fn list(client: &ApiClient) -> Result<Vec<Job>> {
    client.get("/jobs").await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<Job> {
    client.get(&format!("/jobs/{id}")).await
}

pub async fn create(client: &ApiClient, job: &NewJob) -> Result<Job> {
    client.post("/jobs", job).await
}

pub async fn update_status(client: &ApiClient, id: &str, status: &str) -> Result<Job> {
    let payload = StatusUpdate {
        status: status.to_string(),
    };
    client.patch(&format!("/jobs/{id}/status"), &payload).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<Job> {
    client.delete(&format!("/jobs/{id}")).await
}
