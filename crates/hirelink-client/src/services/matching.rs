//! Candidate/job matches. Scoring happens behind the API boundary.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{JobMatch, StatusUpdate};

pub async fn list(client: &ApiClient) -> Result<Vec<JobMatch>> {
    client.get("/matching").await
}

pub async fn list_for_job(client: &ApiClient, job_id: &str) -> Result<Vec<JobMatch>> {
    client.get(&format!("/matching/job/{job_id}")).await
}

pub async fn get(client: &ApiClient, id: &str) -> Result<JobMatch> {
    client.get(&format!("/matching/{id}")).await
}

pub async fn update_status(client: &ApiClient, id: &str, status: &str) -> Result<JobMatch> {
    let payload = StatusUpdate {
        status: status.to_string(),
    };
    client
        .patch(&format!("/matching/{id}/status"), &payload)
        .await
}
