//! Feature suggestion board.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{FeatureSuggestion, NewFeatureSuggestion};

pub async fn list(client: &ApiClient) -> Result<Vec<FeatureSuggestion>> {
    client.get("/feature/feature-suggestions").await
}

pub async fn suggest(
    client: &ApiClient,
    suggestion: &NewFeatureSuggestion,
) -> Result<FeatureSuggestion> {
    client.post("/feature/feature-suggestions", suggestion).await
}

pub async fn vote(client: &ApiClient, id: &str) -> Result<FeatureSuggestion> {
    client
        .post(&format!("/feature/feature-suggestions/{id}/vote"), &())
        .await
}
