//! Login and registration.
//!
//! These return the profile and token; feeding them into the
//! [`crate::SessionStore`] is the caller's decision, which keeps these
//! functions stateless and the store explicitly injected.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<AuthResponse> {
    client.post("/users/login", credentials).await
}

pub async fn register(client: &ApiClient, payload: &RegisterRequest) -> Result<AuthResponse> {
    client.post("/users/register", payload).await
}
