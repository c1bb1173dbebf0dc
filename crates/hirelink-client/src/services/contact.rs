//! Contact form.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Acknowledgement, ContactMessage};

pub async fn send(client: &ApiClient, message: &ContactMessage) -> Result<Acknowledgement> {
    client.post("/contact", message).await
}
