//! Push notification device registration.
//!
//! Only the client half of the push channel lives here: handing the device
//! token to the API. Delivery is the server's concern.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Acknowledgement, DeviceTokenRegistration};

pub async fn register_device_token(
    client: &ApiClient,
    token: &str,
    platform: Option<&str>,
) -> Result<Acknowledgement> {
    let payload = DeviceTokenRegistration {
        token: token.to_string(),
        platform: platform.map(str::to_string),
    };
    client.post("/notifications/tokens", &payload).await
}
