//! Client SDK for the Hirelink job-matching platform API.
//!
//! Everything goes through one configured [`ApiClient`] (the gateway): it
//! injects the bearer token held by the injected [`SessionStore`] and
//! normalizes every failure into the single [`ApiError`] shape before it
//! reaches calling code. Per-resource request functions live under
//! [`services`].

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod types;

pub use client::{ApiClient, ReqwestTransport, Transport};
pub use config::ClientConfig;
pub use error::{ApiError, ClientError, Result};
pub use session::{Role, Session, SessionStore, UserProfile};
pub use types::{ApiRequest, ApiResponse};
