//! The gateway HTTP client all remote calls pass through.

mod gateway;
mod transport;

pub use gateway::ApiClient;
pub use transport::{ReqwestTransport, Transport};
