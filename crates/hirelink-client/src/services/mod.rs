//! Thin per-resource wrappers over the gateway.
//!
//! Every operation here is a single stateless request/response exchange
//! differing only in endpoint path and payload shape. Errors from the
//! gateway propagate unchanged; presentation code decides what to render.

pub mod auth;
pub mod chat;
pub mod contact;
pub mod features;
pub mod interviews;
pub mod jobs;
pub mod matching;
pub mod notifications;
pub mod templates;
pub mod users;
