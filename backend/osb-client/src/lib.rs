//! Typed client for the Open Service Broker API v2.
//!
//! Translates typed request structs into HTTP calls against a service
//! broker, and HTTP responses (success or error) back into typed results
//! or typed errors. One HTTP call per operation, no retries - callers own
//! any retry policy.

pub mod client;
pub mod config;
pub mod error;
pub mod version;

#[cfg(test)]
mod tests;

pub use client::OsbClient;
pub use config::ClientConfiguration;
pub use error::OsbError;
pub use version::ApiVersion;

/// Header carrying the API version the client speaks, sent on every request.
pub const OSB_API_VERSION_HEADER: &str = "X-Broker-API-Version";

/// Header carrying the identity of the platform user, when configured.
pub const ORIGINATING_IDENTITY_HEADER: &str = "X-Broker-API-Originating-Identity";
