//! Shared leaf types for the OSB client.
//!
//! This crate contains pure data structures used across the workspace.
//! Types here have no business logic - they're just data that can be
//! passed between layers.
//!
//! ## Architecture
//!
//! - **common** (this crate): Pure data structures
//! - **osb-client**: Broker client logic operating on these types

pub mod credentials;
pub mod error;
pub mod http_status;

#[cfg(test)]
mod tests;

pub use credentials::Credentials;
pub use error::ErrorLocation;
pub use http_status::HttpStatusCode;
