pub mod config;
pub mod gate;
pub mod http;

pub use config::ConfigError;
pub use gate::{GateDenial, OperationNotAllowedError};
pub use http::HttpStatusCodeError;

use thiserror::Error;

/// Everything a broker operation can fail with.
///
/// All variants are terminal for the current call - nothing is retried
/// internally. Transport errors pass through transparently so callers see
/// the HTTP library's message unmodified.
#[derive(Debug, Error)]
pub enum OsbError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    #[error(transparent)]
    StatusCode(#[from] HttpStatusCodeError),

    #[error(transparent)]
    NotAllowed(#[from] OperationNotAllowedError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Request Validation Error: {message}")]
    Validation { message: String },
}
