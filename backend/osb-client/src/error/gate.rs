use crate::version::ApiVersion;

use thiserror::Error as ThisError;

/// Why the version gate refused an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum GateDenial {
    #[error("alpha API methods not allowed: alpha features must be enabled")]
    AlphaFeaturesDisabled,

    #[error(
        "alpha API methods not allowed: must have latest API Version. Current: {current}, Expected: {required}"
    )]
    UnsupportedApiVersion {
        current: ApiVersion,
        required: ApiVersion,
    },
}

/// An operation the gate refused before any HTTP call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[error("{operation} not allowed: {reason}")]
pub struct OperationNotAllowedError {
    pub operation: &'static str,
    pub reason: GateDenial,
}
