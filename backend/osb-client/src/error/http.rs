use std::fmt;

use thiserror::Error as ThisError;

/// Renders an optional error field, with `<nil>` standing in for absence.
///
/// Every status-code error message goes through this one formatter so the
/// surfaced text stays stable.
pub(crate) struct NilOr<'a>(pub &'a Option<String>);

impl fmt::Display for NilOr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => f.write_str(value),
            None => f.write_str("<nil>"),
        }
    }
}

/// A non-success broker response, parsed or not.
///
/// Carries the conventional error envelope fields when the body decoded,
/// or the decode error text when it did not. The Display text is part of
/// the client's contract and must not change shape.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error(
    "Status: {status}; ErrorMessage: {}; Description: {}; ResponseError: {}",
    NilOr(.error_message),
    NilOr(.description),
    NilOr(.response_error)
)]
pub struct HttpStatusCodeError {
    /// Numeric HTTP status of the response.
    pub status: u16,

    /// Machine-readable error code from the conventional envelope.
    pub error_message: Option<String>,

    /// Human-readable description from the conventional envelope.
    pub description: Option<String>,

    /// Decode error text when the body could not be parsed.
    pub response_error: Option<String>,
}
