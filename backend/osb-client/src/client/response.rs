//! Response interpretation: HTTP outcome to typed result or typed error.

use crate::error::{HttpStatusCodeError, OsbError};

use common::HttpStatusCode;

use log::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Wire-stable text for bodies that end before the JSON value does. Part
/// of the surfaced message contract, independent of the decoder's own
/// phrasing.
const EOF_RESPONSE_ERROR: &str = "unexpected end of JSON input";

/// The conventional broker error envelope. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: Option<String>,
    pub description: Option<String>,
}

/// Map a completed HTTP exchange to a typed result.
///
/// 2xx decodes into the success type; anything else decodes into the
/// conventional envelope. Either decode failing degrades to a
/// malformed-body [`HttpStatusCodeError`] that still reports the status.
/// Deterministic: one outcome, no retries.
pub(crate) fn interpret_response<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
) -> Result<T, OsbError> {
    let code = HttpStatusCode::from(status);

    if code.is_success() {
        return serde_json::from_slice(body)
            .map_err(|e| malformed_response(status, e).into());
    }

    if code.is_server_error() {
        warn!("broker returned server error: status={status}");
    }

    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => Err(HttpStatusCodeError {
            status,
            error_message: envelope.error,
            description: envelope.description,
            response_error: None,
        }
        .into()),
        Err(decode_error) => Err(malformed_response(status, decode_error).into()),
    }
}

fn malformed_response(status: u16, decode_error: serde_json::Error) -> HttpStatusCodeError {
    let text = if decode_error.is_eof() {
        EOF_RESPONSE_ERROR.to_string()
    } else {
        decode_error.to_string()
    };

    HttpStatusCodeError {
        status,
        error_message: None,
        description: None,
        response_error: Some(text),
    }
}
