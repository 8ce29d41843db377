use super::{Operation, OsbClient};
use crate::error::OsbError;
use crate::version::ApiVersion;

use common::Credentials;

use serde::{Deserialize, Serialize};

const GET_BINDING: Operation = Operation {
    name: "GetBinding",
    alpha: true,
    min_version: Some(ApiVersion::V2_14),
};

/// Identifies the binding to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBindingRequest {
    pub instance_id: String,
    pub binding_id: String,
}

impl GetBindingRequest {
    pub fn new(instance_id: impl Into<String>, binding_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            binding_id: binding_id.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), OsbError> {
        if self.instance_id.is_empty() {
            return Err(OsbError::Validation {
                message: "instance_id is required".to_string(),
            });
        }
        if self.binding_id.is_empty() {
            return Err(OsbError::Validation {
                message: "binding_id is required".to_string(),
            });
        }
        Ok(())
    }
}

/// A service binding as returned by the broker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetBindingResponse {
    /// Credentials issued for this binding.
    #[serde(default)]
    pub credentials: Credentials,

    /// Syslog drain URL, for log-draining services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syslog_drain_url: Option<String>,

    /// Route service URL, for route services.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_service_url: Option<String>,
}

impl OsbClient {
    /// Fetch an existing service binding.
    ///
    /// GET `/v2/service_instances/{instance_id}/service_bindings/{binding_id}`.
    /// Alpha operation: requires the alpha flag and API version 2.14.
    ///
    /// # Errors
    ///
    /// Returns [`OsbError::NotAllowed`] without making an HTTP call when the
    /// gate denies, [`OsbError::Transport`] when the exchange could not
    /// complete, or [`OsbError::StatusCode`] for non-2xx and malformed
    /// responses.
    pub async fn get_binding(
        &self,
        request: &GetBindingRequest,
    ) -> Result<GetBindingResponse, OsbError> {
        self.validate_operation_allowed(GET_BINDING)?;
        request.validate()?;

        let url = self.url_for(&format!(
            "v2/service_instances/{}/service_bindings/{}",
            request.instance_id, request.binding_id
        ))?;

        self.get_json(GET_BINDING.name, url).await
    }
}
