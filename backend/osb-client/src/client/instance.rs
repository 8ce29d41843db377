use super::{Operation, OsbClient};
use crate::error::OsbError;
use crate::version::ApiVersion;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const GET_INSTANCE: Operation = Operation {
    name: "GetInstance",
    alpha: true,
    min_version: Some(ApiVersion::V2_14),
};

/// Identifies the service instance to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetInstanceRequest {
    pub instance_id: String,
}

impl GetInstanceRequest {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), OsbError> {
        if self.instance_id.is_empty() {
            return Err(OsbError::Validation {
                message: "instance_id is required".to_string(),
            });
        }
        Ok(())
    }
}

/// A provisioned service instance as returned by the broker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetInstanceResponse {
    #[serde(default)]
    pub service_id: String,

    #[serde(default)]
    pub plan_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,

    /// Provisioning parameters, when the broker chooses to echo them back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
}

impl OsbClient {
    /// Fetch an existing service instance.
    ///
    /// GET `/v2/service_instances/{instance_id}`. Alpha operation: requires
    /// the alpha flag and API version 2.14.
    pub async fn get_instance(
        &self,
        request: &GetInstanceRequest,
    ) -> Result<GetInstanceResponse, OsbError> {
        self.validate_operation_allowed(GET_INSTANCE)?;
        request.validate()?;

        let url = self.url_for(&format!("v2/service_instances/{}", request.instance_id))?;

        self.get_json(GET_INSTANCE.name, url).await
    }
}
