use super::{Operation, OsbClient};
use crate::error::OsbError;

use serde::{Deserialize, Serialize};

const GET_CATALOG: Operation = Operation {
    name: "GetCatalog",
    alpha: false,
    min_version: None,
};

const CATALOG_PATH: &str = "v2/catalog";

/// The services a broker offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub bindable: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_updateable: Option<bool>,
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free: Option<bool>,
}

impl OsbClient {
    /// Fetch the broker's service catalog.
    ///
    /// GET `/v2/catalog`. Available at every supported API version.
    pub async fn get_catalog(&self) -> Result<CatalogResponse, OsbError> {
        self.validate_operation_allowed(GET_CATALOG)?;

        let url = self.url_for(CATALOG_PATH)?;

        self.get_json(GET_CATALOG.name, url).await
    }
}
