pub mod binding;
pub mod catalog;
pub mod instance;

pub(crate) mod response;

pub use binding::{GetBindingRequest, GetBindingResponse};
pub use catalog::{CatalogResponse, Plan, Service};
pub use instance::{GetInstanceRequest, GetInstanceResponse};

use crate::config::ClientConfiguration;
use crate::error::{GateDenial, OperationNotAllowedError, OsbError};
use crate::version::ApiVersion;
use crate::{ORIGINATING_IDENTITY_HEADER, OSB_API_VERSION_HEADER};

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// Gating metadata for one broker operation.
///
/// Which versions support which operations is data carried alongside each
/// operation, not logic inside the gate. Adding an operation never touches
/// the gate itself.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operation {
    pub name: &'static str,
    pub alpha: bool,
    pub min_version: Option<ApiVersion>,
}

/// HTTP client for a single broker.
///
/// Holds no mutable state; concurrent calls are safe as long as the
/// underlying transport is (reqwest's client is).
#[derive(Clone)]
pub struct OsbClient {
    base_url: Url,
    http: Client,
    api_version: ApiVersion,
    enable_alpha_features: bool,
    originating_identity: Option<String>,
}

impl OsbClient {
    pub fn new(configuration: &ClientConfiguration) -> Result<Self, OsbError> {
        configuration.validate()?;

        let base_url = Url::parse(&configuration.url)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(configuration.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url,
            http,
            api_version: configuration.api_version,
            enable_alpha_features: configuration.enable_alpha_features,
            originating_identity: configuration.originating_identity.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    fn prepare_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let mut request = request.header(OSB_API_VERSION_HEADER, self.api_version.label());
        if let Some(identity) = &self.originating_identity {
            request = request.header(ORIGINATING_IDENTITY_HEADER, identity);
        }
        request
    }

    /// The version gate. Alpha flag is checked before the version; the
    /// first failing check short-circuits, so a denied operation never
    /// reaches the transport.
    pub(crate) fn validate_operation_allowed(
        &self,
        operation: Operation,
    ) -> Result<(), OperationNotAllowedError> {
        if operation.alpha && !self.enable_alpha_features {
            return Err(OperationNotAllowedError {
                operation: operation.name,
                reason: GateDenial::AlphaFeaturesDisabled,
            });
        }

        if let Some(required) = operation.min_version
            && !self.api_version.at_least(required)
        {
            return Err(OperationNotAllowedError {
                operation: operation.name,
                reason: GateDenial::UnsupportedApiVersion {
                    current: self.api_version,
                    required,
                },
            });
        }

        Ok(())
    }

    /// Base + path splice. `Url::join` would drop a path prefix on the
    /// base URL, so the path is appended textually instead.
    fn url_for(&self, path: &str) -> Result<Url, OsbError> {
        let full = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&full)?)
    }

    /// One GET round trip: transport errors propagate verbatim, everything
    /// else goes through the response interpreter.
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation_name: &'static str,
        url: Url,
    ) -> Result<T, OsbError> {
        debug!("{operation_name}: GET {url}");

        let response = self.prepare_request(self.http.get(url)).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!("{operation_name}: status={status} body_len={}", body.len());

        response::interpret_response(status, &body)
    }
}
