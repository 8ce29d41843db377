//! Shared fixtures for the mock-broker tests.
//!
//! Everything here is a pure factory: fresh immutable values per call, no
//! shared mutable state between tests.

use osb_client::client::GetBindingRequest;
use osb_client::{ApiVersion, ClientConfiguration, OsbClient};

pub const TEST_INSTANCE_ID: &str = "test-instance-id";
pub const TEST_BINDING_ID: &str = "test-binding-id";

pub fn test_configuration(
    url: &str,
    api_version: ApiVersion,
    enable_alpha_features: bool,
) -> ClientConfiguration {
    ClientConfiguration {
        name: "test-broker".to_string(),
        url: url.to_string(),
        api_version,
        enable_alpha_features,
        timeout_seconds: 5,
        originating_identity: None,
    }
}

pub fn test_client(url: &str, api_version: ApiVersion, enable_alpha_features: bool) -> OsbClient {
    OsbClient::new(&test_configuration(url, api_version, enable_alpha_features))
        .expect("client construction failed")
}

pub fn default_get_binding_request() -> GetBindingRequest {
    GetBindingRequest::new(TEST_INSTANCE_ID, TEST_BINDING_ID)
}

pub fn ok_binding_body() -> String {
    r#"{
  "credentials": {
    "test-key": "foo"
  }
}"#
    .to_string()
}

/// Truncated on purpose - never decodes.
pub fn malformed_body() -> String {
    r#"{"foo":"bar"#.to_string()
}

pub fn conventional_failure_body() -> String {
    r#"{
  "error": "TestError",
  "description": "test error description"
}"#
    .to_string()
}
