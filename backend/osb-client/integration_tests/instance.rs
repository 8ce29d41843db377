use crate::helpers::{TEST_INSTANCE_ID, malformed_body, test_client};

use osb_client::client::GetInstanceRequest;
use osb_client::{ApiVersion, OsbError};

use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INSTANCE_PATH: &str = "/v2/service_instances/test-instance-id";

fn default_get_instance_request() -> GetInstanceRequest {
    GetInstanceRequest::new(TEST_INSTANCE_ID)
}

fn ok_instance_body() -> String {
    r#"{
  "service_id": "service-id",
  "plan_id": "plan-id",
  "dashboard_url": "https://dashboard.example.com/test-instance-id"
}"#
    .to_string()
}

#[tokio::test]
async fn given_200_with_instance_body_when_get_instance_then_returns_decoded_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INSTANCE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ok_instance_body(), "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, true);

    let instance = client
        .get_instance(&default_get_instance_request())
        .await
        .expect("GetInstance failed");

    assert_eq!(instance.service_id, "service-id");
    assert_eq!(instance.plan_id, "plan-id");
    assert_eq!(
        instance.dashboard_url.as_deref(),
        Some("https://dashboard.example.com/test-instance-id")
    );
    assert_eq!(instance.parameters, None);
    server.verify().await;
}

/// **VALUE**: Verifies the gate denial text names the right operation.
///
/// **WHY THIS MATTERS**: The `<Operation> not allowed: ...` prefix comes
/// from per-operation metadata. A copy-paste error in the operation table
/// would blame the wrong method in every log line.
#[tokio::test]
async fn given_alpha_disabled_when_get_instance_then_no_http_call_and_exact_message() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, false);

    let error = client
        .get_instance(&default_get_instance_request())
        .await
        .expect_err("expected gate denial");

    assert_eq!(
        error.to_string(),
        "GetInstance not allowed: alpha API methods not allowed: alpha features must be enabled"
    );
    server.verify().await;
}

#[tokio::test]
async fn given_unsupported_api_version_when_get_instance_then_no_http_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::V2_13, true);

    let error = client
        .get_instance(&default_get_instance_request())
        .await
        .expect_err("expected gate denial");

    assert!(matches!(error, OsbError::NotAllowed(_)));
    server.verify().await;
}

#[tokio::test]
async fn given_200_with_malformed_body_when_get_instance_then_error_message_is_exact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INSTANCE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(malformed_body(), "application/json"))
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, true);

    let error = client
        .get_instance(&default_get_instance_request())
        .await
        .expect_err("expected malformed-body error");

    assert_eq!(
        error.to_string(),
        "Status: 200; ErrorMessage: <nil>; Description: <nil>; ResponseError: unexpected end of JSON input"
    );
}
