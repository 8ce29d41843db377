use crate::helpers::{
    conventional_failure_body, default_get_binding_request, malformed_body, ok_binding_body,
    test_client, test_configuration,
};

use osb_client::error::{GateDenial, HttpStatusCodeError, OperationNotAllowedError};
use osb_client::{
    ApiVersion, ORIGINATING_IDENTITY_HEADER, OSB_API_VERSION_HEADER, OsbClient, OsbError,
};

use serde_json::json;
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BINDING_PATH: &str = "/v2/service_instances/test-instance-id/service_bindings/test-binding-id";

/// **VALUE**: Verifies the full success path end to end against a mock
/// broker, including the URL template and the version header.
///
/// **WHY THIS MATTERS**: This is the one behavior everything else exists
/// for - a 200 with a well-formed body must come back as a typed response
/// whose credentials equal the decoded JSON key-for-key.
///
/// **BUG THIS CATCHES**: Would catch a broken URL template, a missing
/// `X-Broker-API-Version` header, or the response decode silently dropping
/// credential entries.
#[tokio::test]
async fn given_200_with_credentials_when_get_binding_then_returns_decoded_response() {
    // GIVEN: A broker that returns a well-formed binding at the exact path
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BINDING_PATH))
        .and(header(OSB_API_VERSION_HEADER, "2.14"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ok_binding_body(), "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, true);

    // WHEN: Fetching the binding
    let response = client
        .get_binding(&default_get_binding_request())
        .await
        .expect("GetBinding failed");

    // THEN: Credentials match the body key-for-key
    assert_eq!(response.credentials.len(), 1);
    assert_eq!(response.credentials.get("test-key"), Some(&json!("foo")));
    assert_eq!(response.syslog_drain_url, None);
    server.verify().await;
}

/// **VALUE**: Verifies transport failures surface as transport errors,
/// untouched.
///
/// **WHY THIS MATTERS**: When no response was received there is nothing to
/// interpret; wrapping or rewording the transport error would hide the
/// real network failure from callers.
#[tokio::test]
async fn given_unreachable_broker_when_get_binding_then_returns_transport_error() {
    // GIVEN: Nothing listening at the target address
    let client = test_client("http://127.0.0.1:1", ApiVersion::LATEST, true);

    // WHEN: Fetching the binding
    let error = client
        .get_binding(&default_get_binding_request())
        .await
        .expect_err("expected transport error");

    // THEN: The reqwest error passes through verbatim - the surfaced
    // message is exactly the inner transport error's own text
    let surfaced = error.to_string();
    match &error {
        OsbError::Transport(inner) => assert_eq!(surfaced, inner.to_string()),
        other => panic!("expected transport error, got {other:?}"),
    }
}

/// **VALUE**: Pins the exact malformed-body error text for a 200 response.
///
/// **WHY THIS MATTERS**: The message template (`Status: ...; ErrorMessage:
/// <nil>; ...`) is contract. Callers and dashboards match on it.
#[tokio::test]
async fn given_200_with_malformed_body_when_get_binding_then_error_message_is_exact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BINDING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(malformed_body(), "application/json"))
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, true);

    let error = client
        .get_binding(&default_get_binding_request())
        .await
        .expect_err("expected malformed-body error");

    assert_eq!(
        error.to_string(),
        "Status: 200; ErrorMessage: <nil>; Description: <nil>; ResponseError: unexpected end of JSON input"
    );
}

#[tokio::test]
async fn given_500_with_malformed_body_when_get_binding_then_error_message_is_exact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BINDING_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_raw(malformed_body(), "application/json"))
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, true);

    let error = client
        .get_binding(&default_get_binding_request())
        .await
        .expect_err("expected malformed-body error");

    assert_eq!(
        error.to_string(),
        "Status: 500; ErrorMessage: <nil>; Description: <nil>; ResponseError: unexpected end of JSON input"
    );
}

/// **VALUE**: Verifies a conventional failure envelope arrives as a
/// structured error, not just text.
#[tokio::test]
async fn given_500_with_conventional_body_when_get_binding_then_error_is_structured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BINDING_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_raw(conventional_failure_body(), "application/json"),
        )
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, true);

    let error = client
        .get_binding(&default_get_binding_request())
        .await
        .expect_err("expected status-code error");

    match error {
        OsbError::StatusCode(e) => assert_eq!(
            e,
            HttpStatusCodeError {
                status: 500,
                error_message: Some("TestError".to_string()),
                description: Some("test error description".to_string()),
                response_error: None,
            }
        ),
        other => panic!("expected status-code error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a gate denial makes zero HTTP calls and surfaces the
/// exact contract message.
///
/// **WHY THIS MATTERS**: Calling the broker for an operation the client
/// refused would be a side effect the caller never asked for. The
/// `expect(0)` mock proves the transport stays untouched.
///
/// **BUG THIS CATCHES**: Would catch the gate moving after the HTTP call,
/// or the denial text being reworded.
#[tokio::test]
async fn given_alpha_disabled_when_get_binding_then_no_http_call_and_exact_message() {
    // GIVEN: A broker that must not be contacted
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, false);

    // WHEN: Fetching the binding with alpha features disabled
    let error = client
        .get_binding(&default_get_binding_request())
        .await
        .expect_err("expected gate denial");

    // THEN: Exact denial text, and the mock saw zero requests
    assert_eq!(
        error.to_string(),
        "GetBinding not allowed: alpha API methods not allowed: alpha features must be enabled"
    );
    server.verify().await;
}

#[tokio::test]
async fn given_unsupported_api_version_when_get_binding_then_no_http_call_and_structured_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::V2_11, true);

    let error = client
        .get_binding(&default_get_binding_request())
        .await
        .expect_err("expected gate denial");

    match error {
        OsbError::NotAllowed(denial) => assert_eq!(
            denial,
            OperationNotAllowedError {
                operation: "GetBinding",
                reason: GateDenial::UnsupportedApiVersion {
                    current: ApiVersion::V2_11,
                    required: ApiVersion::V2_14,
                },
            }
        ),
        other => panic!("expected gate denial, got {other:?}"),
    }
    server.verify().await;
}

#[tokio::test]
async fn given_empty_binding_id_when_get_binding_then_validation_error_and_no_http_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, true);

    let mut request = default_get_binding_request();
    request.binding_id.clear();

    let error = client
        .get_binding(&request)
        .await
        .expect_err("expected validation error");

    assert!(matches!(error, OsbError::Validation { .. }));
    server.verify().await;
}

#[tokio::test]
async fn given_originating_identity_configured_when_get_binding_then_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BINDING_PATH))
        .and(header(ORIGINATING_IDENTITY_HEADER, "cloudfoundry faketoken"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ok_binding_body(), "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let mut configuration = test_configuration(&server.uri(), ApiVersion::LATEST, true);
    configuration.originating_identity = Some("cloudfoundry faketoken".to_string());
    let client = OsbClient::new(&configuration).expect("client construction failed");

    client
        .get_binding(&default_get_binding_request())
        .await
        .expect("GetBinding failed");

    server.verify().await;
}

/// **VALUE**: Verifies repeating an identical successful call yields an
/// identical response.
///
/// **WHY THIS MATTERS**: The façade and interpreter must hold no hidden
/// state; any divergence between two identical calls means state leaked
/// across invocations.
#[tokio::test]
async fn given_identical_calls_when_get_binding_twice_then_responses_are_equal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(BINDING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ok_binding_body(), "application/json"))
        .expect(2)
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, true);

    let first = client
        .get_binding(&default_get_binding_request())
        .await
        .expect("first call failed");
    let second = client
        .get_binding(&default_get_binding_request())
        .await
        .expect("second call failed");

    assert_eq!(first, second);
    server.verify().await;
}
