use crate::helpers::{conventional_failure_body, test_client};

use osb_client::{ApiVersion, OSB_API_VERSION_HEADER, OsbError};

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok_catalog_body() -> String {
    r#"{
  "services": [
    {
      "id": "service-id",
      "name": "test-service",
      "description": "a service for tests",
      "bindable": true,
      "tags": ["test"],
      "plans": [
        {
          "id": "plan-id",
          "name": "small",
          "description": "the small plan",
          "free": true
        }
      ]
    }
  ]
}"#
    .to_string()
}

/// **VALUE**: Verifies the catalog read works without alpha features at an
/// old API version.
///
/// **WHY THIS MATTERS**: GetCatalog is ungated - it must not inherit the
/// alpha/version gating of the binding operations. A regression here would
/// lock every old-broker integration out of service discovery.
#[tokio::test]
async fn given_old_version_without_alpha_when_get_catalog_then_returns_services() {
    // GIVEN: A 2.11 broker with one service and plan
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/catalog"))
        .and(header(OSB_API_VERSION_HEADER, "2.11"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ok_catalog_body(), "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::V2_11, false);

    // WHEN: Fetching the catalog
    let catalog = client.get_catalog().await.expect("GetCatalog failed");

    // THEN: The service decodes fully
    assert_eq!(catalog.services.len(), 1);
    let service = &catalog.services[0];
    assert_eq!(service.name, "test-service");
    assert!(service.bindable);
    assert_eq!(service.plans[0].free, Some(true));
    server.verify().await;
}

#[tokio::test]
async fn given_500_with_conventional_body_when_get_catalog_then_error_is_structured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/catalog"))
        .respond_with(
            ResponseTemplate::new(500).set_body_raw(conventional_failure_body(), "application/json"),
        )
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, false);

    let error = client.get_catalog().await.expect_err("expected error");

    match error {
        OsbError::StatusCode(e) => {
            assert_eq!(e.status, 500);
            assert_eq!(e.error_message.as_deref(), Some("TestError"));
        }
        other => panic!("expected status-code error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_empty_catalog_when_get_catalog_then_returns_no_services() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"services": []}"#, "application/json"))
        .mount(&server)
        .await;
    let client = test_client(&server.uri(), ApiVersion::LATEST, false);

    let catalog = client.get_catalog().await.expect("GetCatalog failed");

    assert!(catalog.services.is_empty());
}
