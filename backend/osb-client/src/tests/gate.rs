use crate::client::{Operation, OsbClient};
use crate::config::ClientConfiguration;
use crate::error::{GateDenial, OperationNotAllowedError};
use crate::version::ApiVersion;

const ALPHA_OPERATION: Operation = Operation {
    name: "GetBinding",
    alpha: true,
    min_version: Some(ApiVersion::V2_14),
};

const STABLE_OPERATION: Operation = Operation {
    name: "GetCatalog",
    alpha: false,
    min_version: None,
};

fn gate_client(api_version: ApiVersion, enable_alpha_features: bool) -> OsbClient {
    let configuration = ClientConfiguration {
        api_version,
        enable_alpha_features,
        ..ClientConfiguration::default()
    };
    OsbClient::new(&configuration).expect("client construction failed")
}

/// **VALUE**: Verifies the exact alpha-disabled denial surfaced to callers.
///
/// **WHY THIS MATTERS**: This message is part of the client's contract;
/// platform integrations match on it.
///
/// **BUG THIS CATCHES**: Would catch any rewording of the denial chain
/// ("GetBinding not allowed: alpha API methods not allowed: ...").
#[test]
fn given_alpha_disabled_when_gated_then_denial_message_is_exact() {
    let client = gate_client(ApiVersion::LATEST, false);

    let denial = client
        .validate_operation_allowed(ALPHA_OPERATION)
        .expect_err("gate should deny");

    assert_eq!(
        denial.to_string(),
        "GetBinding not allowed: alpha API methods not allowed: alpha features must be enabled"
    );
}

/// **VALUE**: Verifies the unsupported-version denial is structured, not
/// just a string.
///
/// **WHY THIS MATTERS**: Callers need the required and actual versions to
/// decide whether to renegotiate; a bare message would force them to parse
/// error text.
#[test]
fn given_old_version_when_gated_then_denial_names_both_versions() {
    let client = gate_client(ApiVersion::V2_11, true);

    let denial = client
        .validate_operation_allowed(ALPHA_OPERATION)
        .expect_err("gate should deny");

    assert_eq!(
        denial,
        OperationNotAllowedError {
            operation: "GetBinding",
            reason: GateDenial::UnsupportedApiVersion {
                current: ApiVersion::V2_11,
                required: ApiVersion::V2_14,
            },
        }
    );
    assert!(denial.to_string().contains("Current: 2.11, Expected: 2.14"));
}

/// **VALUE**: Verifies the alpha check runs before the version check.
///
/// **WHY THIS MATTERS**: The first failing check short-circuits. When both
/// would fail, callers must see the alpha denial - the fix (enable the
/// flag) is different from the fix for a version mismatch.
#[test]
fn given_both_checks_failing_when_gated_then_alpha_denial_wins() {
    let client = gate_client(ApiVersion::V2_11, false);

    let denial = client
        .validate_operation_allowed(ALPHA_OPERATION)
        .expect_err("gate should deny");

    assert_eq!(denial.reason, GateDenial::AlphaFeaturesDisabled);
}

#[test]
fn given_latest_version_and_alpha_enabled_when_gated_then_passes() {
    let client = gate_client(ApiVersion::LATEST, true);

    assert!(client.validate_operation_allowed(ALPHA_OPERATION).is_ok());
}

#[test]
fn given_stable_operation_when_gated_then_passes_at_any_version() {
    for version in [ApiVersion::V2_11, ApiVersion::V2_12, ApiVersion::V2_13] {
        let client = gate_client(version, false);

        assert!(
            client.validate_operation_allowed(STABLE_OPERATION).is_ok(),
            "stable operation denied at {version}"
        );
    }
}
