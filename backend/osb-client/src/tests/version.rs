use crate::version::{ApiVersion, UnknownApiVersionError};

/// **VALUE**: Verifies the version total order used by the gate.
///
/// **WHY THIS MATTERS**: `at_least` is the whole basis for "is this
/// operation supported at this version". If the order is wrong, alpha
/// operations either leak to old brokers or get blocked everywhere.
///
/// **BUG THIS CATCHES**: Would catch a reordered or duplicated `order`
/// value when a new revision is added.
#[test]
fn given_known_versions_when_compared_then_order_is_total() {
    assert!(ApiVersion::V2_14.at_least(ApiVersion::V2_11));
    assert!(ApiVersion::V2_14.at_least(ApiVersion::V2_14));
    assert!(!ApiVersion::V2_11.at_least(ApiVersion::V2_14));
    assert!(ApiVersion::V2_13.at_least(ApiVersion::V2_12));
    assert!(!ApiVersion::V2_12.at_least(ApiVersion::V2_13));
}

#[test]
fn given_latest_alias_when_resolved_then_is_2_14() {
    assert_eq!(ApiVersion::LATEST, ApiVersion::V2_14);
    assert_eq!(ApiVersion::LATEST.label(), "2.14");
}

#[test]
fn given_version_when_displayed_then_renders_bare_label() {
    assert_eq!(ApiVersion::V2_11.to_string(), "2.11");
    assert_eq!(ApiVersion::V2_14.to_string(), "2.14");
}

/// **VALUE**: Verifies only the known revision set parses.
///
/// **WHY THIS MATTERS**: Configuration files carry versions as strings.
/// Accepting an unknown label would let a client negotiate a protocol
/// revision it does not actually understand.
///
/// **BUG THIS CATCHES**: Would catch a lenient fallback (e.g. defaulting
/// unknown labels to LATEST) sneaking into `FromStr`.
#[test]
fn given_labels_when_parsed_then_only_known_set_succeeds() {
    assert_eq!("2.11".parse::<ApiVersion>(), Ok(ApiVersion::V2_11));
    assert_eq!("2.14".parse::<ApiVersion>(), Ok(ApiVersion::V2_14));

    assert_eq!(
        "2.15".parse::<ApiVersion>(),
        Err(UnknownApiVersionError("2.15".to_string()))
    );
    assert!("".parse::<ApiVersion>().is_err());
    assert!("v2.14".parse::<ApiVersion>().is_err());
}

#[test]
fn given_version_when_serialized_then_round_trips_as_label_string() {
    let encoded = serde_json::to_string(&ApiVersion::V2_13).expect("encode failed");
    assert_eq!(encoded, r#""2.13""#);

    let decoded: ApiVersion = serde_json::from_str(&encoded).expect("decode failed");
    assert_eq!(decoded, ApiVersion::V2_13);

    let unknown: Result<ApiVersion, _> = serde_json::from_str(r#""3.0""#);
    assert!(unknown.is_err());
}
