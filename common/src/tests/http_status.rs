use crate::HttpStatusCode;

/// **VALUE**: Verifies the 2xx/4xx/5xx classification boundaries.
///
/// **WHY THIS MATTERS**: The response interpreter branches on `is_success`
/// to decide between the success decode path and the error-envelope path.
/// An off-by-one here routes broker errors through the success decoder.
///
/// **BUG THIS CATCHES**: Would catch inclusive/exclusive range mistakes at
/// 199/200, 299/300, 399/400 and 499/500.
#[test]
fn given_boundary_codes_when_classified_then_ranges_are_half_open() {
    assert!(!HttpStatusCode(199).is_success());
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    assert!(!HttpStatusCode(399).is_client_error());
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

#[test]
fn given_u16_when_converted_then_displays_bare_number() {
    let status = HttpStatusCode::from(502);

    assert_eq!(status, HttpStatusCode(502));
    assert_eq!(status.to_string(), "502");
}
