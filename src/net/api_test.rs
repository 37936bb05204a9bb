use super::*;

#[test]
fn api_base_defaults_to_same_origin_prefix() {
    assert_eq!(api_base(), "/api");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(503), "request failed: 503");
}

#[test]
fn error_message_prefers_backend_message_body() {
    let msg = error_message_from_body(401, r#"{"message":"Check your email or password."}"#);
    assert_eq!(msg, "Check your email or password.");
}

#[test]
fn error_message_falls_back_on_non_json_body() {
    assert_eq!(error_message_from_body(500, "<html>oops</html>"), "request failed: 500");
}

#[test]
fn error_message_falls_back_when_message_field_missing() {
    assert_eq!(error_message_from_body(404, r#"{"error":"x"}"#), "request failed: 404");
}

#[test]
fn posts_query_includes_all_set_params_in_order() {
    let query = posts_query(Some("HUMOR"), "popular", Some("ING"), 2, 12);
    assert_eq!(query, "category=HUMOR&sort=popular&status=ING&page=2&size=12");
}

#[test]
fn posts_query_omits_unset_filters() {
    let query = posts_query(None, "latest", None, 0, 24);
    assert_eq!(query, "sort=latest&page=0&size=24");
}

#[test]
fn api_error_display_includes_status_when_known() {
    let err = ApiError { status: 404, message: "request failed: 404".to_owned() };
    assert_eq!(err.to_string(), "request failed: 404 (HTTP 404)");
}

#[test]
fn api_error_display_omits_status_for_transport_failures() {
    let err = ApiError::transport("connection refused");
    assert_eq!(err.to_string(), "connection refused");
}
