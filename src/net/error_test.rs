use super::*;

fn rejected(status: u16, json: &str) -> ApiError {
    ApiError::Rejected {
        status,
        body: serde_json::from_str(json).ok(),
    }
}

#[test]
fn field_message_joins_server_list_with_commas() {
    let error = rejected(422, r#"{"errors":{"email":["already taken"]}}"#);
    assert_eq!(error.field_message("email"), Some("already taken".to_owned()));

    let error = rejected(422, r#"{"errors":{"email":["already taken","domain blocked"]}}"#);
    assert_eq!(
        error.field_message("email"),
        Some("already taken,domain blocked".to_owned())
    );
}

#[test]
fn field_message_is_none_without_a_body() {
    let error = ApiError::Rejected {
        status: 500,
        body: None,
    };
    assert_eq!(error.field_message("email"), None);
    assert_eq!(ApiError::Transport("fetch failed".to_owned()).field_message("email"), None);
}

#[test]
fn field_message_tolerates_bodies_without_the_field() {
    let error = rejected(422, r#"{"message":"Validation failed"}"#);
    assert_eq!(error.field_message("email"), None);

    let error = rejected(422, r#"{"errors":{"password":["too weak"]}}"#);
    assert_eq!(error.field_message("email"), None);
}

#[test]
fn field_message_is_none_for_an_empty_list() {
    let error = rejected(422, r#"{"errors":{"email":[]}}"#);
    assert_eq!(error.field_message("email"), None);
}

#[test]
fn message_prefers_server_text() {
    let error = rejected(422, r#"{"message":"These credentials do not match our records."}"#);
    assert_eq!(error.message(), "These credentials do not match our records.");
}

#[test]
fn message_falls_back_to_status() {
    let error = ApiError::Rejected {
        status: 503,
        body: None,
    };
    assert_eq!(error.message(), "request failed: 503");
}

#[test]
fn transport_message_passes_through() {
    let error = ApiError::Transport("fetch failed".to_owned());
    assert_eq!(error.message(), "fetch failed");
    assert_eq!(error.to_string(), "fetch failed");
}

#[test]
fn malformed_body_deserializes_to_none_and_does_not_panic() {
    let error = rejected(422, r#"{"errors":"not a map"}"#);
    assert_eq!(error.field_message("email"), None);
    assert_eq!(error.message(), "request failed: 422");
}
