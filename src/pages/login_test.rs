use super::*;

#[test]
fn email_without_at_structure_blocks_submission() {
    let result = validate_login_input("not-an-email", "longenough");
    assert_eq!(
        result,
        Err(LoginFieldErrors {
            email: Some("Please enter a valid email address."),
            password: None,
        })
    );
}

#[test]
fn short_password_blocks_submission() {
    let result = validate_login_input("user@example.com", "short");
    assert_eq!(
        result,
        Err(LoginFieldErrors {
            email: None,
            password: Some("Password must be at least 8 characters."),
        })
    );
}

#[test]
fn both_fields_are_reported_together() {
    let result = validate_login_input("", "1234567");
    assert_eq!(
        result,
        Err(LoginFieldErrors {
            email: Some("Email is required."),
            password: Some("Password must be at least 8 characters."),
        })
    );
}

#[test]
fn valid_input_builds_the_request_body() {
    let result = validate_login_input("  user@example.com ", "Pa55word!");
    assert_eq!(
        result,
        Ok(Credentials {
            email: "user@example.com".to_owned(),
            password: "Pa55word!".to_owned(),
        })
    );
}
