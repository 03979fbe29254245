use super::*;

#[test]
fn name_is_required_and_trimmed() {
    assert_eq!(
        validate_registration_input("   ", "user@example.com", "Pa55word!"),
        Err("Enter your name.")
    );
    let request = validate_registration_input("  Alice ", "user@example.com", "Pa55word!").unwrap();
    assert_eq!(request.name, "Alice");
}

#[test]
fn email_rules_match_the_login_schema() {
    assert_eq!(
        validate_registration_input("Alice", "not-an-email", "Pa55word!"),
        Err("Please enter a valid email address.")
    );
}

#[test]
fn password_rules_match_the_login_schema() {
    assert_eq!(
        validate_registration_input("Alice", "user@example.com", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn valid_input_builds_the_request_body() {
    assert_eq!(
        validate_registration_input("Alice", " user@example.com ", "Pa55word!"),
        Ok(RegistrationRequest {
            name: "Alice".to_owned(),
            email: "user@example.com".to_owned(),
            password: "Pa55word!".to_owned(),
        })
    );
}
