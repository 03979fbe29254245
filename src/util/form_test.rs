use super::*;

#[test]
fn validate_email_trims_and_accepts_plain_addresses() {
    assert_eq!(
        validate_email("  user@example.com  "),
        Ok("user@example.com".to_owned())
    );
    assert_eq!(validate_email("a@b.c"), Ok("a@b.c".to_owned()));
}

#[test]
fn validate_email_requires_a_value() {
    assert_eq!(validate_email(""), Err("Email is required."));
    assert_eq!(validate_email("   "), Err("Email is required."));
}

#[test]
fn validate_email_rejects_missing_at_structure() {
    assert_eq!(
        validate_email("userexample.com"),
        Err("Please enter a valid email address.")
    );
    assert_eq!(validate_email("@example.com"), Err("Please enter a valid email address."));
    assert_eq!(validate_email("user@"), Err("Please enter a valid email address."));
}

#[test]
fn validate_email_rejects_undotted_or_malformed_domains() {
    assert_eq!(validate_email("user@example"), Err("Please enter a valid email address."));
    assert_eq!(validate_email("user@.com"), Err("Please enter a valid email address."));
    assert_eq!(validate_email("user@example."), Err("Please enter a valid email address."));
    assert_eq!(
        validate_email("user@@example.com"),
        Err("Please enter a valid email address.")
    );
    assert_eq!(
        validate_email("us er@example.com"),
        Err("Please enter a valid email address.")
    );
}

#[test]
fn validate_password_enforces_minimum_length() {
    assert_eq!(
        validate_password("short"),
        Err("Password must be at least 8 characters.")
    );
    assert_eq!(
        validate_password("1234567"),
        Err("Password must be at least 8 characters.")
    );
    assert_eq!(validate_password("12345678"), Ok("12345678".to_owned()));
}

#[test]
fn validate_password_keeps_whitespace_significant() {
    // Seven characters padded with spaces still counts as nine.
    assert_eq!(validate_password(" 1234567 "), Ok(" 1234567 ".to_owned()));
}
