//! Static validation schema for auth form input.
//!
//! DESIGN
//! ======
//! Pure functions checked before any network call; a failing field blocks
//! submission entirely. Emails are trimmed and normalized, passwords are
//! taken verbatim (leading/trailing whitespace is significant).

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Minimum accepted password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Validate and normalize an email address.
///
/// # Errors
///
/// Returns the inline message to show under the field when the value is
/// empty or lacks `local@domain.tld` shape.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err("Email is required.");
    }
    if !has_email_shape(value) {
        return Err("Please enter a valid email address.");
    }
    Ok(value.to_owned())
}

fn has_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Validate a password against the minimum-length rule.
///
/// # Errors
///
/// Returns the inline message to show under the field when the password is
/// shorter than [`PASSWORD_MIN_LEN`] characters.
pub fn validate_password(raw: &str) -> Result<String, &'static str> {
    if raw.chars().count() < PASSWORD_MIN_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(raw.to_owned())
}
