use super::*;

#[test]
fn no_content_is_the_only_success_status() {
    assert!(mutation_succeeded(NO_CONTENT));
    for status in [200, 201, 202, 302, 400, 401, 403, 422, 500, 503] {
        assert!(!mutation_succeeded(status), "{status} must not signal success");
    }
}
