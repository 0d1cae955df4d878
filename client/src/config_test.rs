use super::*;

#[test]
fn join_url_strips_trailing_slash() {
    assert_eq!(join_url("http://auth.test/", "/auth/user"), "http://auth.test/auth/user");
    assert_eq!(join_url("http://auth.test", "/auth/login"), "http://auth.test/auth/login");
}

#[test]
fn auth_url_uses_configured_base() {
    assert_eq!(auth_url(VERIFY_PATH), join_url(AUTH_BASE_URL, "/auth/user"));
}
