//! Build-time client configuration.
//!
//! The identity service base URL is baked in at compile time from
//! `INDICHESS_AUTH_URL` (default `http://localhost:8080`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:8080";

pub const AUTH_BASE_URL: &str = match option_env!("INDICHESS_AUTH_URL") {
    Some(url) => url,
    None => DEFAULT_AUTH_BASE_URL,
};

/// "Current authenticated user" endpoint used to validate the token.
pub const VERIFY_PATH: &str = "/auth/user";
pub const LOGIN_PATH: &str = "/auth/login";
pub const GOOGLE_LOGIN_PATH: &str = "/oauth2/authorization/google";

/// Upper bound on a single verification request.
pub const VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Join `path` onto `base`, tolerating a trailing slash on the base.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Absolute URL of an identity service endpoint.
pub fn auth_url(path: &str) -> String {
    join_url(AUTH_BASE_URL, path)
}
