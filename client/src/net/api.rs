//! REST API helpers for the identity service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser, where the token lives.
//!
//! ERROR HANDLING
//! ==============
//! Verification failures map onto [`VerifyError`] so the session gate can
//! treat every failure the same way. Login returns `Result<_, String>` with a
//! message fit for the login form.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::time::Duration;

use session::{Credential, Verifier, VerifyError};

use crate::config;

/// Message shown when the identity service answers 401 to a login.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[cfg(any(test, feature = "hydrate"))]
fn status_result(status: u16) -> Result<(), VerifyError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(VerifyError::Rejected { status }) }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 { INVALID_CREDENTIALS.to_owned() } else { format!("login failed: {status}") }
}

/// Verifies a bearer token with `GET <auth>/auth/user`.
#[derive(Clone, Debug)]
pub struct GlooVerifier {
    endpoint: String,
    timeout: Duration,
}

impl GlooVerifier {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self { endpoint: endpoint.into(), timeout }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for GlooVerifier {
    fn default() -> Self {
        Self::new(config::auth_url(config::VERIFY_PATH), config::VERIFY_TIMEOUT)
    }
}

impl Verifier for GlooVerifier {
    fn verify(&self, credential: &Credential) -> impl Future<Output = Result<(), VerifyError>> {
        let endpoint = self.endpoint.clone();
        let bearer = credential.bearer();
        let timeout = self.timeout;
        async move {
            #[cfg(feature = "hydrate")]
            {
                use futures::future::{Either, select};

                let request = async {
                    let resp = gloo_net::http::Request::get(&endpoint)
                        .header("Authorization", &bearer)
                        .send()
                        .await
                        .map_err(|e| VerifyError::Transport(e.to_string()))?;
                    status_result(resp.status())
                };
                let timer = gloo_timers::future::sleep(timeout);
                futures::pin_mut!(request, timer);
                match select(request, timer).await {
                    Either::Left((result, _)) => result,
                    Either::Right(((), _)) => Err(VerifyError::Timeout),
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (endpoint, bearer, timeout);
                Err(VerifyError::Transport("not available on server".to_owned()))
            }
        }
    }
}

/// Log in with `POST <auth>/auth/login`; the response body is the token.
///
/// # Errors
///
/// Returns an error string if the request fails, the service rejects the
/// credentials, or the returned token is empty.
pub async fn login(username: &str, password: &str) -> Result<Credential, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(&config::auth_url(config::LOGIN_PATH))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let token = resp.text().await.map_err(|e| e.to_string())?;
        Credential::new(token.trim()).ok_or_else(|| "login returned an empty token".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}
