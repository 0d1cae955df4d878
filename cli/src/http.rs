//! Identity service calls over `reqwest`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use session::{Credential, Verifier, VerifyError};

use crate::CliError;

pub const VERIFY_PATH: &str = "/auth/user";
pub const LOGIN_PATH: &str = "/auth/login";

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn verify_error(e: reqwest::Error) -> VerifyError {
    if e.is_timeout() { VerifyError::Timeout } else { VerifyError::Transport(e.to_string()) }
}

/// Builds the shared HTTP client with the configured timeouts.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, CliError> {
    Ok(reqwest::Client::builder().timeout(timeout).connect_timeout(timeout).build()?)
}

/// [`Verifier`] calling `GET <base>/auth/user` with the bearer token.
#[derive(Debug, Clone)]
pub struct HttpVerifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpVerifier {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self { client, endpoint: endpoint(base_url, VERIFY_PATH) }
    }
}

impl Verifier for HttpVerifier {
    fn verify(&self, credential: &Credential) -> impl Future<Output = Result<(), VerifyError>> {
        let request = self.client.get(&self.endpoint).header(AUTHORIZATION, credential.bearer());
        async move {
            let response = request.send().await.map_err(verify_error)?;
            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                Err(VerifyError::Rejected { status: status.as_u16() })
            }
        }
    }
}

/// Exchange username and password for a bearer token.
///
/// # Errors
///
/// Returns [`CliError::InvalidCredentials`] on 401, [`CliError::LoginFailed`]
/// on any other non-2xx status or an empty token, and [`CliError::Http`] on
/// transport failure.
pub async fn login(client: &reqwest::Client, base_url: &str, username: &str, password: &str) -> Result<Credential, CliError> {
    let response = client
        .post(endpoint(base_url, LOGIN_PATH))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await?;
    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(CliError::InvalidCredentials);
    }
    if !status.is_success() {
        return Err(CliError::LoginFailed(format!("HTTP {}", status.as_u16())));
    }
    let token = response.text().await?;
    Credential::new(token.trim()).ok_or_else(|| CliError::LoginFailed("empty token".to_owned()))
}
