use session::{CredentialStore, GateOutcome, MemoryStore, MountToken, RecordingNavigator, SessionGate, TOKEN_KEY};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::*;

/// Answers one HTTP request with `status_line` and `body`, returning the raw
/// request head and body it received.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0_u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            received.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&received) {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&received).into_owned()
    });
    (base_url, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(head_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..head_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    raw.len() >= head_end + 4 + content_length
}

fn client() -> reqwest::Client {
    build_client(Duration::from_secs(5)).unwrap()
}

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://auth.test/", VERIFY_PATH), "http://auth.test/auth/user");
    assert_eq!(endpoint("http://auth.test", LOGIN_PATH), "http://auth.test/auth/login");
}

#[tokio::test]
async fn verifier_sends_bearer_header_and_accepts_2xx() {
    let (base_url, server) = serve_once("200 OK", "{}").await;
    let verifier = HttpVerifier::new(client(), &base_url);

    let result = verifier.verify(&Credential::new("tok123").unwrap()).await;

    assert_eq!(result, Ok(()));
    let request = server.await.unwrap();
    assert!(request.starts_with("GET /auth/user HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("authorization: bearer tok123"));
}

#[tokio::test]
async fn verifier_maps_non_2xx_to_rejected() {
    let (base_url, _server) = serve_once("401 Unauthorized", "").await;
    let verifier = HttpVerifier::new(client(), &base_url);

    let result = verifier.verify(&Credential::new("expiredTok").unwrap()).await;

    assert_eq!(result, Err(VerifyError::Rejected { status: 401 }));
}

#[tokio::test]
async fn verifier_maps_connection_failure_to_transport() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let verifier = HttpVerifier::new(client(), &base_url);

    let result = verifier.verify(&Credential::new("tok").unwrap()).await;

    assert!(matches!(result, Err(VerifyError::Transport(_))));
}

#[tokio::test]
async fn gate_over_http_clears_expired_token() {
    let (base_url, _server) = serve_once("401 Unauthorized", "").await;
    let store = MemoryStore::with_token("expiredTok");
    let navigator = RecordingNavigator::new();
    let gate = SessionGate::new(&store, HttpVerifier::new(client(), &base_url), &navigator);

    let outcome = gate.check(&MountToken::new(), |_| {}).await;

    assert_eq!(outcome.state(), session::SessionState::Invalid);
    assert!(!store.contains(TOKEN_KEY));
    assert_eq!(navigator.routes(), vec!["/".to_owned()]);
}

#[tokio::test]
async fn gate_over_http_admits_valid_token() {
    let (base_url, _server) = serve_once("200 OK", "{\"username\":\"alice\"}").await;
    let store = MemoryStore::with_token("tok123");
    let navigator = RecordingNavigator::new();
    let gate = SessionGate::new(&store, HttpVerifier::new(client(), &base_url), &navigator);

    let outcome = gate.check(&MountToken::new(), |_| {}).await;

    assert_eq!(outcome, GateOutcome::Admitted);
    assert_eq!(store.get(TOKEN_KEY), Ok(Some("tok123".to_owned())));
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn login_posts_credentials_and_returns_token() {
    let (base_url, server) = serve_once("200 OK", "eyJ.token\n").await;

    let credential = login(&client(), &base_url, "alice", "secret").await.unwrap();

    assert_eq!(credential.as_str(), "eyJ.token");
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /auth/login HTTP/1.1"));
    assert!(request.contains(r#""username":"alice""#));
    assert!(request.contains(r#""password":"secret""#));
}

#[tokio::test]
async fn login_maps_unauthorized() {
    let (base_url, _server) = serve_once("401 Unauthorized", "Invalid credentials").await;

    let result = login(&client(), &base_url, "alice", "wrong").await;

    assert!(matches!(result, Err(CliError::InvalidCredentials)));
}

#[tokio::test]
async fn login_rejects_empty_token() {
    let (base_url, _server) = serve_once("200 OK", "  ").await;

    let result = login(&client(), &base_url, "alice", "secret").await;

    assert!(matches!(result, Err(CliError::LoginFailed(_))));
}
