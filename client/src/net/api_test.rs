use super::*;

#[test]
fn any_2xx_status_verifies() {
    assert_eq!(status_result(200), Ok(()));
    assert_eq!(status_result(204), Ok(()));
    assert_eq!(status_result(299), Ok(()));
}

#[test]
fn non_2xx_status_is_rejected() {
    assert_eq!(status_result(401), Err(VerifyError::Rejected { status: 401 }));
    assert_eq!(status_result(302), Err(VerifyError::Rejected { status: 302 }));
    assert_eq!(status_result(500), Err(VerifyError::Rejected { status: 500 }));
}

#[test]
fn login_failed_message_maps_unauthorized() {
    assert_eq!(login_failed_message(401), "Invalid credentials");
    assert_eq!(login_failed_message(503), "login failed: 503");
}

#[test]
fn default_verifier_targets_current_user_endpoint() {
    let verifier = GlooVerifier::default();
    assert!(verifier.endpoint().ends_with("/auth/user"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn verifier_without_browser_reports_transport_error() {
    let verifier = GlooVerifier::new("http://auth.test/auth/user", Duration::from_secs(1));
    let credential = Credential::new("tok").unwrap();
    let result = futures::executor::block_on(verifier.verify(&credential));
    assert!(matches!(result, Err(VerifyError::Transport(_))));
}
