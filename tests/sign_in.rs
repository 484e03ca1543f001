//! Sign-in redirect against a mock backend.

use serde_json::json;

use pokket::auth::SignIn;

mod common;
use common::{start_mock_backend, unused_addr, BackendScript, Hits, RecordingNavigator};

#[tokio::test]
async fn test_sign_in_navigates_to_issued_url() {
    let (addr, hits) = start_mock_backend(BackendScript::default()).await;
    let sign_in = SignIn::new(
        &format!("http://{}", addr),
        "/auth/google/url",
        RecordingNavigator::default(),
    );
    let busy = sign_in.busy();
    let mut error = None;

    let navigated = sign_in.sign_in(|message| error = Some(message)).await;

    assert!(navigated);
    assert!(error.is_none());
    assert!(!busy.is_busy());
    assert_eq!(Hits::count(&hits.auth), 1);

    let visited = sign_in.navigator().visited();
    assert_eq!(visited.len(), 1);
    assert_eq!(visited[0].host_str(), Some("accounts.google.com"));
    assert_eq!(visited[0].query(), Some("client_id=pokket"));
}

#[tokio::test]
async fn test_sign_in_failure_reaches_on_error() {
    let (addr, _hits) = start_mock_backend(BackendScript {
        auth: (500, json!({ "message": "OAuth client not configured" })),
        ..Default::default()
    })
    .await;
    let sign_in = SignIn::new(
        &format!("http://{}", addr),
        "/auth/google/url",
        RecordingNavigator::default(),
    );
    let mut error = None;

    let navigated = sign_in.sign_in(|message| error = Some(message)).await;

    assert!(!navigated);
    let message = error.expect("on_error not called");
    assert!(message.contains("HTTP 500"), "{}", message);
    assert!(message.contains("OAuth client not configured"));
    assert!(sign_in.navigator().visited().is_empty());
    assert!(!sign_in.busy().is_busy());
}

#[tokio::test]
async fn test_sign_in_with_backend_down() {
    let addr = unused_addr().await;
    let sign_in = SignIn::new(
        &format!("http://{}", addr),
        "/auth/google/url",
        RecordingNavigator::default(),
    );
    let mut calls = 0;

    let navigated = sign_in.sign_in(|_| calls += 1).await;

    assert!(!navigated);
    assert_eq!(calls, 1);
    assert!(!sign_in.busy().is_busy());
}

#[tokio::test]
async fn test_sign_in_refuses_script_url() {
    let (addr, hits) = start_mock_backend(BackendScript {
        auth: (200, json!({ "url": "javascript:alert(1)" })),
        ..Default::default()
    })
    .await;
    let sign_in = SignIn::new(
        &format!("http://{}", addr),
        "/auth/google/url",
        RecordingNavigator::default(),
    );
    let mut error = None;

    let navigated = sign_in.sign_in(|message| error = Some(message)).await;

    assert!(!navigated);
    assert_eq!(Hits::count(&hits.auth), 1);
    assert!(error.unwrap().contains("not http or https"));
    assert!(sign_in.navigator().visited().is_empty());
}
