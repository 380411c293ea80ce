//! HTTP authenticator against a mock login endpoint.

use login_form::auth::{AuthError, AuthSession, Authenticator, HttpAuthenticator, MemoryStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_answering(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "username": "alice@example.com",
            "password": "123456",
        })))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn ok_response_becomes_user() {
    let server = server_answering(ResponseTemplate::new(200).set_body_json(json!({
        "token": "jwt-token",
        "user_id": "3f2b8c1e-0000-4000-8000-000000000001",
        "username": "Alice",
    })))
    .await;

    let auth = HttpAuthenticator::new(&server.uri());
    let user = auth
        .authenticate("alice@example.com", "123456")
        .await
        .expect("200 logs in");
    assert_eq!(user.id, "3f2b8c1e-0000-4000-8000-000000000001");
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
}

#[tokio::test]
async fn unauthorized_is_invalid_credentials() {
    let server = server_answering(
        ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
    )
    .await;

    let err = HttpAuthenticator::new(&server.uri())
        .authenticate("alice@example.com", "123456")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.to_string(), "Email atau password salah");
}

#[tokio::test]
async fn other_status_is_rejected_with_server_message() {
    let server = server_answering(
        ResponseTemplate::new(403).set_body_json(json!({ "error": "Akun dikunci" })),
    )
    .await;

    let err = HttpAuthenticator::new(&server.uri())
        .authenticate("alice@example.com", "123456")
        .await
        .unwrap_err();
    match err {
        AuthError::Rejected(msg) => assert_eq!(msg, "Akun dikunci"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_an_error() {
    let server = server_answering(ResponseTemplate::new(200).set_body_json(json!({ "ok": true }))).await;

    let err = HttpAuthenticator::new(&server.uri())
        .authenticate("alice@example.com", "123456")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::Transport(_)));
}

#[tokio::test]
async fn session_surfaces_server_rejection_as_error() {
    let server = server_answering(
        ResponseTemplate::new(403).set_body_json(json!({ "message": "Terlalu banyak percobaan" })),
    )
    .await;

    let store = MemoryStore::default();
    let mut session = AuthSession::new(HttpAuthenticator::new(&server.uri()), Box::new(store.clone()));
    let outcome = session.login("alice@example.com", "123456").await;
    assert!(!outcome.is_success());
    assert_eq!(session.error(), Some("Terlalu banyak percobaan"));
    assert_eq!(store.current(), None);
}
