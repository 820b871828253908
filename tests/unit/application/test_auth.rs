use crate::common::{client_with_token, client_without_token, workspace};
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use rossum_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_authenticate_stores_token_from_login_response() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({
            "username": "username",
            "password": "password"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key": "our-token", "domain": "custom-domain.app.rossum.ai"}"#)
        .create_async()
        .await;

    let client = client_with_token(&server);
    assert_ne!(client.token().as_deref(), Some("our-token"));

    let token = client.authenticate().await.expect("login should succeed");

    assert_eq!(token, "our-token");
    assert_eq!(client.token().as_deref(), Some("our-token"));
    login.assert_async().await;
}

#[tokio::test]
async fn test_authenticate_propagates_401() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/auth/login")
        .with_status(401)
        .create_async()
        .await;

    let client = client_with_token(&server);
    let err = client.authenticate().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(err.to_string().contains("401"));
    // A failed login leaves the previous token alone
    assert_eq!(client.token().as_deref(), Some("fake-token"));
    login.assert_async().await;
}

#[tokio::test]
async fn test_authenticate_rejects_response_without_key() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"domain": "custom-domain.app.rossum.ai"}"#)
        .create_async()
        .await;

    let client = client_without_token(&server);
    let err = client.authenticate().await.unwrap_err();

    match err {
        AppError::Deserialization(msg) => assert!(msg.contains("key")),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_token_can_be_set_and_cleared() {
    let server = Server::new_async().await;
    let client = client_without_token(&server);
    assert!(client.token().is_none());

    client.set_token(Some("injected".to_string()));
    assert_eq!(client.token().as_deref(), Some("injected"));

    client.set_token(None);
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_request_without_token_logs_in_first() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key": "new-token"}"#)
        .expect(1)
        .create_async()
        .await;
    let get = server
        .mock("GET", "/workspaces/7694")
        .match_header("authorization", "token new-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(workspace().to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_without_token(&server);
    let ws = client.fetch_one("workspaces", 7694).await.unwrap();

    assert_eq!(ws.get("id"), Some(&json!(7694)));
    assert_eq!(client.token().as_deref(), Some("new-token"));
    login.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn test_expired_token_is_refreshed_and_request_retried_once() {
    let mut server = Server::new_async().await;
    let stale = server
        .mock("GET", "/workspaces/7694")
        .match_header("authorization", "token fake-token")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key": "new-token"}"#)
        .expect(1)
        .create_async()
        .await;
    let fresh = server
        .mock("GET", "/workspaces/7694")
        .match_header("authorization", "token new-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(workspace().to_string())
        .expect(1)
        .create_async()
        .await;

    let client = client_with_token(&server);
    let ws = client.fetch_one("workspaces", 7694).await.unwrap();

    assert_eq!(serde_json::Value::Object(ws), workspace());
    stale.assert_async().await;
    login.assert_async().await;
    fresh.assert_async().await;
}

#[tokio::test]
async fn test_second_401_after_login_is_a_hard_failure() {
    let mut server = Server::new_async().await;
    let get = server
        .mock("GET", "/workspaces/7694")
        .with_status(401)
        .expect(2)
        .create_async()
        .await;
    let login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key": "new-token"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_with_token(&server);
    let err = client.fetch_one("workspaces", 7694).await.unwrap_err();

    assert!(err.is_unauthorized());
    get.assert_async().await;
    login.assert_async().await;
}

#[tokio::test]
async fn test_failed_relogin_propagates_login_error() {
    let mut server = Server::new_async().await;
    let get = server
        .mock("GET", "/workspaces/7694")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("POST", "/auth/login")
        .with_status(403)
        .with_body("bad credentials")
        .create_async()
        .await;

    let client = client_with_token(&server);
    let err = client.fetch_one("workspaces", 7694).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert!(err.to_string().contains("bad credentials"));
    get.assert_async().await;
}

#[tokio::test]
async fn test_retried_request_error_is_final_outcome() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/workspaces/7694")
        .match_header("authorization", "token fake-token")
        .with_status(401)
        .create_async()
        .await;
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key": "new-token"}"#)
        .create_async()
        .await;
    let fresh = server
        .mock("GET", "/workspaces/7694")
        .match_header("authorization", "token new-token")
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let client = client_with_token(&server);
    let err = client.fetch_one("workspaces", 7694).await.unwrap_err();

    assert!(err.is_not_found());
    fresh.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_token() {
    let mut server = Server::new_async().await;
    let logout = server
        .mock("POST", "/auth/logout")
        .match_header("authorization", "token fake-token")
        .with_status(200)
        .with_body(r#"{"detail": "Successfully logged out."}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_with_token(&server);
    client.logout().await.unwrap();

    assert!(client.token().is_none());
    logout.assert_async().await;
}

#[tokio::test]
async fn test_logout_clears_token_even_when_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/auth/logout")
        .with_status(401)
        .create_async()
        .await;

    let client = client_with_token(&server);
    let err = client.logout().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_logout_without_token_is_a_no_op() {
    let mut server = Server::new_async().await;
    let logout = server
        .mock("POST", "/auth/logout")
        .expect(0)
        .create_async()
        .await;

    let client = client_without_token(&server);
    client.logout().await.unwrap();

    logout.assert_async().await;
}
