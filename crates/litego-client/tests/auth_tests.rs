/*
[INPUT]:  Mock authentication responses
[OUTPUT]: Test results for the session lifecycle
[POS]:    Integration tests - authentication
[UPDATE]: When auth endpoints or the fallback policy change
*/

mod common;

use common::{make_client, setup_mock_server};
use litego_client::{ApiResult, AuthManager, Credentials};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_authenticate_returns_only_server_issued_tokens() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/merchant/authenticate"))
        .and(body_json(serde_json::json!({
            "merchant_id": "m1",
            "secret_key": "s1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "auth_token": "A",
            "refresh_token": "R",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager = AuthManager::new(make_client(&server), Credentials::new("m1", "s1"));
    let tokens = manager
        .authenticate()
        .await
        .expect("transport")
        .into_value()
        .expect("success");

    assert_eq!(tokens.auth_token, "A");
    assert_eq!(tokens.refresh_token, "R");

    // The success payload carries the issued tokens and nothing else
    let serialized = serde_json::to_string(&tokens).unwrap();
    assert!(!serialized.contains("s1"));
    assert!(!serialized.contains("m1"));
}

#[tokio::test]
async fn test_session_renewal_end_to_end() {
    // Scenario: authenticate, then the refresh token expires; the next
    // renewal must fall back to a single full authenticate.
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/merchant/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "auth_token": "A",
            "refresh_token": "R",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager = AuthManager::new(make_client(&server), Credentials::new("m1", "s1"));
    let first = manager
        .authenticate()
        .await
        .expect("transport")
        .into_value()
        .expect("success");
    assert_eq!(first.auth_token, "A");

    server.reset().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/merchant/me/refresh-auth"))
        .and(header("authorization", "Bearer R"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "name": "Forbidden",
            "detail": "expired",
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/merchant/authenticate"))
        .and(body_json(serde_json::json!({
            "merchant_id": "m1",
            "secret_key": "s1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "auth_token": "A2",
            "refresh_token": "R2",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let renewed = manager.reauthenticate().await.expect("renewal");
    assert_eq!(renewed.auth_token, "A2");
    assert_eq!(renewed.refresh_token, "R2");
    assert_eq!(manager.session().auth_token(), Some("A2".to_string()));
}

#[tokio::test]
async fn test_failure_carries_server_name_and_detail_verbatim() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/merchant/authenticate"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "name": "TooManyRequests",
            "detail": "slow down, please",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager = AuthManager::new(make_client(&server), Credentials::new("m1", "s1"));
    let result = manager.authenticate().await.expect("transport");

    assert_eq!(
        result,
        ApiResult::Failure {
            code: 429,
            error_name: "TooManyRequests".to_string(),
            error_message: "slow down, please".to_string(),
        }
    );
}

#[tokio::test]
async fn test_concurrent_reauthenticate_calls_are_serialized() {
    // Two callers hitting an expired session at once must not issue
    // duplicate authenticate calls: the guard serializes them and the
    // second caller refreshes with the token the first one stored.
    let server = setup_mock_server().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/merchant/me/refresh-auth"))
        .and(header("authorization", "Bearer R"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "name": "Forbidden",
            "detail": "expired",
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/merchant/me/refresh-auth"))
        .and(header("authorization", "Bearer R2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "auth_token": "A3",
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/merchant/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "auth_token": "A2",
            "refresh_token": "R2",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manager = std::sync::Arc::new(AuthManager::new(
        make_client(&server),
        Credentials::new("m1", "s1"),
    ));
    manager.session().set_tokens("A1", "R");

    let first = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.reauthenticate().await })
    };
    let second = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.reauthenticate().await })
    };

    let first = first.await.unwrap().expect("first renewal");
    let second = second.await.unwrap().expect("second renewal");

    let mut auth_tokens = vec![first.auth_token, second.auth_token];
    auth_tokens.sort();
    assert_eq!(auth_tokens, vec!["A2".to_string(), "A3".to_string()]);
}
