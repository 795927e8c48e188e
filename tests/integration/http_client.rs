//! HttpAccountClient against a mock server
//!
//! Status mapping, envelope decoding and the cookie jar, without a real
//! backend.

use assert_matches::assert_matches;
use serde_json::json;
use walletbox::egui_app::{AccountBackend, ApiError, Config, HttpAccountClient};
use chrono::NaiveDate;
use walletbox::shared::account::{
    CURRENT_USER_PATH, REGISTER_PATH, SIGNIN_PATH, SIGNOUT_PATH, VERIFY_AUTH_PATH,
};
use walletbox::shared::{AppConfig, RegisterRequest, SignInRequest};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpAccountClient {
    let config = Config::with_builder(AppConfig::builder().server_url(server.uri())).unwrap();
    HttpAccountClient::new(config).unwrap()
}

fn credentials() -> SignInRequest {
    SignInRequest {
        username: "alice".to_string(),
        password: "wonderland".to_string(),
    }
}

fn alice_envelope() -> serde_json::Value {
    json!({
        "error": "",
        "data": { "id": "7", "username": "alice", "fullname": "Alice Liddell" }
    })
}

#[tokio::test]
async fn test_sign_in_posts_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .and(body_json(json!({ "username": "alice", "password": "wonderland" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_envelope()))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client_for(&server).sign_in(&credentials()).await.unwrap();

    assert!(envelope.is_success());
    assert_eq!(envelope.data.unwrap().username, "alice");
}

#[tokio::test]
async fn test_error_status_carries_envelope_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": "Invalid username or password", "data": null })),
        )
        .mount(&server)
        .await;

    let error = client_for(&server).sign_in(&credentials()).await.unwrap_err();

    assert_eq!(
        error,
        ApiError::Status {
            status: 401,
            message: "Invalid username or password".to_string(),
        }
    );
    assert_eq!(error.status(), Some(401));
}

#[tokio::test]
async fn test_rejected_registration_has_empty_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REGISTER_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "", "data": null })))
        .mount(&server)
        .await;

    let request = RegisterRequest {
        username: "alice".to_string(),
        password: "short".to_string(),
        birthdate: NaiveDate::from_ymd_opt(1990, 5, 4).unwrap(),
        fullname: "Alice Liddell".to_string(),
        email: "alice@example.com".to_string(),
    };
    let error = client_for(&server).register(&request).await.unwrap_err();

    assert_eq!(
        error,
        ApiError::Status {
            status: 400,
            message: String::new(),
        }
    );
}

#[tokio::test]
async fn test_error_status_with_plain_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VERIFY_AUTH_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let error = client_for(&server).verify_auth().await.unwrap_err();

    assert_eq!(
        error,
        ApiError::Status {
            status: 502,
            message: "bad gateway".to_string(),
        }
    );
}

#[tokio::test]
async fn test_session_cookie_is_sent_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "SESSIONID=abc; Path=/; HttpOnly; SameSite=Lax")
                .set_body_json(alice_envelope()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(VERIFY_AUTH_PATH))
        .and(header("cookie", "SESSIONID=abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": "", "data": { "result": true } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.sign_in(&credentials()).await.unwrap();

    assert!(client.verify_auth().await.unwrap());
}

#[tokio::test]
async fn test_sign_out_clears_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "SESSIONID=abc; Path=/; HttpOnly")
                .set_body_json(alice_envelope()),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(SIGNOUT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "SESSIONID=; Path=/; HttpOnly; Max-Age=0")
                .set_body_json(json!({ "message": "Sign out succeeded" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CURRENT_USER_PATH))
        .and(header("cookie", "SESSIONID=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alice_envelope()))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(CURRENT_USER_PATH))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Unauthorized", "data": null })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.sign_in(&credentials()).await.unwrap();
    assert_eq!(client.current_user().await.unwrap().username, "alice");

    let response = client.sign_out().await.unwrap();
    assert_eq!(response.message, "Sign out succeeded");
    assert_matches!(
        client.current_user().await,
        Err(ApiError::Status { status: 401, .. })
    );
}

#[tokio::test]
async fn test_verify_auth_false_and_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VERIFY_AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "", "data": null })))
        .mount(&server)
        .await;

    assert!(!client_for(&server).verify_auth().await.unwrap());
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CURRENT_USER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    assert_matches!(client_for(&server).current_user().await, Err(ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = Config::with_builder(AppConfig::builder().server_url("http://127.0.0.1:9")).unwrap();
    let client = HttpAccountClient::new(config).unwrap();

    assert_matches!(client.verify_auth().await, Err(ApiError::Network(_)));
}
