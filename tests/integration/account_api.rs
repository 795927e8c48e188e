//! Account API integration tests
//!
//! Drive the full router (guards, handlers, error mapping) over an
//! in-memory SQLite database.

use axum::http::{header, Method, StatusCode};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::json;
use tower::ServiceExt;
use walletbox::backend::wallet::set_balance;
use walletbox::shared::account::{
    BALANCE_PATH, CURRENT_USER_PATH, REGISTER_PATH, SIGNIN_PATH, SIGNOUT_PATH, VERIFY_AUTH_PATH,
};

use crate::common::{read_json, registration_body, request, set_cookie, CookieJar, TestApp, TEST_PASSWORD};

async fn register_alice(app: &TestApp) -> String {
    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            REGISTER_PATH,
            Some(&registration_body("alice", "alice@example.com")),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    set_cookie(&response).expect("register sets the session cookie")
}

async fn verify(app: &TestApp, cookie: Option<&str>) -> serde_json::Value {
    let response = app
        .router
        .clone()
        .oneshot(request(Method::GET, VERIFY_AUTH_PATH, None, cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    read_json(response).await
}

#[tokio::test]
async fn test_register_signin_verify_signout_scenario() {
    let app = TestApp::new().await;
    let mut jar = CookieJar::default();

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            REGISTER_PATH,
            Some(&registration_body("alice", "alice@example.com")),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            SIGNIN_PATH,
            Some(&json!({ "username": "alice", "password": TEST_PASSWORD })),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    jar.update(&response);
    let body = read_json(response).await;
    assert_eq!(body["error"], "");
    assert_eq!(body["data"]["username"], "alice");

    let body = verify(&app, jar.header()).await;
    assert_eq!(body, json!({ "error": "", "data": { "result": true } }));

    let response = app
        .router
        .clone()
        .oneshot(request(Method::POST, SIGNOUT_PATH, None, jar.header()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    jar.update(&response);
    assert_eq!(read_json(response).await, json!({ "message": "Sign out succeeded" }));
    assert_eq!(jar.header(), None);

    let body = verify(&app, jar.header()).await;
    assert_eq!(body["data"]["result"], false);
}

#[tokio::test]
async fn test_register_returns_projection_without_credentials() {
    let app = TestApp::new().await;
    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            REGISTER_PATH,
            Some(&registration_body("alice", "alice@example.com")),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("SESSIONID="));
    assert!(cookie.contains("HttpOnly"));

    let body = read_json(response).await;
    let data = body["data"].as_object().unwrap();
    let mut keys: Vec<&str> = data.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["fullname", "id", "username"]);
    assert!(!body.to_string().contains(TEST_PASSWORD));
}

#[tokio::test]
async fn test_signin_with_wrong_password_is_401() {
    let app = TestApp::new().await;
    register_alice(&app).await;

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            SIGNIN_PATH,
            Some(&json!({ "username": "alice", "password": "not-the-password" })),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&response).is_none());
    assert_eq!(
        read_json(response).await,
        json!({ "error": "Invalid username or password", "data": null })
    );
}

#[tokio::test]
async fn test_signin_unknown_user_looks_like_wrong_password() {
    let app = TestApp::new().await;
    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            SIGNIN_PATH,
            Some(&json!({ "username": "nobody", "password": TEST_PASSWORD })),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(read_json(response).await["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_signin_by_email() {
    let app = TestApp::new().await;
    register_alice(&app).await;

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            SIGNIN_PATH,
            Some(&json!({ "username": "alice@example.com", "password": TEST_PASSWORD })),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["data"]["username"], "alice");
}

#[tokio::test]
async fn test_malformed_signin_body_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            SIGNIN_PATH,
            Some(&json!({ "username": "alice" })),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_cookie(&response).is_none());
    assert_eq!(read_json(response).await, json!({ "error": "", "data": null }));
}

#[tokio::test]
async fn test_malformed_registration_body_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .router
        .clone()
        .oneshot(request(Method::POST, REGISTER_PATH, Some(&json!({ "username": 3 })), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_cookie(&response).is_none());
    assert_eq!(read_json(response).await, json!({ "error": "", "data": null }));
}

#[tokio::test]
async fn test_verify_without_cookie_is_false() {
    let app = TestApp::new().await;
    let body = verify(&app, None).await;
    assert_eq!(body, json!({ "error": "", "data": { "result": false } }));
}

#[tokio::test]
async fn test_verify_with_forged_cookie_is_false() {
    let app = TestApp::new().await;
    let body = verify(&app, Some("SESSIONID=eyJhbGciOiJIUzI1NiJ9.e30.forged")).await;
    assert_eq!(body["data"]["result"], false);
}

#[tokio::test]
async fn test_signout_requires_session() {
    let app = TestApp::new().await;
    let response = app
        .router
        .clone()
        .oneshot(request(Method::POST, SIGNOUT_PATH, None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&response).is_none());
    assert_eq!(read_json(response).await, json!({ "error": "Unauthorized", "data": null }));
}

#[tokio::test]
async fn test_signout_clears_cookie() {
    let app = TestApp::new().await;
    let cookie = register_alice(&app).await;

    let response = app
        .router
        .clone()
        .oneshot(request(Method::POST, SIGNOUT_PATH, None, Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let header = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(header.starts_with("SESSIONID=;"));
    assert!(header.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_duplicate_registration_is_conflict() {
    let app = TestApp::new().await;
    register_alice(&app).await;

    let response = app
        .router
        .clone()
        .oneshot(request(
            Method::POST,
            REGISTER_PATH,
            Some(&registration_body("alice", "other@example.com")),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        read_json(response).await,
        json!({ "error": "A user with this username already exists", "data": null })
    );
}

#[tokio::test]
async fn test_invalid_registration_is_bad_request() {
    let app = TestApp::new().await;
    let mut body = registration_body("alice", "alice@example.com");
    body["password"] = json!("short");

    let response = app
        .router
        .clone()
        .oneshot(request(Method::POST, REGISTER_PATH, Some(&body), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(set_cookie(&response).is_none());
    assert_eq!(read_json(response).await, json!({ "error": "", "data": null }));
}

#[tokio::test]
async fn test_current_user_and_balance() {
    let app = TestApp::new().await;
    let cookie = register_alice(&app).await;

    let response = app
        .router
        .clone()
        .oneshot(request(Method::GET, CURRENT_USER_PATH, None, Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let user = read_json(response).await;
    assert_eq!(user["data"]["username"], "alice");
    assert_eq!(user["data"]["fullname"], "Alice Liddell");

    let response = app
        .router
        .clone()
        .oneshot(request(Method::GET, BALANCE_PATH, None, Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(read_json(response).await, json!({ "error": "", "data": { "balance": "0" } }));

    let user_id = user["data"]["id"].as_str().unwrap().parse().unwrap();
    set_balance(&app.pool, user_id, Decimal::new(32, 1)).await.unwrap();

    let response = app
        .router
        .clone()
        .oneshot(request(Method::GET, BALANCE_PATH, None, Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(read_json(response).await["data"]["balance"], "4");
}

#[tokio::test]
async fn test_guarded_routes_reject_missing_session() {
    let app = TestApp::new().await;
    for path in [CURRENT_USER_PATH, BALANCE_PATH] {
        let response = app
            .router
            .clone()
            .oneshot(request(Method::GET, path, None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_404_envelope() {
    let app = TestApp::new().await;
    let response = app
        .router
        .clone()
        .oneshot(request(Method::GET, "/api/nothing-here", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await, json!({ "error": "Not found", "data": null }));
}
