//! Common test utilities and helpers
//!
//! - In-memory application fixture
//! - Request builders
//! - A one-cookie jar that follows `Set-Cookie` like a browser would

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, Response};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use walletbox::backend::routes::create_router;
use walletbox::backend::server::config::connect_in_memory;
use walletbox::backend::{AppState, ServerConfig};

pub const TEST_PASSWORD: &str = "wonderland";

/// Server settings for tests: cheap bcrypt, fixed secret
pub fn test_config() -> ServerConfig {
    ServerConfig {
        jwt_secret: "integration-test-secret".to_string(),
        bcrypt_cost: 4,
        ..ServerConfig::default()
    }
}

/// Test application fixture
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = connect_in_memory().await.expect("in-memory database");
        let router = create_router(AppState::new(pool.clone(), test_config()));
        Self { router, pool }
    }
}

pub fn registration_body(username: &str, email: &str) -> Value {
    serde_json::json!({
        "username": username,
        "password": TEST_PASSWORD,
        "birthdate": "1990-05-04",
        "fullname": "Alice Liddell",
        "email": email,
    })
}

/// JSON request, optionally carrying a cookie
pub fn request(method: Method, uri: &str, body: Option<&Value>, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// `name=value` part of the response's `Set-Cookie` header
pub fn set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|pair| pair.trim().to_string())
}

/// Holds at most one session cookie, updated from responses
#[derive(Debug, Default)]
pub struct CookieJar {
    cookie: Option<String>,
}

impl CookieJar {
    pub fn update(&mut self, response: &Response<Body>) {
        if let Some(pair) = set_cookie(response) {
            let cleared = pair.ends_with('=');
            self.cookie = if cleared { None } else { Some(pair) };
        }
    }

    pub fn header(&self) -> Option<&str> {
        self.cookie.as_deref()
    }
}
