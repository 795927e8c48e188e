//! Client store against a live server
//!
//! The router is served on an ephemeral port and the store talks to it
//! through `HttpAccountClient`, so the session travels in a real cookie jar.

use chrono::NaiveDate;
use tokio::net::TcpListener;
use walletbox::backend::routes::create_router;
use walletbox::backend::server::config::connect_in_memory;
use walletbox::backend::AppState;
use walletbox::egui_app::api::{AccountBackend, HttpAccountClient};
use walletbox::egui_app::store::{Action, AppSnapshot, SignInError, Store};
use walletbox::egui_app::{Config, ConfirmationPrompt};
use walletbox::shared::{AppConfig, RegisterRequest, SignInRequest};

use crate::common::{test_config, TEST_PASSWORD};

struct FixedAnswer(bool);

impl ConfirmationPrompt for FixedAnswer {
    async fn confirm(&self, _: &str) -> bool {
        self.0
    }
}

async fn spawn_server() -> String {
    let pool = connect_in_memory().await.expect("in-memory database");
    let router = create_router(AppState::new(pool, test_config()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

fn client(server_url: String) -> HttpAccountClient {
    let config = Config::with_builder(AppConfig::builder().server_url(server_url)).unwrap();
    HttpAccountClient::new(config).unwrap()
}

fn alice() -> RegisterRequest {
    RegisterRequest {
        username: "alice".to_string(),
        password: TEST_PASSWORD.to_string(),
        birthdate: NaiveDate::from_ymd_opt(1990, 5, 4).unwrap(),
        fullname: "Alice Liddell".to_string(),
        email: "alice@example.com".to_string(),
    }
}

fn credentials(password: &str) -> SignInRequest {
    SignInRequest {
        username: "alice".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_sign_in_verify_sign_out() {
    let server_url = spawn_server().await;
    let backend = client(server_url.clone());
    let yes = FixedAnswer(true);
    let mut store = Store::new();

    store.dispatch_and_settle(Action::Register(alice()), &backend, &yes).await;
    assert!(store.snapshot().auth_status.signed_in);
    assert_eq!(store.snapshot().user().unwrap().username, "alice");

    // A fresh client has no cookie yet
    let backend = client(server_url);
    let mut store = Store::new();
    store.dispatch_and_settle(Action::SignIn(credentials(TEST_PASSWORD)), &backend, &yes).await;
    assert!(store.snapshot().auth_status.signed_in);
    assert!(backend.verify_auth().await.unwrap());

    store.dispatch_and_settle(Action::VerifyAuth, &backend, &yes).await;
    assert!(store.snapshot().auth_status.signed_in);

    store.dispatch_and_settle(Action::SignOut, &backend, &yes).await;
    assert_eq!(
        store.snapshot(),
        &AppSnapshot {
            session_epoch: 2,
            ..AppSnapshot::default()
        }
    );
    assert!(!backend.verify_auth().await.unwrap());

    store.dispatch_and_settle(Action::VerifyAuth, &backend, &yes).await;
    assert!(!store.snapshot().auth_status.signed_in);
}

#[tokio::test]
async fn test_wrong_password_is_invalid_credentials() {
    let server_url = spawn_server().await;
    let backend = client(server_url.clone());
    let yes = FixedAnswer(true);
    let mut store = Store::new();
    store.dispatch_and_settle(Action::Register(alice()), &backend, &yes).await;

    let backend = client(server_url);
    let mut store = Store::new();
    store.dispatch_and_settle(Action::SignIn(credentials("not-the-password")), &backend, &yes).await;

    assert!(!store.snapshot().auth_status.signed_in);
    assert!(!store.snapshot().sign_in_page.pending);
    assert_eq!(store.snapshot().sign_in_page.error, Some(SignInError::InvalidCredentials));
}

#[tokio::test]
async fn test_declined_sign_out_keeps_session() {
    let backend = client(spawn_server().await);
    let mut store = Store::new();
    store
        .dispatch_and_settle(Action::Register(alice()), &backend, &FixedAnswer(true))
        .await;

    store.dispatch_and_settle(Action::SignOut, &backend, &FixedAnswer(false)).await;

    assert!(store.snapshot().auth_status.signed_in);
    assert!(!store.snapshot().sign_out.pending);
    assert!(backend.verify_auth().await.unwrap());
}

#[tokio::test]
async fn test_get_user_restores_session() {
    let backend = client(spawn_server().await);
    let yes = FixedAnswer(true);
    let mut store = Store::new();
    store.dispatch_and_settle(Action::Register(alice()), &backend, &yes).await;

    // Same cookie jar, fresh state, like an app restart that kept its cookies
    let mut restarted = Store::new();
    restarted.dispatch_and_settle(Action::GetUser, &backend, &yes).await;

    assert!(restarted.snapshot().auth_status.signed_in);
    assert_eq!(restarted.snapshot().user(), store.snapshot().user());
}

#[tokio::test]
async fn test_unreachable_server_is_critical_error() {
    let backend = client("http://127.0.0.1:9".to_string());
    let mut store = Store::new();
    store
        .dispatch_and_settle(Action::SignIn(credentials(TEST_PASSWORD)), &backend, &FixedAnswer(true))
        .await;

    assert_eq!(store.snapshot().sign_in_page.error, Some(SignInError::CriticalError));
}
