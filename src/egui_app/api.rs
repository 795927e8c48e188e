/**
 * Account API Client
 *
 * The store talks to the server through the `AccountBackend` trait.
 * `HttpAccountClient` is the reqwest implementation used by the desktop
 * app; tests substitute an in-memory fake.
 *
 * The session lives in the client's cookie jar: sign in and register store
 * the `SESSIONID` cookie, later requests send it back, sign out clears it.
 */

use std::future::Future;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::shared::account::{
    CURRENT_USER_PATH, REGISTER_PATH, SIGNIN_PATH, SIGNOUT_PATH, VERIFY_AUTH_PATH,
};
use crate::shared::{
    ApiEnvelope, RegisterRequest, SignInRequest, SignOutResponse, UserProjection, VerifyAuthData,
};

/// Failure of a call to the account API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not what the endpoint promises
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Calls the client store needs from the server
pub trait AccountBackend: Send + Sync {
    /// `POST /api/account/signin`
    fn sign_in(
        &self,
        request: &SignInRequest,
    ) -> impl Future<Output = Result<ApiEnvelope<UserProjection>, ApiError>> + Send;

    /// `POST /api/account/register`
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<ApiEnvelope<UserProjection>, ApiError>> + Send;

    /// `POST /api/account/signout`
    fn sign_out(&self) -> impl Future<Output = Result<SignOutResponse, ApiError>> + Send;

    /// `GET /api/account/verifyAuth`
    fn verify_auth(&self) -> impl Future<Output = Result<bool, ApiError>> + Send;

    /// `GET /api/account/user`
    fn current_user(&self) -> impl Future<Output = Result<UserProjection, ApiError>> + Send;
}

/// reqwest implementation with a persistent cookie jar
#[derive(Debug, Clone)]
pub struct HttpAccountClient {
    client: Client,
    config: Config,
}

impl HttpAccountClient {
    /// Create a client for the server named in `config`
    ///
    /// # Errors
    ///
    /// `ApiError::Network` if the TLS backend cannot be initialised.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client, config })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.api_url(path);
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        read_body(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.api_url(path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        read_body(response).await
    }
}

/// Decode a success body, or turn an error status into `ApiError::Status`
/// carrying the envelope's `error` message when there is one.
async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text)
        .map(|envelope| envelope.error)
        .unwrap_or(text);

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

impl AccountBackend for HttpAccountClient {
    async fn sign_in(&self, request: &SignInRequest) -> Result<ApiEnvelope<UserProjection>, ApiError> {
        self.post_json(SIGNIN_PATH, request).await
    }

    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiEnvelope<UserProjection>, ApiError> {
        self.post_json(REGISTER_PATH, request).await
    }

    async fn sign_out(&self) -> Result<SignOutResponse, ApiError> {
        self.post_json(SIGNOUT_PATH, &serde_json::json!({})).await
    }

    async fn verify_auth(&self) -> Result<bool, ApiError> {
        let envelope: ApiEnvelope<VerifyAuthData> = self.get_json(VERIFY_AUTH_PATH).await?;
        Ok(envelope.data.map(|data| data.result).unwrap_or(false))
    }

    async fn current_user(&self) -> Result<UserProjection, ApiError> {
        let envelope: ApiEnvelope<UserProjection> = self.get_json(CURRENT_USER_PATH).await?;
        match envelope.data {
            Some(user) if envelope.error.is_empty() => Ok(user),
            _ => Err(ApiError::Decode(format!("no user in response: {}", envelope.error))),
        }
    }
}
