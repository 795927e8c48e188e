/**
 * Session Tokens
 *
 * This module mints and verifies the signed session tokens (HS256 JWTs)
 * that travel in the `SESSIONID` cookie. A token is bound to a user id and
 * carries an expiry.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username at the time the token was issued
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// User ID the token is bound to
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Issues and checks session tokens with a single shared secret.
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl SessionIssuer {
    /// Create an issuer signing with `secret`; tokens live `ttl_secs` seconds.
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::default(),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Lifetime of freshly issued tokens, in seconds
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Create a signed token for a user
    ///
    /// # Arguments
    /// * `user` - The authenticated user
    ///
    /// # Returns
    /// The encoded JWT
    pub fn create_token(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        self.create_token_at(user, Utc::now().timestamp())
    }

    pub(crate) fn create_token_at(
        &self,
        user: &User,
        issued_at: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            exp: issued_at.saturating_add(self.ttl_secs),
            iat: issued_at,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Verify and decode a token
    ///
    /// # Errors
    /// Malformed, expired or wrongly signed tokens.
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Whether `token` is a valid, unexpired session token.
    ///
    /// Fails closed: a missing or broken token yields `false`, never an error.
    pub fn verify_token(&self, token: Option<&str>) -> bool {
        let Some(token) = token else {
            return false;
        };

        match self.decode(token) {
            Ok(claims) => claims.user_id().is_some(),
            Err(e) => {
                tracing::debug!("Session token rejected: {}", e);
                false
            }
        }
    }
}
