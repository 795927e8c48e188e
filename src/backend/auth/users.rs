/**
 * User Model and Database Operations
 *
 * This module holds the persisted user record and the queries over the
 * `users` table. Users are created on registration and only read afterwards;
 * the authentication code never mutates them.
 */

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{SqliteExecutor, SqlitePool};
use uuid::Uuid;

use crate::shared::UserProjection;

const USER_COLUMNS: &str = "id, username, fullname, email, password_hash, birthdate, created_at";

/// User record as stored in the database
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// Display name
    pub fullname: String,
    /// Email address (unique)
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Date of birth
    pub birthdate: NaiveDate,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Sanitized projection returned to clients
    pub fn projection(&self) -> UserProjection {
        UserProjection {
            id: self.id.to_string(),
            username: self.username.clone(),
            fullname: self.fullname.clone(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("fullname", &self.fullname)
            .field("email", &self.email)
            .field("birthdate", &self.birthdate)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Fields required to insert a user
pub struct NewUser<'a> {
    pub username: &'a str,
    pub fullname: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub birthdate: NaiveDate,
}

/// Insert a new user
///
/// Accepts any SQLite executor so registration can run it inside the same
/// transaction that creates the wallet.
///
/// # Errors
///
/// Unique violations on `username` or `email` surface as database errors;
/// the caller maps them to duplicate-user errors.
pub async fn insert_user<'e, E>(executor: E, new_user: &NewUser<'_>) -> Result<User, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let query = format!(
        "INSERT INTO users (id, username, fullname, email, password_hash, birthdate, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?) \
         RETURNING {USER_COLUMNS}"
    );

    sqlx::query_as::<_, User>(&query)
        .bind(Uuid::new_v4())
        .bind(new_user.username)
        .bind(new_user.fullname)
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .bind(new_user.birthdate)
        .bind(Utc::now())
        .fetch_one(executor)
        .await
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");
    sqlx::query_as::<_, User>(&query)
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Get user by email
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");
    sqlx::query_as::<_, User>(&query)
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}
