/**
 * Account Service
 *
 * Registration and credential checks. Handlers and guards call into this
 * module; it owns password hashing and the user/wallet write.
 *
 * # Registration Process
 *
 * 1. Validate the request fields
 * 2. Reject taken usernames and emails
 * 3. Hash the password with bcrypt
 * 4. Insert the user and its wallet in one transaction
 *
 * # Validation
 *
 * - Username: 3-30 chars, starts with a letter, letters/digits/underscores
 * - Password: at least 8 characters
 * - Email: must contain '@'
 * - Fullname: not blank
 * - Birthdate: not in the future
 */

use bcrypt::{hash, verify};
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::backend::auth::users::{get_user_by_email, get_user_by_username, insert_user, NewUser, User};
use crate::backend::error::BackendError;
use crate::backend::wallet::repository::create_wallet;
use crate::shared::{RegisterRequest, SharedError};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check every registration field, reporting the first failure.
pub fn validate_registration(request: &RegisterRequest, today: NaiveDate) -> Result<(), SharedError> {
    if !is_valid_username(&request.username) {
        return Err(SharedError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    if !request.email.contains('@') {
        return Err(SharedError::validation("email", "Invalid email format"));
    }

    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }

    if request.fullname.trim().is_empty() {
        return Err(SharedError::validation("fullname", "Full name is required"));
    }

    if request.birthdate > today {
        return Err(SharedError::validation("birthdate", "Birthdate cannot be in the future"));
    }

    Ok(())
}

/// Register a new user together with an empty wallet.
///
/// # Errors
///
/// * `Validation` - a field failed validation
/// * `DuplicateUser` - username or email already registered
/// * `PasswordHash` / `Database` - infrastructure failures
pub async fn register(
    pool: &SqlitePool,
    request: &RegisterRequest,
    bcrypt_cost: u32,
) -> Result<User, BackendError> {
    validate_registration(request, Utc::now().date_naive())?;

    let email = request.email.trim();
    let fullname = request.fullname.trim();

    if get_user_by_username(pool, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(BackendError::duplicate("username"));
    }

    if get_user_by_email(pool, email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::duplicate("email"));
    }

    let password_hash = hash(&request.password, bcrypt_cost)?;

    let mut tx = pool.begin().await?;
    let user = insert_user(
        &mut *tx,
        &NewUser {
            username: &request.username,
            fullname,
            email,
            password_hash: &password_hash,
            birthdate: request.birthdate,
        },
    )
    .await
    .map_err(map_unique_violation)?;
    create_wallet(&mut *tx, user.id).await?;
    tx.commit().await?;

    tracing::info!("User registered: {} ({})", user.username, user.id);
    Ok(user)
}

/// Look up a user by username (or email, when the login contains '@') and
/// check the password.
///
/// # Errors
///
/// `InvalidCredentials` for an unknown user or a wrong password; both cases
/// look the same to the caller.
pub async fn validate_credentials(
    pool: &SqlitePool,
    login: &str,
    password: &str,
) -> Result<User, BackendError> {
    let user = if login.contains('@') {
        get_user_by_email(pool, login).await?
    } else {
        get_user_by_username(pool, login).await?
    };

    let Some(user) = user else {
        tracing::warn!("Sign in for unknown user: {}", login);
        return Err(BackendError::InvalidCredentials);
    };

    if !verify(password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", login);
        return Err(BackendError::InvalidCredentials);
    }

    Ok(user)
}

/// Two registrations racing past the lookups still hit the UNIQUE constraints.
fn map_unique_violation(err: sqlx::Error) -> BackendError {
    let duplicate_field = err.as_database_error().and_then(|db_err| {
        if !db_err.is_unique_violation() {
            None
        } else if db_err.message().contains("users.email") {
            Some("email")
        } else {
            Some("username")
        }
    });

    match duplicate_field {
        Some(field) => BackendError::duplicate(field),
        None => BackendError::Database(err),
    }
}
