use axum::extract::FromRef;
use lazy_static::lazy_static;
use regex::Regex;
use tokio::task;
use tracing::{info, warn};

use crate::auth::dto::{AuthResponse, PublicUser};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::User;
use crate::error::AppError;
use crate::state::AppState;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

// Uniqueness is on the normalized form, so lookups and inserts agree.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub async fn register_user(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<AuthResponse, AppError> {
    let email = normalize_email(email);

    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(AppError::Validation("Invalid email".into()));
    }
    if password.len() < 8 {
        warn!("password too short");
        return Err(AppError::Validation("Password too short".into()));
    }

    // Fast check; the unique constraint still decides under concurrency
    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(AppError::UserAlreadyExists);
    }

    let plain = password.to_string();
    let hash = task::spawn_blocking(move || hash_password(&plain)).await??;

    let user = match User::create(&state.db, &email, &hash).await {
        Ok(u) => u,
        Err(e) if is_unique_violation(&e) => {
            warn!(email = %email, "email registered concurrently");
            return Err(AppError::UserAlreadyExists);
        }
        Err(e) => return Err(e.into()),
    };

    let token = JwtKeys::from_ref(state).sign(user.id)?;
    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(AuthResponse {
        id: user.id,
        email: user.email,
        token,
    })
}

pub async fn login_user(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<AuthResponse, AppError> {
    let email = normalize_email(email);

    // Unknown email and wrong password answer identically
    let user = match User::find_by_email(&state.db, &email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "login with unknown email");
            return Err(AppError::InvalidCredentials);
        }
    };

    let plain = password.to_string();
    let stored = user.password_hash.clone();
    let ok = task::spawn_blocking(move || verify_password(&plain, &stored)).await??;
    if !ok {
        warn!(email = %email, user_id = user.id, "login with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let token = JwtKeys::from_ref(state).sign(user.id)?;
    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(AuthResponse {
        id: user.id,
        email: user.email,
        token,
    })
}

pub async fn get_profile(state: &AppState, user_id: i64) -> Result<PublicUser, AppError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(AppError::UserNotFound)?;
    Ok(PublicUser {
        id: user.id,
        email: user.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@x.com"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
    }
}
