//! Token Issuer
//!
//! Builds session tokens bound to one consuming app: HS256 keyed by that
//! app's secret, claims `{email, exp, id}`. Tokens are never persisted.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use platform::jwt::{self, JwtError, SessionClaims};
use thiserror::Error;

use crate::domain::service::clock::Clock;
use crate::domain::value_object::{app_secret::AppSecret, email::Email, user_id::UserId};

#[derive(Debug, Error)]
pub enum TokenIssueError {
    #[error("token ttl out of range")]
    TtlOutOfRange,

    #[error(transparent)]
    Jwt(#[from] JwtError),
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct TokenIssuer {
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Sign a token for `user_id` that expires `ttl` after now
    pub fn issue(
        &self,
        user_id: UserId,
        email: &Email,
        secret: &AppSecret,
        ttl: Duration,
    ) -> Result<IssuedToken, TokenIssueError> {
        let ttl = TimeDelta::from_std(ttl).map_err(|_| TokenIssueError::TtlOutOfRange)?;
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .ok_or(TokenIssueError::TtlOutOfRange)?;

        let claims = SessionClaims {
            email: email.as_str().to_string(),
            exp: expires_at.timestamp(),
            id: user_id.to_string(),
        };
        let token = jwt::sign_hs256(&claims, secret.as_bytes())?;

        Ok(IssuedToken { token, expires_at })
    }
}
