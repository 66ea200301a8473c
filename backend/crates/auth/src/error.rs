//! Auth Error Types
//!
//! Two layers:
//! - [`StorageError`] is what storage engines report through the repository
//!   traits.
//! - [`AuthError`] is what the domain service reports: which operation failed,
//!   a closed [`AuthErrorKind`], and the underlying cause for logs.
//!
//! Both integrate with the unified `kernel::error::AppError` at the transport
//! boundary, where the cause is dropped from the response.

use std::error::Error as StdError;
use std::fmt;

use axum::response::{IntoResponse, Response};
use derive_more::Display;
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Storage result type alias
pub type StorageResult<T> = Result<T, StorageError>;

// ============================================================================
// Storage errors
// ============================================================================

/// Errors reported by storage engines
#[derive(Debug, Error)]
pub enum StorageError {
    /// Email uniqueness conflict on insert
    #[error("user already exists")]
    UserExists,

    /// No user for the given email or ID
    #[error("user not found")]
    UserNotFound,

    /// No app for the given ID
    #[error("app not found")]
    AppNotFound,

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Storage invariant broken or engine failure without a driver error
    #[error("internal storage error: {0}")]
    Internal(String),
}

// ============================================================================
// Domain errors
// ============================================================================

/// Domain operation that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Operation {
    #[display("auth.Login")]
    Login,
    #[display("auth.RegisterNewUser")]
    RegisterNewUser,
    #[display("auth.IsAdmin")]
    IsAdmin,
}

/// Closed set of failure kinds callers can act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AuthErrorKind {
    #[display("user not found")]
    UserNotFound,
    #[display("user already exists")]
    UserExists,
    /// Unknown email or wrong password; callers cannot tell which
    #[display("invalid credentials")]
    InvalidCredentials,
    #[display("app not found")]
    AppNotFound,
    #[display("invalid app id")]
    InvalidAppId,
    #[display("internal storage error")]
    InternalStorage,
    #[display("password hashing failed")]
    Hashing,
    #[display("token signing failed")]
    TokenSigning,
}

impl AuthErrorKind {
    /// Kinds whose details must never reach the caller
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            AuthErrorKind::InternalStorage | AuthErrorKind::Hashing | AuthErrorKind::TokenSigning
        )
    }
}

/// Structured domain error: `{operation, kind, source}`
pub struct AuthError {
    operation: Operation,
    kind: AuthErrorKind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl AuthError {
    pub fn new(operation: Operation, kind: AuthErrorKind) -> Self {
        Self {
            operation,
            kind,
            source: None,
        }
    }

    /// Wrap a storage failure that has no domain meaning of its own
    pub fn storage(operation: Operation, err: StorageError) -> Self {
        Self::new(operation, AuthErrorKind::InternalStorage).with_source(err)
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn kind(&self) -> AuthErrorKind {
        self.kind
    }

    /// Convert to the caller-facing error. Internal kinds collapse to a
    /// generic message.
    pub fn to_app_error(&self) -> AppError {
        match self.kind {
            AuthErrorKind::InvalidCredentials => AppError::unauthorized("invalid email or password"),
            AuthErrorKind::UserExists => AppError::conflict("user already exists")
                .with_action("Sign in with the existing account"),
            AuthErrorKind::InvalidAppId | AuthErrorKind::AppNotFound => {
                AppError::bad_request("invalid app id")
            }
            AuthErrorKind::UserNotFound => AppError::not_found("user not found"),
            AuthErrorKind::InternalStorage
            | AuthErrorKind::Hashing
            | AuthErrorKind::TokenSigning => AppError::internal("internal error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        if self.kind.is_internal() {
            match &self.source {
                Some(source) => tracing::error!(
                    operation = %self.operation,
                    kind = %self.kind,
                    error = %source,
                    "Auth internal error"
                ),
                None => tracing::error!(
                    operation = %self.operation,
                    kind = %self.kind,
                    "Auth internal error"
                ),
            }
        } else {
            tracing::debug!(operation = %self.operation, kind = %self.kind, "Auth error");
        }
    }
}

impl fmt::Debug for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AuthError");
        builder.field("operation", &self.operation);
        builder.field("kind", &self.kind);
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation, self.kind)
    }
}

impl StdError for AuthError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        err.to_app_error()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_display_carries_operation_and_kind() {
        let err = AuthError::new(Operation::Login, AuthErrorKind::InvalidCredentials);
        assert_eq!(err.to_string(), "auth.Login: invalid credentials");
    }

    #[test]
    fn test_storage_wrap_keeps_cause() {
        let err = AuthError::storage(
            Operation::RegisterNewUser,
            StorageError::Internal("bad row".into()),
        );
        assert_eq!(err.kind(), AuthErrorKind::InternalStorage);
        assert_eq!(err.operation(), Operation::RegisterNewUser);
        assert_eq!(err.source().unwrap().to_string(), "internal storage error: bad row");
    }

    #[test]
    fn test_app_error_mapping() {
        let cases = [
            (AuthErrorKind::InvalidCredentials, ErrorKind::Unauthorized),
            (AuthErrorKind::UserExists, ErrorKind::Conflict),
            (AuthErrorKind::InvalidAppId, ErrorKind::BadRequest),
            (AuthErrorKind::AppNotFound, ErrorKind::BadRequest),
            (AuthErrorKind::UserNotFound, ErrorKind::NotFound),
            (AuthErrorKind::InternalStorage, ErrorKind::InternalServerError),
            (AuthErrorKind::Hashing, ErrorKind::InternalServerError),
            (AuthErrorKind::TokenSigning, ErrorKind::InternalServerError),
        ];

        for (kind, expected) in cases {
            let err = AuthError::new(Operation::Login, kind);
            assert_eq!(err.to_app_error().kind(), expected, "{kind}");
        }
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let err = AuthError::storage(
            Operation::IsAdmin,
            StorageError::Internal("column pass_hash is null".into()),
        );
        let app_err = AppError::from(err);
        assert_eq!(app_err.message(), "internal error");
        assert!(!app_err.to_string().contains("pass_hash"));
    }
}
