//! HTTP Handlers
//!
//! Each handler validates its body, calls the domain service and maps the
//! result. Domain errors become responses through `From<AuthError> for AppError`.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::error::app_error::AppResult;

use crate::application::service::AuthService;
use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
use crate::presentation::dto::{
    IsAdminRequest, IsAdminResponse, LoginRequest, LoginResponse, LogoutRequest, LogoutResponse,
    RegisterRequest, RegisterResponse,
};
use crate::presentation::validator::RequestValidator;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserSaver + UserProvider + AppProvider + Send + Sync + 'static,
{
    pub service: Arc<AuthService<R, R, R>>,
    pub validator: Arc<RequestValidator>,
}

impl<R> Clone for AuthAppState<R>
where
    R: UserSaver + UserProvider + AppProvider + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            validator: self.validator.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<Json<RegisterResponse>>
where
    R: UserSaver + UserProvider + AppProvider + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let input = state.validator.register(req)?;

    let user_id = state
        .service
        .register_new_user(&input.email, input.password)
        .await?;

    Ok(Json(RegisterResponse {
        user_id: user_id.value(),
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>>
where
    R: UserSaver + UserProvider + AppProvider + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let input = state.validator.login(req)?;

    let token = state
        .service
        .login(&input.email, input.password, input.app_id)
        .await?;

    Ok(Json(LoginResponse { token }))
}

// ============================================================================
// Is Admin
// ============================================================================

/// POST /api/auth/is-admin
pub async fn is_admin<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<IsAdminRequest>, JsonRejection>,
) -> AppResult<Json<IsAdminResponse>>
where
    R: UserSaver + UserProvider + AppProvider + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let user_id = state.validator.is_admin(req)?;

    let is_admin = state.service.is_admin(user_id).await?;

    Ok(Json(IsAdminResponse { is_admin }))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
///
/// Tokens are stateless and expire on their own; there is nothing to revoke.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LogoutRequest>, JsonRejection>,
) -> AppResult<Json<LogoutResponse>>
where
    R: UserSaver + UserProvider + AppProvider + Send + Sync + 'static,
{
    let Json(req) = payload?;
    state.validator.logout(&req)?;

    tracing::debug!("logout acknowledged");

    Ok(Json(LogoutResponse { success: true }))
}
