//! Auth Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::application::{config::AuthConfig, service::AuthService};
use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
use crate::domain::service::{Clock, SystemClock};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::validator::RequestValidator;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(Arc::new(repo), &config, Arc::new(SystemClock))
}

/// Create a generic Auth router for any storage engine
pub fn auth_router_generic<R>(repo: Arc<R>, config: &AuthConfig, clock: Arc<dyn Clock>) -> Router
where
    R: UserSaver + UserProvider + AppProvider + Send + Sync + 'static,
{
    let state = AuthAppState {
        service: Arc::new(AuthService::with_repository(repo, config, clock)),
        validator: Arc::new(RequestValidator::new(config.password_policy())),
    };

    router_with_state(state)
}

/// Mount the auth routes over prepared state
pub fn router_with_state<R>(state: AuthAppState<R>) -> Router
where
    R: UserSaver + UserProvider + AppProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/is-admin", post(handlers::is_admin::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .with_state(state)
}
