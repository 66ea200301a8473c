//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, storage contracts, credential and
//!   token services
//! - `application/` - The auth domain service (login, registration, admin check)
//! - `infra/` - Storage engines (PostgreSQL, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, request validation, router
//!
//! ## Features
//! - Registration with email + password
//! - Login scoped to a registered consuming app, returning an HS256 token
//!   signed with that app's secret
//! - Admin flag lookup
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application-wide pepper
//! - Tokens are stateless; logout is acknowledged but revokes nothing
//! - Unknown email and wrong password are indistinguishable to callers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

mod tests;

// Re-exports for convenience
pub use application::{config::AuthConfig, service::AuthService};
pub use domain::service::{Clock, FixedClock, SystemClock};
pub use error::{AuthError, AuthErrorKind, AuthResult, Operation, StorageError};
pub use infra::{memory::InMemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
