//! Storage Contracts
//!
//! Capability traits the domain service depends on. Engines live in the
//! infrastructure layer. "Not found" and uniqueness conflicts are reported
//! as dedicated [`StorageError`](crate::error::StorageError) variants so the
//! service can translate them.

use crate::domain::entity::{app::App, user::User};
use crate::domain::value_object::{
    app_id::AppId, email::Email, user_id::UserId, user_password::UserPassword,
};
use crate::error::StorageResult;

/// Persists new users
#[trait_variant::make(UserSaver: Send)]
pub trait LocalUserSaver {
    /// Insert a user and return the assigned ID.
    ///
    /// Fails with `UserExists` when the email is taken. Uniqueness must be
    /// enforced atomically by the engine.
    async fn save_user(&self, email: &Email, password_hash: &UserPassword) -> StorageResult<UserId>;
}

/// Reads users
#[trait_variant::make(UserProvider: Send)]
pub trait LocalUserProvider {
    /// Find user by email; `UserNotFound` when absent
    async fn user(&self, email: &Email) -> StorageResult<User>;

    /// Admin flag of a user; `UserNotFound` when absent
    async fn is_admin(&self, user_id: UserId) -> StorageResult<bool>;
}

/// Resolves consuming applications
#[trait_variant::make(AppProvider: Send)]
pub trait LocalAppProvider {
    /// Find app by ID; `AppNotFound` when absent
    async fn app(&self, app_id: AppId) -> StorageResult<App>;
}
