//! In-Memory Storage Engine
//!
//! Process-local maps behind one `tokio::sync::RwLock`. Every write happens
//! inside a single write guard, so email uniqueness holds under concurrent
//! registration the same way the database constraint does.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::{app::App, user::User};
use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
use crate::domain::value_object::{
    app_id::AppId, app_secret::AppSecret, email::Email, user_id::UserId,
    user_password::UserPassword,
};
use crate::error::{StorageError, StorageResult};

#[derive(Default)]
struct MemoryStore {
    users: HashMap<UserId, User>,
    user_ids_by_email: HashMap<Email, UserId>,
    apps: HashMap<AppId, App>,
    last_user_id: i64,
}

/// Cloning shares the underlying maps
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    store: Arc<RwLock<MemoryStore>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision an app
    pub async fn insert_app(&self, app_id: AppId, name: impl Into<String>, secret: AppSecret) {
        let app = App {
            id: app_id,
            name: name.into(),
            secret,
        };
        self.store.write().await.apps.insert(app_id, app);
    }

    /// Grant or revoke the admin flag
    pub async fn set_admin(&self, user_id: UserId, is_admin: bool) -> StorageResult<()> {
        let mut store = self.store.write().await;
        let user = store.users.get_mut(&user_id).ok_or(StorageError::UserNotFound)?;
        user.is_admin = is_admin;
        Ok(())
    }

    /// Stored hash for an email, if any
    pub async fn password_hash(&self, email: &Email) -> Option<UserPassword> {
        let store = self.store.read().await;
        let user_id = store.user_ids_by_email.get(email)?;
        store.users.get(user_id).map(|u| u.password_hash.clone())
    }

    pub async fn user_count(&self) -> usize {
        self.store.read().await.users.len()
    }
}

impl UserSaver for InMemoryAuthRepository {
    async fn save_user(&self, email: &Email, password_hash: &UserPassword) -> StorageResult<UserId> {
        let mut store = self.store.write().await;

        if store.user_ids_by_email.contains_key(email) {
            return Err(StorageError::UserExists);
        }

        store.last_user_id += 1;
        let user_id = UserId::new(store.last_user_id);
        store.user_ids_by_email.insert(email.clone(), user_id);
        store.users.insert(
            user_id,
            User {
                id: user_id,
                email: email.clone(),
                password_hash: password_hash.clone(),
                is_admin: false,
            },
        );

        Ok(user_id)
    }
}

impl UserProvider for InMemoryAuthRepository {
    async fn user(&self, email: &Email) -> StorageResult<User> {
        let store = self.store.read().await;
        store
            .user_ids_by_email
            .get(email)
            .and_then(|id| store.users.get(id))
            .cloned()
            .ok_or(StorageError::UserNotFound)
    }

    async fn is_admin(&self, user_id: UserId) -> StorageResult<bool> {
        self.store
            .read()
            .await
            .users
            .get(&user_id)
            .map(|u| u.is_admin)
            .ok_or(StorageError::UserNotFound)
    }
}

impl AppProvider for InMemoryAuthRepository {
    async fn app(&self, app_id: AppId) -> StorageResult<App> {
        self.store
            .read()
            .await
            .apps
            .get(&app_id)
            .cloned()
            .ok_or(StorageError::AppNotFound)
    }
}
