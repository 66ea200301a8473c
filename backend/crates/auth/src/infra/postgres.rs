//! PostgreSQL Storage Engine
//!
//! Schema lives in `database/migrations`. Email uniqueness is enforced by the
//! `users_email_key` constraint, which makes concurrent registration safe.

use sqlx::PgPool;

use crate::domain::entity::{app::App, user::User};
use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
use crate::domain::value_object::{
    app_id::AppId, app_secret::AppSecret, email::Email, user_id::UserId,
    user_password::UserPassword,
};
use crate::error::{StorageError, StorageResult};

/// SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION))
}

// ============================================================================
// User storage
// ============================================================================

impl UserSaver for PgAuthRepository {
    async fn save_user(&self, email: &Email, password_hash: &UserPassword) -> StorageResult<UserId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, pass_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(email.as_str())
        .bind(password_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StorageError::UserExists
            } else {
                StorageError::Database(e)
            }
        })?;

        Ok(UserId::new(id))
    }
}

impl UserProvider for PgAuthRepository {
    async fn user(&self, email: &Email) -> StorageResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, pass_hash, is_admin
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).ok_or(StorageError::UserNotFound)
    }

    async fn is_admin(&self, user_id: UserId) -> StorageResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT is_admin FROM users WHERE id = $1")
            .bind(user_id.value())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::UserNotFound)
    }
}

// ============================================================================
// App storage
// ============================================================================

impl AppProvider for PgAuthRepository {
    async fn app(&self, app_id: AppId) -> StorageResult<App> {
        let row = sqlx::query_as::<_, AppRow>("SELECT id, name, secret FROM apps WHERE id = $1")
            .bind(app_id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.map(AppRow::into_app).ok_or(StorageError::AppNotFound)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    pass_hash: String,
    is_admin: bool,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::new(self.id),
            email: Email::from_db(self.email),
            password_hash: UserPassword::from_phc_string(self.pass_hash),
            is_admin: self.is_admin,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AppRow {
    id: i64,
    name: String,
    secret: String,
}

impl AppRow {
    fn into_app(self) -> App {
        App {
            id: AppId::new(self.id),
            name: self.name,
            secret: AppSecret::new(self.secret),
        }
    }
}
