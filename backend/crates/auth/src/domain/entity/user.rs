//! User Entity

use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};

/// Registered end user as read from storage.
///
/// Created by registration only; this service never updates or deletes users.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: UserPassword,
    pub is_admin: bool,
}
