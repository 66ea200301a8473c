//! Register New User

use crate::application::service::AuthService;
use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::RawPassword};
use crate::error::{AuthError, AuthErrorKind, AuthResult, Operation, StorageError};

impl<S, P, A> AuthService<S, P, A>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
{
    /// Hash the password and persist a new user.
    ///
    /// A taken email fails with `UserExists` and leaves the existing record
    /// untouched.
    pub async fn register_new_user(&self, email: &Email, password: RawPassword) -> AuthResult<UserId> {
        const OP: Operation = Operation::RegisterNewUser;
        tracing::info!(operation = %OP, "registering user");

        let password_hash = self.credentials.hash(password).await.map_err(|e| {
            tracing::error!(operation = %OP, error = %e, "failed to generate password hash");
            AuthError::new(OP, AuthErrorKind::Hashing).with_source(e)
        })?;

        let user_id = match self.user_saver.save_user(email, &password_hash).await {
            Ok(id) => id,
            Err(StorageError::UserExists) => {
                tracing::warn!(operation = %OP, "user already exists");
                return Err(AuthError::new(OP, AuthErrorKind::UserExists));
            }
            Err(e) => {
                tracing::error!(operation = %OP, error = %e, "failed to save user");
                return Err(AuthError::storage(OP, e));
            }
        };

        tracing::info!(operation = %OP, user_id = %user_id, "user registered");

        Ok(user_id)
    }
}
