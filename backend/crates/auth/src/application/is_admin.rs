use crate::application::service::AuthService;
use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthErrorKind, AuthResult, Operation, StorageError};

impl<S, P, A> AuthService<S, P, A>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
{
    /// Whether the user holds the admin flag.
    ///
    /// An unknown user fails with `InvalidAppId`, not `UserNotFound`. Existing
    /// clients branch on that kind, so the mapping stays until they migrate.
    pub async fn is_admin(&self, user_id: UserId) -> AuthResult<bool> {
        const OP: Operation = Operation::IsAdmin;
        tracing::info!(operation = %OP, user_id = %user_id, "checking if user is admin");

        let is_admin = match self.user_provider.is_admin(user_id).await {
            Ok(flag) => flag,
            Err(StorageError::UserNotFound) => {
                tracing::warn!(operation = %OP, user_id = %user_id, "user not found");
                return Err(AuthError::new(OP, AuthErrorKind::InvalidAppId));
            }
            Err(e) => {
                tracing::error!(operation = %OP, error = %e, "failed to check admin flag");
                return Err(AuthError::storage(OP, e));
            }
        };

        tracing::info!(operation = %OP, user_id = %user_id, is_admin, "checked if user is admin");

        Ok(is_admin)
    }
}
