//! Login
//!
//! Authenticates a user for one consuming app and issues a token signed
//! with that app's secret.

use crate::application::service::AuthService;
use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
use crate::domain::value_object::{app_id::AppId, email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthErrorKind, AuthResult, Operation, StorageError};

impl<S, P, A> AuthService<S, P, A>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
{
    /// Returns a signed token.
    ///
    /// Unknown email and wrong password fail identically with
    /// `InvalidCredentials`; only the logs tell them apart.
    pub async fn login(&self, email: &Email, password: RawPassword, app_id: AppId) -> AuthResult<String> {
        const OP: Operation = Operation::Login;
        tracing::info!(operation = %OP, app_id = %app_id, "attempting to login user");

        let user = match self.user_provider.user(email).await {
            Ok(user) => user,
            Err(StorageError::UserNotFound) => {
                tracing::warn!(operation = %OP, "user not found");
                return Err(AuthError::new(OP, AuthErrorKind::InvalidCredentials));
            }
            Err(e) => {
                tracing::error!(operation = %OP, error = %e, "failed to get user");
                return Err(AuthError::storage(OP, e));
            }
        };

        if !self.credentials.verify(user.password_hash.clone(), password).await {
            tracing::info!(operation = %OP, user_id = %user.id, "invalid credentials");
            return Err(AuthError::new(OP, AuthErrorKind::InvalidCredentials));
        }

        let app = match self.app_provider.app(app_id).await {
            Ok(app) => app,
            Err(StorageError::AppNotFound) => {
                tracing::warn!(operation = %OP, app_id = %app_id, "app not found");
                return Err(AuthError::new(OP, AuthErrorKind::InvalidAppId));
            }
            Err(e) => {
                tracing::error!(operation = %OP, error = %e, "failed to get app");
                return Err(AuthError::storage(OP, e));
            }
        };

        let issued = self
            .tokens
            .issue(user.id, &user.email, &app.secret, self.token_ttl)
            .map_err(|e| {
                tracing::error!(operation = %OP, app_id = %app_id, error = %e, "failed to generate token");
                AuthError::new(OP, AuthErrorKind::TokenSigning).with_source(e)
            })?;

        tracing::info!(
            operation = %OP,
            user_id = %user.id,
            app_id = %app_id,
            expires_at = %issued.expires_at,
            "user logged in successfully"
        );

        Ok(issued.token)
    }
}
