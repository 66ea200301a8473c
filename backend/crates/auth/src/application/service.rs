//! Auth Domain Service
//!
//! Holds only shared, immutable collaborators. Each operation is an
//! independent request/response; nothing is cached between calls.

use std::sync::Arc;
use std::time::Duration;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AppProvider, UserProvider, UserSaver};
use crate::domain::service::{Clock, CredentialVerifier, TokenIssuer};

pub struct AuthService<S, P, A>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
{
    pub(crate) user_saver: Arc<S>,
    pub(crate) user_provider: Arc<P>,
    pub(crate) app_provider: Arc<A>,
    pub(crate) credentials: CredentialVerifier,
    pub(crate) tokens: TokenIssuer,
    pub(crate) token_ttl: Duration,
}

impl<S, P, A> AuthService<S, P, A>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
{
    pub fn new(
        user_saver: Arc<S>,
        user_provider: Arc<P>,
        app_provider: Arc<A>,
        config: &AuthConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            credentials: CredentialVerifier::new(config.password_pepper.clone()),
            tokens: TokenIssuer::new(clock),
            token_ttl: config.token_ttl,
        }
    }
}

impl<R> AuthService<R, R, R>
where
    R: UserSaver + UserProvider + AppProvider,
{
    /// Build a service backed by one engine implementing every contract
    pub fn with_repository(repo: Arc<R>, config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        Self::new(repo.clone(), repo.clone(), repo, config, clock)
    }
}
