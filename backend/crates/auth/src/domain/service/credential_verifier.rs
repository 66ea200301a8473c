//! Credential Verifier
//!
//! One-way password hashing and comparison. Both directions run on the
//! blocking pool, never on a runtime worker.

use std::fmt;
use std::sync::Arc;

use platform::password::PasswordHashError;
use thiserror::Error;
use tokio::task::{self, JoinError};

use crate::domain::value_object::user_password::{RawPassword, UserPassword};

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error(transparent)]
    Hash(#[from] PasswordHashError),

    #[error("hashing task failed: {0}")]
    Task(#[from] JoinError),
}

/// Hashes and verifies passwords with an optional application-wide pepper
#[derive(Clone, Default)]
pub struct CredentialVerifier {
    pepper: Option<Arc<[u8]>>,
}

impl CredentialVerifier {
    pub fn new(pepper: Option<Vec<u8>>) -> Self {
        Self {
            pepper: pepper.filter(|p| !p.is_empty()).map(Arc::from),
        }
    }

    /// Hash a password for storage
    pub async fn hash(&self, password: RawPassword) -> Result<UserPassword, CredentialError> {
        let pepper = self.pepper.clone();
        let hashed =
            task::spawn_blocking(move || UserPassword::hash(&password, pepper.as_deref())).await??;
        Ok(hashed)
    }

    /// Compare a password against a stored hash.
    ///
    /// Mismatch, malformed hash and a failed blocking task all yield `false`.
    pub async fn verify(&self, hash: UserPassword, password: RawPassword) -> bool {
        let pepper = self.pepper.clone();
        match task::spawn_blocking(move || hash.verify(&password, pepper.as_deref())).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::error!(error = %e, "password verification task failed");
                false
            }
        }
    }
}

impl fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
