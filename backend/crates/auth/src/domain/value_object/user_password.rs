//! User Password Value Objects
//!
//! Domain wrappers over `platform::password`:
//! - [`RawPassword`]: clear text from a request, zeroized on drop
//! - [`UserPassword`]: the stored PHC hash
//!
//! Policy checks (length, characters) happen in request validation, before a
//! `RawPassword` is built. Hashing and comparison go through
//! [`CredentialVerifier`](crate::domain::service::credential_verifier::CredentialVerifier).

use std::fmt;

use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Clear text password. Not `Clone`; Debug is redacted.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Argon2id PHC hash as stored with the user record
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub(crate) fn hash(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.inner().hash(pepper).map(Self)
    }

    /// Wrap the stored PHC string. A malformed value never verifies.
    pub fn from_phc_string(phc_string: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(phc_string))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    pub(crate) fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("TestPassword123!");
        let hashed = UserPassword::hash(&raw, None).unwrap();

        assert!(hashed.verify(&raw, None));
        assert!(!hashed.verify(&RawPassword::new("WrongPassword123!"), None));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("TestPassword123!");
        let hashed = UserPassword::hash(&raw, None).unwrap();

        let restored = UserPassword::from_phc_string(hashed.as_phc_string());
        assert!(restored.verify(&raw, None));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("SecretPassword123!");
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret"));

        let hashed = UserPassword::hash(&raw, None).unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}
