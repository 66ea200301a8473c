//! Password Hashing and Verification
//!
//! One-way credential handling with:
//! - Argon2id hashing at a fixed work factor
//! - Self-describing PHC output (algorithm, version, parameters, salt, digest)
//! - Zeroization of clear text and peppered buffers
//! - Constant-time comparison (inside `argon2`)
//! - A length/character policy for request validation
//!
//! ## Work factor
//! `m = 19456 KiB, t = 2, p = 1` (OWASP Argon2id baseline). Changing these
//! constants does not invalidate stored hashes: verification reads the
//! parameters back from each PHC string.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants
// ============================================================================

/// Argon2id memory cost in KiB
pub const ARGON2_MEMORY_KIB: u32 = 19_456;

/// Argon2id iteration count
pub const ARGON2_ITERATIONS: u32 = 2;

/// Argon2id lanes
pub const ARGON2_PARALLELISM: u32 = 1;

/// Default minimum password length accepted at registration and login
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Default maximum password length (bounds hashing cost per request)
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Parameter setup or the hash computation itself failed
    #[error("password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Password Policy
// ============================================================================

/// Length and character rules for a submitted password.
///
/// Lengths count Unicode code points after NFKC normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_length: DEFAULT_MAX_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn check(&self, raw: &str) -> Result<(), PasswordPolicyError> {
        let normalized: Zeroizing<String> = Zeroizing::new(raw.nfkc().collect());

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();

        if char_count < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min: self.min_length,
                actual: char_count,
            });
        }

        if char_count > self.max_length {
            return Err(PasswordPolicyError::TooLong {
                max: self.max_length,
                actual: char_count,
            });
        }

        // Space, tab and newline are allowed; other control characters are not
        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(())
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Unicode NFKC normalized on construction, so visually identical input
///   hashes identically
/// - Not `Clone`
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().nfkc().collect())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Password bytes with the optional pepper appended
    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut combined = Zeroizing::new(self.as_bytes().to_vec());
        if let Some(p) = pepper {
            combined.extend_from_slice(p);
        }
        combined
    }

    /// Hash the password with Argon2id at the fixed work factor
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret, must be supplied again
    ///   on verification
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let params = Params::new(
            ARGON2_MEMORY_KIB,
            ARGON2_ITERATIONS,
            ARGON2_PARALLELISM,
            None,
        )
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        // 128-bit random salt
        let salt = SaltString::generate(&mut OsRng);

        let hash = argon2
            .hash_password(&self.peppered(pepper), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// ```text
/// $argon2id$v=19$m=19456,t=2,p=1$<salt b64>$<digest b64>
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a stored hash without validating it.
    ///
    /// A malformed value is not an error here: it simply never verifies.
    pub fn from_stored(s: impl Into<String>) -> Self {
        Self { hash: s.into() }
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    pub fn is_well_formed(&self) -> bool {
        PasswordHash::new(&self.hash).is_ok()
    }

    /// Verify a password against this hash.
    ///
    /// Parameters come from the PHC string. Returns `false` for a mismatch
    /// and for a hash that cannot be parsed.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(&password.peppered(pepper), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
