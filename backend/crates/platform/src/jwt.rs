//! Compact Signed Tokens (JWS, HS256)
//!
//! `base64url(header) . base64url(payload) . base64url(HMAC-SHA256)`, no
//! padding. The header is `{"typ":"JWT","alg":"HS256"}`; the payload carries
//! [`SessionClaims`]. Keys are raw secret bytes, so a token signed under one
//! secret never validates under another.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session token claims.
///
/// Field order is the serialized key order (`email`, `exp`, `id`), which is
/// the sorted order existing verifiers were built against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub email: String,
    /// Absolute expiry, Unix seconds
    pub exp: i64,
    /// Subject user ID, decimal string
    pub id: String,
}

#[derive(Debug, Error)]
pub enum JwtError {
    /// Refusing to sign or verify with an empty key
    #[error("signing secret is empty")]
    EmptySecret,

    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token has expired")]
    Expired,

    #[error("token signature does not match")]
    InvalidSignature,

    #[error("malformed token: {0}")]
    Malformed(#[source] jsonwebtoken::errors::Error),
}

/// Sign claims with HMAC-SHA256 under `secret`
pub fn sign_hs256(claims: &SessionClaims, secret: &[u8]) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::EmptySecret);
    }

    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(JwtError::Signing)
}

/// Verify signature and expiry against the system clock
pub fn verify_hs256(token: &str, secret: &[u8]) -> Result<SessionClaims, JwtError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    decode_with(token, secret, &validation)
}

/// Verify the signature only; `exp` is decoded but not compared to any clock
pub fn verify_signature_hs256(token: &str, secret: &[u8]) -> Result<SessionClaims, JwtError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    decode_with(token, secret, &validation)
}

fn decode_with(
    token: &str,
    secret: &[u8],
    validation: &Validation,
) -> Result<SessionClaims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::EmptySecret);
    }

    decode::<SessionClaims>(token, &DecodingKey::from_secret(secret), validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => JwtError::InvalidSignature,
            _ => JwtError::Malformed(e),
        })
}
