//! Stateless domain services

pub mod clock;
pub mod credential_verifier;
pub mod token_issuer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use credential_verifier::{CredentialError, CredentialVerifier};
pub use token_issuer::{IssuedToken, TokenIssueError, TokenIssuer};
