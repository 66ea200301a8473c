//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no knowledge of users or apps:
//! - Password hashing (Argon2id with a fixed, documented work factor)
//! - Compact HS256 signed tokens
//! - Base64 helpers

pub mod crypto;
pub mod jwt;
pub mod password;
