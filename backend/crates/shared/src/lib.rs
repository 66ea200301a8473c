//! Shared Kernel - Cross-crate vocabulary of the identity provider
//!
//! The smallest core every other crate agrees on:
//! - Error classification and the unified application error
//! - Typed numeric identifiers for users and applications
//!
//! Nothing here knows about passwords, tokens or storage engines.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
