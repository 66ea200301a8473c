//! Application Layer
//!
//! The auth domain service and its operations, one file per operation.

pub mod config;
pub mod is_admin;
pub mod login;
pub mod register;
pub mod service;

// Re-exports
pub use config::AuthConfig;
pub use service::AuthService;
