//! Domain Layer
//!
//! Entities, value objects, storage contracts and the stateless domain
//! services (credential hashing, token issuance, clock).

pub mod entity;
pub mod repository;
pub mod service;
pub mod value_object;

// Re-exports
pub use entity::{app::App, user::User};
pub use repository::{AppProvider, UserProvider, UserSaver};
