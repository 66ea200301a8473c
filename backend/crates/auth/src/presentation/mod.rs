//! Presentation Layer
//!
//! HTTP handlers, DTOs, request validation and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod validator;

pub use handlers::AuthAppState;
pub use router::{auth_router, auth_router_generic, router_with_state};
pub use validator::RequestValidator;
