//! Infrastructure Layer
//!
//! Storage engines implementing the domain's storage contracts.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryAuthRepository;
pub use postgres::PgAuthRepository;
