//! Domain repositories
//!
//! Repository traits for data access and their in-memory implementations.

pub mod transaction_repository;

// Re-export repositories
pub use transaction_repository::*;
