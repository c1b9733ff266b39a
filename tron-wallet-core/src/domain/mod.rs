//! Domain layer - entities and repositories
//!
//! Wallet, token and transaction records, plus the history cache.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
