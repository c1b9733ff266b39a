//! Infrastructure layer - external integrations
//!
//! Network clients that implement the core's traits.

pub mod tron_grid;

pub use tron_grid::*;
