pub mod error;
pub mod transfer;

pub use error::RelayError;
