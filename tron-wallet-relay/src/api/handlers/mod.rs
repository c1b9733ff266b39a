pub mod health;
pub mod transfer;
pub mod wallet;

pub use wallet::create_wallet;
