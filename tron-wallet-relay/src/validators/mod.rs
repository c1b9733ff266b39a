pub mod transfer_validator;

pub use transfer_validator::validate_transfer;
