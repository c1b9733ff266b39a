pub mod error_handling;

pub use error_handling::{json_error_handler, not_found, ErrorHandlingMiddleware};
