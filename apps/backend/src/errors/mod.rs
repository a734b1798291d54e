//! Error handling for the catalog backend.

pub mod error_code;

pub use error_code::ErrorCode;
