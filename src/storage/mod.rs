//! Local storage for fetched files
//!
//! Handles filename validation, collision-safe naming and writing payloads.

pub mod filesystem;
pub mod naming;
pub mod validation;

pub use filesystem::persist_payload;
pub use naming::NamingPolicy;
pub use validation::validate_filename;
