//! Error types for greeter-core

use thiserror::Error;

/// Main error type for greeter operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Name is empty after trimming whitespace")]
    EmptyName,
}

/// Result type alias for greeter operations
pub type Result<T> = std::result::Result<T, Error>;
