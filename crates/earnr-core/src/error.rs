//! Error types for the earnr-core library.
//!
//! The extraction pipeline itself is total and never returns errors;
//! unparseable text degrades to a zeroed, invalid result instead. Errors
//! exist only at the configuration/file boundary.

use thiserror::Error;

/// Main error type for the earnr library.
#[derive(Error, Debug)]
pub enum EarnrError {
    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the earnr library.
pub type Result<T> = std::result::Result<T, EarnrError>;
