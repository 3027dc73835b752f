//! Error types for Roster
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for Roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    /// A stored line did not split into exactly three fields
    #[error("Malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    /// A field would break the line format if written as-is
    ///
    /// The store writes fields unescaped, so a comma or line break inside a
    /// field would split the record when read back.
    #[error(
        "Invalid {field}: {value:?} contains ',' or a line break, \
         which the unescaped store format cannot hold"
    )]
    InvalidField { field: &'static str, value: String },

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    /// Search or delete on a store whose backing file was never created
    #[error("Store file {} does not exist", .0.display())]
    StoreMissing(PathBuf),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
