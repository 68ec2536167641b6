//! Fatal error conditions surfaced to the CLI.
//!
//! Undecodable bytes are not an error: the reader substitutes U+FFFD and
//! keeps scanning. Everything listed here aborts the run before any report
//! is printed.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FenceError {
    #[error("input file not found or unreadable: {} ({source})", .path.display())]
    InputNotFound { path: PathBuf, source: io::Error },

    #[error("no files match pattern '{pattern}'")]
    NoMatches { pattern: String },

    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("limit must be at least 1")]
    InvalidLimit,

    #[error("unknown output mode '{value}' (expected human|json)")]
    InvalidOutput { value: String },
}
