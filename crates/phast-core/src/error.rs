//! Error types and error code constants for phast.
//!
//! This module provides the unified error type (`PhastError`) that the
//! driver renders as JSON output. Domain errors from other crates bridge
//! into it with `From` impls.
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments (bad input from caller)
//! - `3`: Invalid input (malformed tree document)
//! - `4`: I/O errors (file not found, unreadable input)
//! - `10`: Internal errors (bugs, unexpected state)

use std::fmt;
use std::io;

use thiserror::Error;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Error codes for JSON output.
///
/// These codes map to CLI exit codes and appear in JSON error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller.
    InvalidArguments = 2,
    /// The input could not be read as a syntax tree.
    InvalidInput = 3,
    /// Reading or writing failed.
    IoError = 4,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for CLI output.
#[derive(Debug, Error)]
pub enum PhastError {
    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Input document is not a valid tree.
    #[error("invalid input at line {line}, column {column}: {message}")]
    InvalidInput {
        message: String,
        line: usize,
        column: usize,
    },

    /// A tree could not be assembled.
    #[error("invalid tree: {message}")]
    InvalidTree { message: String },

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Other I/O failure.
    #[error("io error: {message}")]
    Io { message: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    InternalError { message: String },
}

// ============================================================================
// Error Code Mapping
// ============================================================================

impl From<&PhastError> for OutputErrorCode {
    fn from(err: &PhastError) -> Self {
        match err {
            PhastError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            PhastError::InvalidInput { .. } => OutputErrorCode::InvalidInput,
            PhastError::InvalidTree { .. } => OutputErrorCode::InvalidInput,
            PhastError::FileNotFound { .. } => OutputErrorCode::IoError,
            PhastError::Io { .. } => OutputErrorCode::IoError,
            PhastError::InternalError { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<PhastError> for OutputErrorCode {
    fn from(err: PhastError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Bridges
// ============================================================================

impl From<io::Error> for PhastError {
    fn from(err: io::Error) -> Self {
        PhastError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PhastError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Io => PhastError::Io {
                message: err.to_string(),
            },
            Category::Syntax | Category::Data | Category::Eof => PhastError::InvalidInput {
                message: err.to_string(),
                line: err.line(),
                column: err.column(),
            },
        }
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl PhastError {
    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        PhastError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create an invalid tree error.
    pub fn invalid_tree(message: impl Into<String>) -> Self {
        PhastError::InvalidTree {
            message: message.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        PhastError::FileNotFound { path: path.into() }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        PhastError::InternalError {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
