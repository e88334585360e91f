//! JSON output envelopes for CLI responses.
//!
//! Every JSON response starts with `status`, followed by `schema_version`.
//! Output is deterministic: the same input produces identical bytes.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::{OutputErrorCode, PhastError};

/// Current schema version for all responses.
pub const SCHEMA_VERSION: &str = "1";

/// Error details for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Numeric error code.
    pub code: u8,
    /// Human-readable message.
    pub message: String,
    /// Error-specific structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorInfo {
    /// Create from a PhastError.
    pub fn from_error(err: &PhastError) -> Self {
        let code = OutputErrorCode::from(err).code();
        let details = match err {
            PhastError::InvalidInput { line, column, .. } => {
                Some(serde_json::json!({ "line": line, "column": column }))
            }
            PhastError::FileNotFound { path } => Some(serde_json::json!({ "path": path })),
            _ => None,
        };
        ErrorInfo {
            code,
            message: err.to_string(),
            details,
        }
    }
}

/// Error response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status: "error".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Error information.
    pub error: ErrorInfo,
}

impl ErrorResponse {
    /// Create an error response from a PhastError.
    pub fn from_error(err: &PhastError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo::from_error(err),
        }
    }
}

/// Emit a response as pretty-printed JSON to a writer.
///
/// This is the single JSON output path for the CLI.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}
