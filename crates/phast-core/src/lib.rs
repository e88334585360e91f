//! Core infrastructure for phast.
//!
//! This crate provides the language-agnostic pieces shared by the tree
//! crate and the driver:
//! - Source positions attached to nodes
//! - Free-floating token metadata (whitespace, comments)
//! - Error types and exit code constants
//! - JSON output envelopes for CLI responses

pub mod error;
pub mod meta;
pub mod output;
pub mod position;

pub use error::{OutputErrorCode, PhastError};
pub use meta::{FloatingToken, FreeFloating, TokenKind};
pub use position::Position;
