//! Source positions for syntax tree nodes.
//!
//! A [`Position`] records both the line range and the byte range a node
//! covers. Lines are 1-based; byte offsets are 0-based, with the start
//! inclusive and the end exclusive.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Source location of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    /// First line of the node (1-based).
    pub start_line: u32,
    /// Last line of the node (1-based).
    pub end_line: u32,
    /// Start byte offset (inclusive).
    pub start_pos: u32,
    /// End byte offset (exclusive).
    pub end_pos: u32,
}

impl Position {
    /// Create a new position.
    ///
    /// # Panics
    /// Panics if `start_line > end_line` or `start_pos > end_pos`.
    pub fn new(start_line: u32, end_line: u32, start_pos: u32, end_pos: u32) -> Self {
        assert!(
            start_line <= end_line,
            "Position start line ({}) must be <= end line ({})",
            start_line,
            end_line
        );
        assert!(
            start_pos <= end_pos,
            "Position start ({}) must be <= end ({})",
            start_pos,
            end_pos
        );
        Position {
            start_line,
            end_line,
            start_pos,
            end_pos,
        }
    }

    /// Length of the covered range in bytes.
    pub fn len(&self) -> u32 {
        self.end_pos.saturating_sub(self.start_pos)
    }

    /// Check if the position covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start_pos == self.end_pos
    }

    /// Check if this position contains another entirely.
    pub fn contains(&self, other: &Position) -> bool {
        self.start_pos <= other.start_pos && other.end_pos <= self.end_pos
    }

    /// Smallest position covering both `self` and `other`.
    pub fn cover(&self, other: &Position) -> Position {
        Position {
            start_line: self.start_line.min(other.start_line),
            end_line: self.end_line.max(other.end_line),
            start_pos: self.start_pos.min(other.start_pos),
            end_pos: self.end_pos.max(other.end_pos),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}..{}:{}",
            self.start_line, self.start_pos, self.end_line, self.end_pos
        )
    }
}
