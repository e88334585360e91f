//! Free-floating token metadata.
//!
//! Whitespace, comments and other tokens that do not belong to the
//! semantic shape of the tree are kept next to the node they precede or
//! follow. Nothing in phast interprets them; they are carried through
//! construction, traversal and serialization untouched.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Kind of a free-floating token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Whitespace,
    Comment,
    DocComment,
    Other,
}

/// A token attached to a node as metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FloatingToken {
    pub kind: TokenKind,
    pub value: String,
    pub position: Option<Position>,
}

impl FloatingToken {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        FloatingToken {
            kind,
            value: value.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// Ordered free-floating tokens of one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreeFloating(Vec<FloatingToken>);

impl FreeFloating {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: FloatingToken) {
        self.0.push(token);
    }

    pub fn tokens(&self) -> &[FloatingToken] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over comment and doc-comment tokens only.
    pub fn comments(&self) -> impl Iterator<Item = &FloatingToken> {
        self.0
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Comment | TokenKind::DocComment))
    }
}

impl From<Vec<FloatingToken>> for FreeFloating {
    fn from(tokens: Vec<FloatingToken>) -> Self {
        FreeFloating(tokens)
    }
}

impl FromIterator<FloatingToken> for FreeFloating {
    fn from_iter<I: IntoIterator<Item = FloatingToken>>(iter: I) -> Self {
        FreeFloating(iter.into_iter().collect())
    }
}
