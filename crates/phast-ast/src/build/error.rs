// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Errors raised while assembling a tree.

use phast_core::PhastError;
use thiserror::Error;

use super::arena::NodeId;

/// Misuse of the builder by a producer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The node was already attached to a parent.
    #[error("{0} was already attached to a parent")]
    NodeAlreadyTaken(NodeId),

    /// The id was never handed out by this arena.
    #[error("{0} does not belong to this arena")]
    UnknownNode(NodeId),

    /// `finish` was called while list scopes were still open.
    #[error("{open} list scope(s) still open")]
    UnbalancedLists { open: usize },
}

impl From<BuildError> for PhastError {
    fn from(err: BuildError) -> Self {
        PhastError::invalid_tree(err.to_string())
    }
}
