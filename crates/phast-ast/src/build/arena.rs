// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Node arena and node references.
//!
//! While a tree is being built, finished nodes wait in a [`NodeArena`] and
//! are referred to by [`NodeId`]. Attaching a node to its parent moves it
//! out of the arena; from then on the parent owns it and the id is dead.

use std::fmt;

use super::error::BuildError;
use crate::nodes::Node;

/// Reference to a node waiting in a [`NodeArena`].
///
/// Ids are assigned sequentially from 0 and are never reused until the
/// arena is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Storage for nodes that have not been attached to a parent yet.
#[derive(Debug, Default)]
pub struct NodeArena {
    slots: Vec<Option<Node>>,
    live: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Store `node` and return its id.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Some(node));
        self.live += 1;
        id
    }

    /// Move the node out of the arena.
    pub fn take(&mut self, id: NodeId) -> Result<Node, BuildError> {
        self.check(id)?;
        let node = self.slots[id.index()]
            .take()
            .ok_or(BuildError::NodeAlreadyTaken(id))?;
        self.live -= 1;
        Ok(node)
    }

    /// Fail with the error [`take`](NodeArena::take) would return, without
    /// taking anything.
    pub fn check(&self, id: NodeId) -> Result<(), BuildError> {
        match self.slots.get(id.index()) {
            None => Err(BuildError::UnknownNode(id)),
            Some(None) => Err(BuildError::NodeAlreadyTaken(id)),
            Some(Some(_)) => Ok(()),
        }
    }

    /// Borrow a node that is still in the arena.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Nodes allocated and not yet taken.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Ids handed out since the last clear.
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Drop every node and restart ids at 0, keeping capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.live = 0;
    }
}
