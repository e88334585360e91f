// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Tree construction for producers.
//!
//! [`TreeBuilder`] pairs a [`NodeArena`] with a [`StackedNodeList`] of
//! [`NodeId`]s. A producer building a list-shaped construct calls
//! [`open_list`](TreeBuilder::open_list), emits each child while it
//! recurses, then [`close_list`](TreeBuilder::close_list) to get exactly
//! those children back as owned nodes, ready to store in the parent.
//!
//! ```ignore
//! let mut builder = TreeBuilder::new();
//! builder.open_list();
//! builder.emit(Argument::new(None));
//! builder.emit(Argument::new(Some(NumberLiteral::new("1.5").into())));
//! let arguments = builder.close_list()?;
//! let list = ArgumentList::new(arguments);
//! ```
//!
//! One builder serves one parse at a time. Call [`reset`](TreeBuilder::reset)
//! between parses to reuse its buffers.

use tracing::{trace, warn};

use super::arena::{NodeArena, NodeId};
use super::error::BuildError;
use super::stacked::StackedNodeList;
use crate::nodes::Node;

/// Arena plus scoped list accumulator.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    arena: NodeArena,
    lists: StackedNodeList<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TreeBuilder {
            arena: NodeArena::with_capacity(capacity),
            lists: StackedNodeList::with_capacity(capacity),
        }
    }

    /// Forget every pending node and open scope, keeping capacity.
    ///
    /// This is also the recovery path after a failed parse.
    pub fn reset(&mut self) {
        self.arena.clear();
        self.lists.reset();
    }

    /// Start collecting the children of a list construct.
    pub fn open_list(&mut self) {
        self.lists.push();
        trace!(depth = self.lists.depth(), "list opened");
    }

    /// Store `node` and add it to the innermost open list.
    pub fn emit(&mut self, node: impl Into<Node>) -> NodeId {
        let id = self.arena.alloc(node.into());
        self.lists.add(id);
        id
    }

    /// Store `node` without adding it to any list.
    ///
    /// Used for children that go into a single-valued field; fetch them
    /// with [`take`](TreeBuilder::take).
    pub fn alloc(&mut self, node: impl Into<Node>) -> NodeId {
        self.arena.alloc(node.into())
    }

    /// Move a stored node out for attachment to a parent.
    pub fn take(&mut self, id: NodeId) -> Result<Node, BuildError> {
        self.arena.take(id)
    }

    /// Finish the innermost list and take its children in emission order.
    ///
    /// With no open list, takes everything emitted so far. If a child was
    /// already taken with [`take`](TreeBuilder::take), fails and leaves the
    /// list open with all of its children still stored.
    pub fn close_list(&mut self) -> Result<Vec<Node>, BuildError> {
        for &id in self.lists.current() {
            self.arena.check(id)?;
        }
        let arena = &mut self.arena;
        let children = self
            .lists
            .pop()
            .map(|id| arena.take(id))
            .collect::<Result<Vec<_>, _>>()?;
        trace!(
            depth = self.lists.depth(),
            children = children.len(),
            "list closed"
        );
        Ok(children)
    }

    /// Number of open lists.
    pub fn depth(&self) -> usize {
        self.lists.depth()
    }

    /// Nodes stored and not yet attached.
    pub fn pending(&self) -> usize {
        self.arena.live()
    }

    /// Hand back the finished root and reset for the next parse.
    ///
    /// Fails without resetting if list scopes are still open.
    pub fn finish(&mut self, root: impl Into<Node>) -> Result<Node, BuildError> {
        let open = self.lists.depth();
        if open > 0 {
            return Err(BuildError::UnbalancedLists { open });
        }
        let pending = self.arena.live();
        if pending > 0 {
            warn!(pending, "tree finished with unattached nodes");
        }
        trace!(allocated = self.arena.allocated(), "tree finished");
        self.reset();
        Ok(root.into())
    }
}
