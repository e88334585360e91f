// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Depth-first traversal driver.
//!
//! For every node the traverser:
//!
//! 1. calls `enter_node`; on `SkipChildren` it jumps to step 3
//! 2. for each role in the variant's declaration order:
//!    - a single role whose child is absent produces no events
//!    - a single role with a child: `enter_role(role, false)`, walk the
//!      child, `leave_role(role, false)`
//!    - a list role: `enter_role(role, true)`, walk each element in order,
//!      `leave_role(role, true)`, even when the list is empty
//! 3. calls `leave_node`
//!
//! The traverser does not look at variant identity. Children are reached
//! only through [`Node::for_each_slot`].

use tracing::trace;

use super::traits::{VisitResult, Visitor};
use crate::nodes::{Node, Role, Slot};

/// Lifecycle of a [`Traverser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    /// Created, nothing walked yet.
    Idle,
    /// Inside [`Traverser::traverse`].
    Walking,
    /// The last walk finished.
    Done,
}

/// Counters gathered during one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalSummary {
    /// Nodes passed to `enter_node`.
    pub nodes_entered: usize,
    /// Nodes whose children were skipped.
    pub nodes_skipped: usize,
    /// Deepest node depth reached; the root is at depth 0.
    pub max_depth: usize,
}

/// Walks a tree top-down, driving a [`Visitor`].
///
/// A traverser borrows its visitor mutably for its whole lifetime, so two
/// walks can never share a visitor at the same time.
///
/// # Example
///
/// ```ignore
/// let mut printer = Dumper::new(DumpOptions::default());
/// let summary = Traverser::new(&mut printer).traverse(&root);
/// ```
pub struct Traverser<'v, V: Visitor + ?Sized> {
    visitor: &'v mut V,
    state: TraversalState,
    summary: TraversalSummary,
}

impl<'v, V: Visitor + ?Sized> Traverser<'v, V> {
    pub fn new(visitor: &'v mut V) -> Self {
        Self {
            visitor,
            state: TraversalState::Idle,
            summary: TraversalSummary::default(),
        }
    }

    pub fn state(&self) -> TraversalState {
        self.state
    }

    /// Walk `root` and everything below it.
    ///
    /// Calling this again starts a fresh walk with fresh counters.
    pub fn traverse(&mut self, root: &Node) -> TraversalSummary {
        self.state = TraversalState::Walking;
        self.summary = TraversalSummary::default();
        trace!(root = %root.kind(), "traversal started");

        self.walk_node(root, 0);

        self.state = TraversalState::Done;
        trace!(
            nodes = self.summary.nodes_entered,
            skipped = self.summary.nodes_skipped,
            max_depth = self.summary.max_depth,
            "traversal finished"
        );
        self.summary
    }

    fn walk_node(&mut self, node: &Node, depth: usize) {
        self.summary.nodes_entered += 1;
        self.summary.max_depth = self.summary.max_depth.max(depth);

        match self.visitor.enter_node(node) {
            VisitResult::Continue => {
                node.for_each_slot(|role, slot| self.walk_slot(role, slot, depth + 1));
            }
            VisitResult::SkipChildren => self.summary.nodes_skipped += 1,
        }

        self.visitor.leave_node(node);
    }

    fn walk_slot(&mut self, role: Role, slot: Slot<'_>, depth: usize) {
        match slot {
            Slot::Single(None) => {}
            Slot::Single(Some(child)) => {
                self.visitor.enter_role(role, false);
                self.walk_node(child, depth);
                self.visitor.leave_role(role, false);
            }
            Slot::List(children) => {
                self.visitor.enter_role(role, true);
                for child in children {
                    self.walk_node(child, depth);
                }
                self.visitor.leave_role(role, true);
            }
        }
    }
}

/// Walk `root` with `visitor`.
///
/// Shorthand for `Traverser::new(visitor).traverse(root)`.
pub fn traverse<V: Visitor + ?Sized>(visitor: &mut V, root: &Node) -> TraversalSummary {
    Traverser::new(visitor).traverse(root)
}
