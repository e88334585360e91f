// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Stacked list accumulator.
//!
//! A recursive-descent producer collects the children of nested list
//! constructs (statement blocks, argument lists, parameter lists) in one
//! shared buffer. Entering a list construct pushes a checkpoint; leaving it
//! pops the checkpoint and takes back exactly the elements added since.
//!
//! ```text
//! push()            list: []         stack: [0]
//! add(a)            list: [a]        stack: [0]
//! push()            list: [a]        stack: [0, 1]
//! add(b)            list: [a, b]     stack: [0, 1]
//! pop() -> [b]      list: [a]        stack: [0]
//! pop() -> [a]      list: []         stack: []
//! ```
//!
//! `pop` without a matching `push` uses cut point 0 and drains everything,
//! so the outermost list does not need a `push` at all.

use std::vec::Drain;

use super::arena::NodeId;

/// Growable buffer of references with a stack of checkpoints.
///
/// Checkpoints never decrease from the bottom of the stack to the top,
/// since the buffer only grows between a `push` and its `pop`.
#[derive(Debug, Clone)]
pub struct StackedNodeList<T = NodeId> {
    list: Vec<T>,
    stack: Vec<usize>,
}

impl<T> Default for StackedNodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StackedNodeList<T> {
    pub fn new() -> Self {
        StackedNodeList {
            list: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Create with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        StackedNodeList {
            list: Vec::with_capacity(capacity),
            stack: Vec::new(),
        }
    }

    /// Empty the buffer and the checkpoint stack, keeping their capacity.
    pub fn reset(&mut self) {
        self.list.clear();
        self.stack.clear();
    }

    pub fn add(&mut self, item: T) {
        self.list.push(item);
    }

    /// Open a scope at the current buffer length.
    pub fn push(&mut self) {
        self.stack.push(self.list.len());
    }

    /// Close the innermost scope and take its elements, in insertion order.
    ///
    /// With no open scope, takes every buffered element.
    pub fn pop(&mut self) -> Drain<'_, T> {
        let cut = self.stack.pop().unwrap_or(0);
        self.list.drain(cut..)
    }

    /// Buffered elements across all scopes.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Elements added to the innermost open scope so far.
    pub fn current(&self) -> &[T] {
        let cut = self.stack.last().copied().unwrap_or(0);
        &self.list[cut..]
    }

    pub fn capacity(&self) -> usize {
        self.list.capacity()
    }
}
