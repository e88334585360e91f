// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! KindCounter visitor: per-kind node counts.

use std::collections::BTreeMap;

use super::traits::{VisitResult, Visitor};
use crate::nodes::{Node, NodeKind};

/// Counts nodes by [`NodeKind`].
#[derive(Debug, Default)]
pub struct KindCounter {
    counts: BTreeMap<NodeKind, usize>,
}

impl KindCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every node under `root`, including `root`.
    pub fn count(root: &Node) -> BTreeMap<NodeKind, usize> {
        let mut counter = KindCounter::new();
        super::traverse(&mut counter, root);
        counter.counts
    }

    pub fn get(&self, kind: NodeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn into_counts(self) -> BTreeMap<NodeKind, usize> {
        self.counts
    }
}

impl Visitor for KindCounter {
    fn enter_node(&mut self, node: &Node) -> VisitResult {
        *self.counts.entry(node.kind()).or_default() += 1;
        VisitResult::Continue
    }
}
