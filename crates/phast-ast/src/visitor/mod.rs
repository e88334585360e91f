// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for tree traversal.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order** for `enter_node`
//! - **Post-order** for `leave_node`
//! - Roles are visited in each variant's declaration order, list elements
//!   in list order
//!
//! # Visitor Pattern
//!
//! ```ignore
//! use phast_ast::visitor::{traverse, Visitor};
//! use phast_ast::Identifier;
//!
//! struct IdentCounter {
//!     count: usize,
//! }
//!
//! impl Visitor for IdentCounter {
//!     fn visit_identifier(&mut self, _node: &Identifier) {
//!         self.count += 1;
//!     }
//! }
//!
//! let mut counter = IdentCounter { count: 0 };
//! traverse(&mut counter, &root);
//! ```
//!
//! # Stopping Early
//!
//! There is no traversal interrupt. A visitor that wants to abandon the
//! walk records the reason in its own state, returns
//! [`VisitResult::SkipChildren`] from then on, and the caller inspects that
//! state after [`traverse`] returns.

mod counter;
mod dumper;
mod events;
mod traits;
mod traverser;

pub use counter::KindCounter;
pub use dumper::{DumpOptions, Dumper};
pub use events::{EventRecorder, TraversalEvent};
pub use traits::{NullVisitor, VisitResult, Visitor};
pub use traverser::{traverse, TraversalState, TraversalSummary, Traverser};
