// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Syntax tree nodes, scoped list accumulation and generic traversal.
//!
//! # Overview
//!
//! - **Nodes**: a closed [`Node`] enum whose variants carry optional
//!   free-floating tokens and a position, plus their own fields.
//! - **Building**: [`TreeBuilder`] lets a recursive-descent producer
//!   collect the children of nested lists in one shared buffer.
//! - **Traversal**: implement [`Visitor`] and call [`traverse`]; hooks fire
//!   around every node and every structural role, in declaration order.
//! - **Serialization**: every node writes as a JSON record with explicit
//!   `null`s for absent fields; the tagged interchange form reads back.
//!
//! # Quick Start
//!
//! ```
//! use phast_ast::{traverse, Argument, ArgumentList, EventRecorder, Node, NumberLiteral, Root};
//!
//! let root: Node = Root::new(vec![ArgumentList::new(vec![
//!     Argument::new(Some(NumberLiteral::new("1.5").into())).into(),
//! ])
//! .into()])
//! .into();
//!
//! let mut recorder = EventRecorder::new();
//! let summary = traverse(&mut recorder, &root);
//! assert_eq!(summary.nodes_entered, 4);
//! assert_eq!(recorder.events().len(), 14);
//! ```

pub mod build;
pub mod json;
pub mod nodes;
pub mod visitor;

pub use build::{BuildError, NodeArena, NodeId, StackedNodeList, TreeBuilder};
pub use nodes::*;
pub use visitor::{
    traverse, DumpOptions, Dumper, EventRecorder, KindCounter, NullVisitor, TraversalEvent,
    TraversalState, TraversalSummary, Traverser, VisitResult, Visitor,
};

pub use phast_core::{FloatingToken, FreeFloating, Position, TokenKind};
