// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Producer-side tree construction: node arena, scoped list accumulator
//! and the builder that combines them.

mod arena;
mod builder;
mod error;
mod stacked;

pub use arena::{NodeArena, NodeId};
pub use builder::TreeBuilder;
pub use error::BuildError;
pub use stacked::StackedNodeList;
