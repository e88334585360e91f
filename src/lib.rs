//! phast: scoped list accumulation and generic traversal for PHP syntax trees.
//!
//! The library re-exports the two workspace crates and adds the [`cli`]
//! helpers the `phast` binary is built on.

// Core infrastructure - re-exported from phast-core
pub use phast_core::error;
pub use phast_core::meta;
pub use phast_core::output;
pub use phast_core::position;

// Tree model, builder and visitors
pub use phast_ast as ast;

// Front door
pub mod cli;
