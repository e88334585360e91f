// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definitions for tree traversal.

use crate::nodes::{
    Argument, ArgumentList, Expression, FunctionCall, Identifier, IntegerLiteral, Name, NamePart,
    Node, Nullable, NumberLiteral, Parameter, Role, Root, StmtList, StringLiteral, Variable,
};

/// Result of entering a node - controls traversal behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitResult {
    /// Continue traversal into children.
    ///
    /// After visiting children, `leave_node` will be called for this node.
    #[default]
    Continue,

    /// Skip children, continue with siblings.
    ///
    /// The traverser will not descend into this node's children, but
    /// `leave_node` will still be called for this node.
    SkipChildren,
}

impl From<bool> for VisitResult {
    /// `true` descends, `false` skips children.
    fn from(descend: bool) -> Self {
        if descend {
            VisitResult::Continue
        } else {
            VisitResult::SkipChildren
        }
    }
}

/// Macro to generate per-variant visitor method signatures.
///
/// Each entry generates a `visit_*` method with an empty default body.
///
/// # Usage
///
/// ```ignore
/// visitor_methods! {
///     // Generates visit_root for Root
///     root: Root,
/// }
/// ```
macro_rules! visitor_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Handle a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Reached through [`Node::accept`]. Does nothing by default."]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: &$node_type) {}
            )*
        }
    };
}

/// Read-only visitor for tree traversal.
///
/// A visitor has two independent sets of hooks:
///
/// - **Structural hooks** called by the [`Traverser`](super::Traverser) for
///   every node and every role, whatever the variant: [`enter_node`],
///   [`leave_node`], [`enter_role`] and [`leave_role`].
/// - **Per-variant methods** (`visit_root`, `visit_identifier`, ...) reached
///   through double dispatch with [`Node::accept`].
///
/// The default [`enter_node`] performs the double dispatch and descends, so
/// a visitor that only cares about a few variants overrides just those
/// `visit_*` methods. A visitor that overrides [`enter_node`] and still wants
/// its `visit_*` methods called must call `node.accept(self)` itself.
///
/// # Example
///
/// ```ignore
/// use phast_ast::{Identifier, Visitor};
///
/// struct IdentCollector {
///     names: Vec<String>,
/// }
///
/// impl Visitor for IdentCollector {
///     fn visit_identifier(&mut self, node: &Identifier) {
///         self.names.push(node.value.clone());
///     }
/// }
/// ```
///
/// [`enter_node`]: Visitor::enter_node
/// [`leave_node`]: Visitor::leave_node
/// [`enter_role`]: Visitor::enter_role
/// [`leave_role`]: Visitor::leave_role
pub trait Visitor {
    /// Called before descending into `node`.
    ///
    /// Return [`VisitResult::SkipChildren`] to keep the traverser out of the
    /// node's children; [`leave_node`](Visitor::leave_node) is called either way.
    fn enter_node(&mut self, node: &Node) -> VisitResult {
        node.accept(self);
        VisitResult::Continue
    }

    /// Called after the node's children, if visited, are done.
    #[allow(unused_variables)]
    fn leave_node(&mut self, node: &Node) {}

    /// Called before the child or children held under `role`.
    #[allow(unused_variables)]
    fn enter_role(&mut self, role: Role, is_list: bool) {}

    /// Called after every child held under `role` has been visited.
    #[allow(unused_variables)]
    fn leave_role(&mut self, role: Role, is_list: bool) {}

    // Statements
    visitor_methods! {
        root: Root,
        stmt_list: StmtList,
        expression: Expression,
    }

    // Declarations
    visitor_methods! {
        nullable: Nullable,
        parameter: Parameter,
    }

    // Names and variables
    visitor_methods! {
        identifier: Identifier,
        variable: Variable,
        name: Name,
        name_part: NamePart,
    }

    // Calls
    visitor_methods! {
        function_call: FunctionCall,
        argument_list: ArgumentList,
        argument: Argument,
    }

    // Literals
    visitor_methods! {
        number_literal: NumberLiteral,
        integer_literal: IntegerLiteral,
        string_literal: StringLiteral,
    }
}

/// A visitor with every hook left at its default.
///
/// Traversing with it descends everywhere and observes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVisitor;

impl Visitor for NullVisitor {}
