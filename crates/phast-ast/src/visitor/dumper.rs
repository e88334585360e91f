// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Dumper visitor for printing a tree as indented text.
//!
//! The structural hooks only track indentation. Every node line is written
//! by the per-variant `visit_*` method reached through [`Node::accept`], so
//! each variant decides what detail it shows.
//!
//! ```text
//! Root
//!   Stmts:
//!     Identifier "foo"
//! ```

use std::fmt::Write as _;

use phast_core::Position;

use super::traits::{VisitResult, Visitor};
use crate::nodes::{
    Argument, ArgumentList, Expression, FunctionCall, Identifier, IntegerLiteral, Name, NamePart,
    Node, NodeKind, Nullable, NumberLiteral, Parameter, Role, Root, StmtList, StringLiteral,
    Variable,
};

/// Printer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Indentation unit, repeated once per level.
    pub indent: String,
    /// Print a `Role:` line above the children of each role.
    pub show_roles: bool,
    /// Print primitive field values next to the node kind.
    pub show_values: bool,
    /// Print `@position` for nodes that carry one.
    pub show_positions: bool,
    /// Do not descend below this node depth; the root is depth 0.
    pub max_depth: Option<usize>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            indent: "  ".to_string(),
            show_roles: true,
            show_values: false,
            show_positions: false,
            max_depth: None,
        }
    }
}

/// A visitor that renders the tree as indented text.
#[derive(Debug)]
pub struct Dumper {
    options: DumpOptions,
    out: String,
    /// Current indentation level.
    level: usize,
    /// Depth of the node being entered.
    node_depth: usize,
    /// Position of the node being entered, read by the `visit_*` methods.
    position: Option<Position>,
}

impl Dumper {
    pub fn new(options: DumpOptions) -> Self {
        Dumper {
            options,
            out: String::new(),
            level: 0,
            node_depth: 0,
            position: None,
        }
    }

    /// Render `root` with `options`.
    pub fn dump(root: &Node, options: DumpOptions) -> String {
        let mut dumper = Dumper::new(options);
        super::traverse(&mut dumper, root);
        dumper.out
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn write_indent(&mut self) {
        for _ in 0..self.level {
            self.out.push_str(&self.options.indent);
        }
    }

    fn node_line(&mut self, kind: NodeKind, detail: Option<String>) {
        self.write_indent();
        self.out.push_str(kind.name());
        if self.options.show_values {
            if let Some(detail) = detail {
                self.out.push(' ');
                self.out.push_str(&detail);
            }
        }
        if self.options.show_positions {
            if let Some(position) = self.position {
                // Writing into a String cannot fail.
                let _ = write!(self.out, " @{}", position);
            }
        }
        self.out.push('\n');
    }
}

fn quoted(value: &str) -> Option<String> {
    Some(format!("{:?}", value))
}

fn flags(pairs: &[(bool, &str)]) -> Option<String> {
    let set: Vec<&str> = pairs
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect();
    if set.is_empty() {
        None
    } else {
        Some(format!("[{}]", set.join(", ")))
    }
}

impl Visitor for Dumper {
    fn enter_node(&mut self, node: &Node) -> VisitResult {
        self.position = node.position();
        node.accept(self);

        let result = match self.options.max_depth {
            Some(max) if self.node_depth >= max => VisitResult::SkipChildren,
            _ => VisitResult::Continue,
        };
        self.level += 1;
        self.node_depth += 1;
        result
    }

    fn leave_node(&mut self, _node: &Node) {
        self.level -= 1;
        self.node_depth -= 1;
    }

    fn enter_role(&mut self, role: Role, _is_list: bool) {
        if self.options.show_roles {
            self.write_indent();
            self.out.push_str(role.as_str());
            self.out.push_str(":\n");
            self.level += 1;
        }
    }

    fn leave_role(&mut self, _role: Role, _is_list: bool) {
        if self.options.show_roles {
            self.level -= 1;
        }
    }

    fn visit_root(&mut self, _node: &Root) {
        self.node_line(NodeKind::Root, None);
    }

    fn visit_stmt_list(&mut self, _node: &StmtList) {
        self.node_line(NodeKind::StmtList, None);
    }

    fn visit_expression(&mut self, _node: &Expression) {
        self.node_line(NodeKind::Expression, None);
    }

    fn visit_nullable(&mut self, _node: &Nullable) {
        self.node_line(NodeKind::Nullable, None);
    }

    fn visit_parameter(&mut self, node: &Parameter) {
        let detail = flags(&[(node.by_ref, "by_ref"), (node.variadic, "variadic")]);
        self.node_line(NodeKind::Parameter, detail);
    }

    fn visit_identifier(&mut self, node: &Identifier) {
        self.node_line(NodeKind::Identifier, quoted(&node.value));
    }

    fn visit_variable(&mut self, _node: &Variable) {
        self.node_line(NodeKind::Variable, None);
    }

    fn visit_name(&mut self, node: &Name) {
        self.node_line(NodeKind::Name, quoted(&node.joined()));
    }

    fn visit_name_part(&mut self, node: &NamePart) {
        self.node_line(NodeKind::NamePart, quoted(&node.value));
    }

    fn visit_function_call(&mut self, _node: &FunctionCall) {
        self.node_line(NodeKind::FunctionCall, None);
    }

    fn visit_argument_list(&mut self, node: &ArgumentList) {
        let detail = Some(format!("({})", node.arguments.len()));
        self.node_line(NodeKind::ArgumentList, detail);
    }

    fn visit_argument(&mut self, node: &Argument) {
        let detail = flags(&[
            (node.variadic, "variadic"),
            (node.is_reference, "is_reference"),
        ]);
        self.node_line(NodeKind::Argument, detail);
    }

    fn visit_number_literal(&mut self, node: &NumberLiteral) {
        self.node_line(NodeKind::NumberLiteral, Some(node.value.clone()));
    }

    fn visit_integer_literal(&mut self, node: &IntegerLiteral) {
        self.node_line(NodeKind::IntegerLiteral, Some(node.value.clone()));
    }

    fn visit_string_literal(&mut self, node: &StringLiteral) {
        self.node_line(NodeKind::StringLiteral, quoted(&node.value));
    }
}
