// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! JSON forms of a tree.
//!
//! # Canonical Form
//!
//! Each node is a record with one key per field and no variant tag:
//!
//! ```text
//! {
//!   "FreeFloating": null,
//!   "Position": null,
//!   "Value": ""
//! }
//! ```
//!
//! Written by [`to_json_pretty`] (two-space indent, no trailing newline)
//! and [`to_json_compact`]. Golden files store exactly these bytes. The
//! canonical form cannot be read back: several variants share a field
//! layout.
//!
//! # Interchange Form
//!
//! The same records with a leading `"Kind"` key naming the variant.
//! Written by [`to_tagged_json_pretty`] and [`to_tagged_json`], read by
//! [`from_json`]. This is what the CLI accepts as input.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::nodes::Node;

/// Render `node` in the canonical pretty-printed form.
pub fn to_json_pretty(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

/// Render `node` in the canonical form on a single line.
pub fn to_json_compact(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string(node)
}

/// Render `node` in the interchange form, pretty-printed.
pub fn to_tagged_json_pretty(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Tagged(node))
}

/// Render `node` in the interchange form on a single line.
pub fn to_tagged_json(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string(&Tagged(node))
}

/// Read a tree from the interchange form.
///
/// Missing optional keys read as absent.
pub fn from_json(text: &str) -> serde_json::Result<Node> {
    serde_json::from_str(text)
}

// ============================================================================
// Interchange serialization
// ============================================================================

/// A node serialized with its `Kind` tag, recursively.
#[derive(Debug, Clone, Copy)]
pub struct Tagged<'a>(pub &'a Node);

/// An optional child in interchange form.
struct TaggedChild<'a>(Option<&'a Node>);

/// A list of children in interchange form.
struct TaggedList<'a>(&'a [Node]);

impl Serialize for TaggedChild<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(node) => serializer.serialize_some(&Tagged(node)),
            None => serializer.serialize_none(),
        }
    }
}

impl Serialize for TaggedList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Tagged))
    }
}

fn child(node: &Option<Box<Node>>) -> TaggedChild<'_> {
    TaggedChild(node.as_deref())
}

impl Serialize for Tagged<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let kind = node.kind().name();
        // Kind, FreeFloating, Position, then the variant's fields.
        let field_count = 3 + match node {
            Node::Parameter(_) => 5,
            Node::Argument(_) => 3,
            Node::FunctionCall(_) => 2,
            _ => 1,
        };

        let mut record = serializer.serialize_struct(kind, field_count)?;
        record.serialize_field("Kind", kind)?;
        record.serialize_field("FreeFloating", &node.free_floating())?;
        record.serialize_field("Position", &node.position())?;

        match node {
            Node::Root(n) => record.serialize_field("Stmts", &TaggedList(&n.stmts))?,
            Node::StmtList(n) => record.serialize_field("Stmts", &TaggedList(&n.stmts))?,
            Node::Expression(n) => record.serialize_field("Expr", &child(&n.expr))?,
            Node::Nullable(n) => record.serialize_field("Expr", &child(&n.expr))?,
            Node::Parameter(n) => {
                record.serialize_field("ByRef", &n.by_ref)?;
                record.serialize_field("Variadic", &n.variadic)?;
                record.serialize_field("Type", &child(&n.type_hint))?;
                record.serialize_field("Var", &child(&n.var))?;
                record.serialize_field("DefaultValue", &child(&n.default_value))?;
            }
            Node::Identifier(n) => record.serialize_field("Value", &n.value)?,
            Node::Variable(n) => record.serialize_field("VarName", &child(&n.var_name))?,
            Node::Name(n) => record.serialize_field("Parts", &TaggedList(&n.parts))?,
            Node::NamePart(n) => record.serialize_field("Value", &n.value)?,
            Node::FunctionCall(n) => {
                record.serialize_field("Function", &child(&n.function))?;
                record.serialize_field("ArgumentList", &child(&n.argument_list))?;
            }
            Node::ArgumentList(n) => {
                record.serialize_field("Arguments", &TaggedList(&n.arguments))?
            }
            Node::Argument(n) => {
                record.serialize_field("Variadic", &n.variadic)?;
                record.serialize_field("IsReference", &n.is_reference)?;
                record.serialize_field("Expr", &child(&n.expr))?;
            }
            Node::NumberLiteral(n) => record.serialize_field("Value", &n.value)?,
            Node::IntegerLiteral(n) => record.serialize_field("Value", &n.value)?,
            Node::StringLiteral(n) => record.serialize_field("Value", &n.value)?,
        }

        record.end()
    }
}
