// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Syntax tree node types.
//!
//! # Node Model
//!
//! A [`Node`] is one of a closed set of variants. Every variant carries two
//! optional pieces of metadata, `free_floating` and `position`, followed by
//! its own fields. A field is either a primitive, a single optional child
//! (`Option<Box<Node>>`), or an ordered list of children (`Vec<Node>`).
//! Children are owned by their parent.
//!
//! # Structural Roles
//!
//! Every child-holding field is a structural [`Role`]. Each variant declares
//! its roles in a fixed order, exposed through [`Node::for_each_slot`]. The
//! traverser reads children only through this protocol, so it never needs
//! to know which variant it is looking at.
//!
//! ```text
//! Variant        Roles (declaration order)
//! Root           Stmts[]
//! StmtList       Stmts[]
//! Expression     Expr
//! Nullable       Expr
//! Parameter      Type, Var, DefaultValue
//! Variable       VarName
//! Name           Parts[]
//! FunctionCall   Function, ArgumentList
//! ArgumentList   Arguments[]
//! Argument       Expr
//! ```
//!
//! # Serialized Form
//!
//! A node serializes to a record with exactly one PascalCase key per field:
//! `FreeFloating`, `Position`, then the variant's own fields in declaration
//! order. Absent optional fields and absent metadata are written as `null`,
//! never omitted. The record carries no variant tag; the tagged form used
//! to read trees back lives in [`crate::json`].

use std::fmt;

use phast_core::{FreeFloating, Position};
use serde::{Deserialize, Serialize, Serializer};

use crate::visitor::Visitor;

// ============================================================================
// Roles and slots
// ============================================================================

/// A named structural slot on a node variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Stmts,
    Expr,
    Type,
    Var,
    DefaultValue,
    VarName,
    Parts,
    Function,
    ArgumentList,
    Arguments,
}

impl Role {
    /// Stable field name of this role, as used in the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Stmts => "Stmts",
            Role::Expr => "Expr",
            Role::Type => "Type",
            Role::Var => "Var",
            Role::DefaultValue => "DefaultValue",
            Role::VarName => "VarName",
            Role::Parts => "Parts",
            Role::Function => "Function",
            Role::ArgumentList => "ArgumentList",
            Role::Arguments => "Arguments",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value(s) a node holds under one role.
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    /// A single optional child.
    Single(Option<&'a Node>),
    /// An ordered sequence of children.
    List(&'a [Node]),
}

impl<'a> Slot<'a> {
    pub fn is_list(&self) -> bool {
        matches!(self, Slot::List(_))
    }

    /// Children held in this slot, in order.
    pub fn children(&self) -> &'a [Node] {
        match *self {
            Slot::Single(Some(node)) => std::slice::from_ref(node),
            Slot::Single(None) => &[],
            Slot::List(nodes) => nodes,
        }
    }
}

fn single(child: &Option<Box<Node>>) -> Slot<'_> {
    Slot::Single(child.as_deref())
}

// ============================================================================
// Variant structs
// ============================================================================

/// Top-level node of a parsed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Root {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub stmts: Vec<Node>,
}

/// A braced statement block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StmtList {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub stmts: Vec<Node>,
}

/// An expression used as a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expression {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    pub expr: Option<Box<Node>>,
}

/// A `?T` nullable type wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Nullable {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    pub expr: Option<Box<Node>>,
}

/// A function parameter declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub by_ref: bool,
    #[serde(default)]
    pub variadic: bool,
    #[serde(rename = "Type")]
    pub type_hint: Option<Box<Node>>,
    pub var: Option<Box<Node>>,
    pub default_value: Option<Box<Node>>,
}

/// A bare identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Identifier {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub value: String,
}

/// A `$name` variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Variable {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    pub var_name: Option<Box<Node>>,
}

/// A possibly qualified name such as `Foo\Bar`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Name {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub parts: Vec<Node>,
}

/// One segment of a [`Name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NamePart {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub value: String,
}

/// A call `function(arguments)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionCall {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    pub function: Option<Box<Node>>,
    pub argument_list: Option<Box<Node>>,
}

/// A parenthesized argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArgumentList {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub arguments: Vec<Node>,
}

/// One call argument, possibly `...$spread` or `&$ref`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Argument {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub variadic: bool,
    #[serde(default)]
    pub is_reference: bool,
    pub expr: Option<Box<Node>>,
}

/// A floating point literal; `value` is the raw lexeme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NumberLiteral {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub value: String,
}

/// An integer literal; `value` is the raw lexeme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IntegerLiteral {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub value: String,
}

/// A string literal with quotes removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StringLiteral {
    pub free_floating: Option<FreeFloating>,
    pub position: Option<Position>,
    #[serde(default)]
    pub value: String,
}

// ============================================================================
// Node enum
// ============================================================================

/// Generates [`Node`], [`NodeKind`], the `From` conversions and the
/// per-variant accessors that every variant shares.
macro_rules! define_nodes {
    ($($variant:ident => $visit:ident),* $(,)?) => {
        /// A syntax tree node.
        ///
        /// Serializes as the bare variant record. Deserializes from the
        /// tagged interchange record, see [`crate::json`].
        #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
        #[serde(tag = "Kind")]
        pub enum Node {
            $($variant($variant),)*
        }

        impl Serialize for Node {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $(Node::$variant(node) => node.serialize(serializer),)*
                }
            }
        }

        /// Variant tag of a [`Node`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum NodeKind {
            $($variant,)*
        }

        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)*
                }
            }
        }

        impl Node {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$variant(_) => NodeKind::$variant,)*
                }
            }

            /// Invoke the visitor method matching this node's variant.
            pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
                match self {
                    $(Node::$variant(node) => visitor.$visit(node),)*
                }
            }

            pub fn free_floating(&self) -> Option<&FreeFloating> {
                match self {
                    $(Node::$variant(node) => node.free_floating.as_ref(),)*
                }
            }

            pub fn free_floating_mut(&mut self) -> &mut Option<FreeFloating> {
                match self {
                    $(Node::$variant(node) => &mut node.free_floating,)*
                }
            }

            pub fn position(&self) -> Option<Position> {
                match self {
                    $(Node::$variant(node) => node.position,)*
                }
            }

            pub fn position_mut(&mut self) -> &mut Option<Position> {
                match self {
                    $(Node::$variant(node) => &mut node.position,)*
                }
            }
        }

        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

define_nodes! {
    Root => visit_root,
    StmtList => visit_stmt_list,
    Expression => visit_expression,
    Nullable => visit_nullable,
    Parameter => visit_parameter,
    Identifier => visit_identifier,
    Variable => visit_variable,
    Name => visit_name,
    NamePart => visit_name_part,
    FunctionCall => visit_function_call,
    ArgumentList => visit_argument_list,
    Argument => visit_argument,
    NumberLiteral => visit_number_literal,
    IntegerLiteral => visit_integer_literal,
    StringLiteral => visit_string_literal,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Node {
    /// Call `f` once per structural role of this node, in declaration order.
    ///
    /// Leaf variants have no roles and never call `f`.
    pub fn for_each_slot<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(Role, Slot<'a>),
    {
        match self {
            Node::Root(n) => f(Role::Stmts, Slot::List(&n.stmts)),
            Node::StmtList(n) => f(Role::Stmts, Slot::List(&n.stmts)),
            Node::Expression(n) => f(Role::Expr, single(&n.expr)),
            Node::Nullable(n) => f(Role::Expr, single(&n.expr)),
            Node::Parameter(n) => {
                f(Role::Type, single(&n.type_hint));
                f(Role::Var, single(&n.var));
                f(Role::DefaultValue, single(&n.default_value));
            }
            Node::Variable(n) => f(Role::VarName, single(&n.var_name)),
            Node::Name(n) => f(Role::Parts, Slot::List(&n.parts)),
            Node::FunctionCall(n) => {
                f(Role::Function, single(&n.function));
                f(Role::ArgumentList, single(&n.argument_list));
            }
            Node::ArgumentList(n) => f(Role::Arguments, Slot::List(&n.arguments)),
            Node::Argument(n) => f(Role::Expr, single(&n.expr)),
            Node::Identifier(_)
            | Node::NamePart(_)
            | Node::NumberLiteral(_)
            | Node::IntegerLiteral(_)
            | Node::StringLiteral(_) => {}
        }
    }

    /// Collected form of [`Node::for_each_slot`].
    pub fn slots(&self) -> Vec<(Role, Slot<'_>)> {
        let mut slots = Vec::new();
        self.for_each_slot(|role, slot| slots.push((role, slot)));
        slots
    }

    /// Whether this variant declares no structural roles.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Identifier(_)
                | Node::NamePart(_)
                | Node::NumberLiteral(_)
                | Node::IntegerLiteral(_)
                | Node::StringLiteral(_)
        )
    }

    /// Attach a position, builder style.
    pub fn with_position(mut self, position: Position) -> Self {
        *self.position_mut() = Some(position);
        self
    }

    /// Attach free-floating tokens, builder style.
    pub fn with_free_floating(mut self, free_floating: FreeFloating) -> Self {
        *self.free_floating_mut() = Some(free_floating);
        self
    }
}

// ============================================================================
// Constructors
// ============================================================================

fn boxed(node: Option<Node>) -> Option<Box<Node>> {
    node.map(Box::new)
}

impl Root {
    pub fn new(stmts: Vec<Node>) -> Self {
        Root {
            stmts,
            ..Default::default()
        }
    }
}

impl StmtList {
    pub fn new(stmts: Vec<Node>) -> Self {
        StmtList {
            stmts,
            ..Default::default()
        }
    }
}

impl Expression {
    pub fn new(expr: Node) -> Self {
        Expression {
            expr: Some(Box::new(expr)),
            ..Default::default()
        }
    }
}

impl Nullable {
    pub fn new(expr: Option<Node>) -> Self {
        Nullable {
            expr: boxed(expr),
            ..Default::default()
        }
    }
}

impl Parameter {
    pub fn new(type_hint: Option<Node>, var: Option<Node>, default_value: Option<Node>) -> Self {
        Parameter {
            type_hint: boxed(type_hint),
            var: boxed(var),
            default_value: boxed(default_value),
            ..Default::default()
        }
    }
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Identifier {
            value: value.into(),
            ..Default::default()
        }
    }
}

impl Variable {
    pub fn new(var_name: Node) -> Self {
        Variable {
            var_name: Some(Box::new(var_name)),
            ..Default::default()
        }
    }
}

impl Name {
    pub fn new(parts: Vec<Node>) -> Self {
        Name {
            parts,
            ..Default::default()
        }
    }

    /// Join the part values with `\`.
    pub fn joined(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Node::NamePart(p) => Some(p.value.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\\")
    }
}

impl NamePart {
    pub fn new(value: impl Into<String>) -> Self {
        NamePart {
            value: value.into(),
            ..Default::default()
        }
    }
}

impl FunctionCall {
    pub fn new(function: Node, argument_list: Node) -> Self {
        FunctionCall {
            function: Some(Box::new(function)),
            argument_list: Some(Box::new(argument_list)),
            ..Default::default()
        }
    }
}

impl ArgumentList {
    pub fn new(arguments: Vec<Node>) -> Self {
        ArgumentList {
            arguments,
            ..Default::default()
        }
    }
}

impl Argument {
    pub fn new(expr: Option<Node>) -> Self {
        Argument {
            expr: boxed(expr),
            ..Default::default()
        }
    }
}

impl NumberLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        NumberLiteral {
            value: value.into(),
            ..Default::default()
        }
    }
}

impl IntegerLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        IntegerLiteral {
            value: value.into(),
            ..Default::default()
        }
    }
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        StringLiteral {
            value: value.into(),
            ..Default::default()
        }
    }
}
