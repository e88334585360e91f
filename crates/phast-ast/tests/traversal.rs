// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Integration tests for the traverser and the stock visitors.

use phast_ast::{
    traverse, Argument, ArgumentList, DumpOptions, Dumper, EventRecorder, FunctionCall,
    Identifier, IntegerLiteral, KindCounter, Name, NamePart, Node, NodeKind, Nullable,
    NumberLiteral, Parameter, Role, Root, StmtList, StringLiteral, TraversalEvent,
    TraversalState, Traverser, Variable, VisitResult, Visitor,
};

use TraversalEvent::{EnterNode, EnterRole, LeaveNode, LeaveRole};

fn canonical_tree() -> Node {
    Root::new(vec![
        Nullable::new(Some(Parameter::new(None, None, None).into())).into(),
        Identifier::new("").into(),
        ArgumentList::new(vec![
            Argument::new(None).into(),
            Argument::new(Some(NumberLiteral::new("1.5").into())).into(),
        ])
        .into(),
    ])
    .into()
}

fn enter(kind: NodeKind) -> TraversalEvent {
    EnterNode { kind }
}

fn leave(kind: NodeKind) -> TraversalEvent {
    LeaveNode { kind }
}

fn enter_single(role: Role) -> TraversalEvent {
    EnterRole {
        role,
        is_list: false,
    }
}

fn leave_single(role: Role) -> TraversalEvent {
    LeaveRole {
        role,
        is_list: false,
    }
}

fn enter_list(role: Role) -> TraversalEvent {
    EnterRole {
        role,
        is_list: true,
    }
}

fn leave_list(role: Role) -> TraversalEvent {
    LeaveRole {
        role,
        is_list: true,
    }
}

// =============================================================================
// Event order
// =============================================================================

#[test]
fn canonical_tree_event_sequence() {
    let events = EventRecorder::record(&canonical_tree());
    assert_eq!(
        events,
        vec![
            enter(NodeKind::Root),
            enter_list(Role::Stmts),
            enter(NodeKind::Nullable),
            enter_single(Role::Expr),
            enter(NodeKind::Parameter),
            leave(NodeKind::Parameter),
            leave_single(Role::Expr),
            leave(NodeKind::Nullable),
            enter(NodeKind::Identifier),
            leave(NodeKind::Identifier),
            enter(NodeKind::ArgumentList),
            enter_list(Role::Arguments),
            enter(NodeKind::Argument),
            leave(NodeKind::Argument),
            enter(NodeKind::Argument),
            enter_single(Role::Expr),
            enter(NodeKind::NumberLiteral),
            leave(NodeKind::NumberLiteral),
            leave_single(Role::Expr),
            leave(NodeKind::Argument),
            leave_list(Role::Arguments),
            leave(NodeKind::ArgumentList),
            leave_list(Role::Stmts),
            leave(NodeKind::Root),
        ]
    );
}

#[test]
fn parameter_roles_follow_declaration_order() {
    let tree: Node = Parameter::new(
        Some(Identifier::new("int").into()),
        Some(Variable::new(Identifier::new("x").into()).into()),
        Some(IntegerLiteral::new("0").into()),
    )
    .into();

    let roles: Vec<Role> = EventRecorder::record(&tree)
        .into_iter()
        .filter_map(|event| match event {
            EnterRole { role, .. } => Some(role),
            _ => None,
        })
        .collect();
    assert_eq!(
        roles,
        vec![Role::Type, Role::Var, Role::VarName, Role::DefaultValue]
    );
}

#[test]
fn single_roles_precede_list_children() {
    let call: Node = FunctionCall::new(
        Name::new(vec![NamePart::new("Foo").into(), NamePart::new("bar").into()]).into(),
        ArgumentList::new(vec![]).into(),
    )
    .into();

    let events = EventRecorder::record(&call);
    let function_at = events
        .iter()
        .position(|e| *e == enter_single(Role::Function))
        .unwrap();
    let parts_at = events
        .iter()
        .position(|e| *e == enter_list(Role::Parts))
        .unwrap();
    let arg_list_at = events
        .iter()
        .position(|e| *e == enter_single(Role::ArgumentList))
        .unwrap();
    assert!(function_at < parts_at);
    assert!(parts_at < arg_list_at);
}

#[test]
fn empty_lists_still_emit_role_events() {
    let tree: Node = StmtList::new(vec![]).into();
    assert_eq!(
        EventRecorder::record(&tree),
        vec![
            enter(NodeKind::StmtList),
            enter_list(Role::Stmts),
            leave_list(Role::Stmts),
            leave(NodeKind::StmtList),
        ]
    );
}

#[test]
fn leaf_nodes_emit_no_role_events() {
    for leaf in [
        Node::from(Identifier::new("a")),
        NamePart::new("b").into(),
        NumberLiteral::new("1.0").into(),
        IntegerLiteral::new("1").into(),
        StringLiteral::new("s").into(),
    ] {
        assert!(leaf.is_leaf());
        let kind = leaf.kind();
        assert_eq!(EventRecorder::record(&leaf), vec![enter(kind), leave(kind)]);
    }
}

// =============================================================================
// Control flow
// =============================================================================

/// Skips the children of every `Nullable` and counts `leave_node` calls.
#[derive(Default)]
struct SkipNullable {
    entered: Vec<NodeKind>,
    left: usize,
}

impl Visitor for SkipNullable {
    fn enter_node(&mut self, node: &Node) -> VisitResult {
        self.entered.push(node.kind());
        (node.kind() != NodeKind::Nullable).into()
    }

    fn leave_node(&mut self, _node: &Node) {
        self.left += 1;
    }
}

#[test]
fn skip_children_suppresses_descent_but_not_leave() {
    let mut visitor = SkipNullable::default();
    let summary = traverse(&mut visitor, &canonical_tree());

    assert!(!visitor.entered.contains(&NodeKind::Parameter));
    assert_eq!(visitor.entered.len(), 7);
    assert_eq!(visitor.left, 7);
    assert_eq!(summary.nodes_entered, 7);
    assert_eq!(summary.nodes_skipped, 1);
}

/// Stops looking once the first literal is found.
#[derive(Default)]
struct FirstLiteral {
    found: Option<String>,
}

impl Visitor for FirstLiteral {
    fn enter_node(&mut self, node: &Node) -> VisitResult {
        if self.found.is_some() {
            return VisitResult::SkipChildren;
        }
        node.accept(self);
        VisitResult::Continue
    }

    fn visit_number_literal(&mut self, node: &NumberLiteral) {
        self.found = Some(node.value.clone());
    }

    fn visit_integer_literal(&mut self, node: &IntegerLiteral) {
        self.found = Some(node.value.clone());
    }
}

#[test]
fn visitor_state_cuts_walk_short() {
    let tree: Node = Root::new(vec![
        NumberLiteral::new("2.5").into(),
        ArgumentList::new(vec![Argument::new(Some(IntegerLiteral::new("7").into())).into()])
            .into(),
    ])
    .into();

    let mut visitor = FirstLiteral::default();
    let summary = traverse(&mut visitor, &tree);

    assert_eq!(visitor.found.as_deref(), Some("2.5"));
    // The ArgumentList is entered but not descended into.
    assert_eq!(summary.nodes_entered, 3);
    assert_eq!(summary.nodes_skipped, 1);
}

#[test]
fn traverser_is_reusable() {
    let tree = canonical_tree();
    let mut counter = KindCounter::new();
    let mut traverser = Traverser::new(&mut counter);
    assert_eq!(traverser.state(), TraversalState::Idle);

    let first = traverser.traverse(&tree);
    let second = traverser.traverse(&tree);
    assert_eq!(traverser.state(), TraversalState::Done);
    assert_eq!(first, second);
    assert_eq!(first.nodes_entered, 8);

    assert_eq!(counter.get(NodeKind::Argument), 4);
    assert_eq!(counter.total(), 16);
}

#[test]
fn visitor_as_trait_object() {
    let mut recorder = EventRecorder::new();
    let visitor: &mut dyn Visitor = &mut recorder;
    traverse(visitor, &canonical_tree());
    assert_eq!(recorder.events().len(), 24);
}

// =============================================================================
// Dumper
// =============================================================================

#[test]
fn dumper_prints_canonical_tree() {
    let out = Dumper::dump(&canonical_tree(), DumpOptions::default());
    assert_eq!(
        out,
        "\
Root
  Stmts:
    Nullable
      Expr:
        Parameter
    Identifier
    ArgumentList
      Arguments:
        Argument
        Argument
          Expr:
            NumberLiteral
"
    );
}

#[test]
fn dumper_through_traverser_keeps_buffer() {
    let mut dumper = Dumper::new(DumpOptions {
        show_roles: false,
        show_values: true,
        ..Default::default()
    });
    Traverser::new(&mut dumper).traverse(&canonical_tree());
    assert!(dumper.as_str().contains("NumberLiteral 1.5\n"));
    assert!(dumper.into_string().starts_with("Root\n  Nullable\n"));
}
