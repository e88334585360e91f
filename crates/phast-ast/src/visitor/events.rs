// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! EventRecorder visitor.
//!
//! Records the exact sequence of structural hooks a traversal produces.
//! Golden tests and the `events` command compare against this sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::traits::{VisitResult, Visitor};
use crate::nodes::{Node, NodeKind, Role};

/// One structural hook invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalEvent {
    EnterNode { kind: NodeKind },
    LeaveNode { kind: NodeKind },
    EnterRole { role: Role, is_list: bool },
    LeaveRole { role: Role, is_list: bool },
}

impl fmt::Display for TraversalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalEvent::EnterNode { kind } => write!(f, "enter {}", kind),
            TraversalEvent::LeaveNode { kind } => write!(f, "leave {}", kind),
            TraversalEvent::EnterRole { role, is_list } => {
                write!(f, "enter {}{}", role, list_suffix(*is_list))
            }
            TraversalEvent::LeaveRole { role, is_list } => {
                write!(f, "leave {}{}", role, list_suffix(*is_list))
            }
        }
    }
}

fn list_suffix(is_list: bool) -> &'static str {
    if is_list {
        " (list)"
    } else {
        ""
    }
}

/// A visitor that records every structural hook.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: Vec<TraversalEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the events of a full walk of `root`.
    pub fn record(root: &Node) -> Vec<TraversalEvent> {
        let mut recorder = EventRecorder::new();
        super::traverse(&mut recorder, root);
        recorder.events
    }

    pub fn events(&self) -> &[TraversalEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraversalEvent> {
        self.events
    }
}

impl Visitor for EventRecorder {
    fn enter_node(&mut self, node: &Node) -> VisitResult {
        self.events.push(TraversalEvent::EnterNode { kind: node.kind() });
        VisitResult::Continue
    }

    fn leave_node(&mut self, node: &Node) {
        self.events.push(TraversalEvent::LeaveNode { kind: node.kind() });
    }

    fn enter_role(&mut self, role: Role, is_list: bool) {
        self.events.push(TraversalEvent::EnterRole { role, is_list });
    }

    fn leave_role(&mut self, role: Role, is_list: bool) {
        self.events.push(TraversalEvent::LeaveRole { role, is_list });
    }
}
