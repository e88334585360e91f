//! CLI front door.
//!
//! Helpers behind the `phast` subcommands:
//! - `dump` - indented tree listing
//! - `events` - the hook sequence a traversal produces
//! - `json` - canonical (or interchange) JSON of the tree
//! - `stats` - node counts per kind as a JSON response
//!
//! Every command reads one tree in the interchange JSON form (each
//! record carries a `"Kind"` key), from a file or from stdin when no
//! path (or `-`) is given. All functions return `Result<T, PhastError>` so
//! `main.rs` can turn failures into an `ErrorResponse`.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use phast_ast::json::{
    from_json, to_json_compact, to_json_pretty, to_tagged_json, to_tagged_json_pretty,
};
use phast_ast::{traverse, DumpOptions, Dumper, EventRecorder, KindCounter, Node, NodeKind};
use phast_core::error::PhastError;
use phast_core::output::SCHEMA_VERSION;

// ============================================================================
// Input
// ============================================================================

/// Read a tree from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_tree(path: Option<&Path>) -> Result<Node, PhastError> {
    let text = match path {
        Some(path) if path != Path::new("-") => read_file(path)?,
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    parse_tree(&text)
}

/// Parse a tree from its JSON text.
pub fn parse_tree(text: &str) -> Result<Node, PhastError> {
    if text.trim().is_empty() {
        return Err(PhastError::InvalidInput {
            message: "input is empty".to_string(),
            line: 0,
            column: 0,
        });
    }
    let node = from_json(text)?;
    debug!(kind = %node.kind(), "tree loaded");
    Ok(node)
}

fn read_file(path: &Path) -> Result<String, PhastError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => PhastError::file_not_found(path.display().to_string()),
        _ => PhastError::from(err),
    })
}

// ============================================================================
// Commands
// ============================================================================

/// Render the tree as an indented listing.
pub fn run_dump(root: &Node, options: DumpOptions) -> String {
    Dumper::dump(root, options)
}

/// Render the traversal hook sequence, one event per line or as a JSON array.
pub fn run_events(root: &Node, as_json: bool) -> Result<String, PhastError> {
    let events = EventRecorder::record(root);
    debug!(count = events.len(), "events recorded");
    if as_json {
        return Ok(serde_json::to_string_pretty(&events)?);
    }
    let mut out = String::new();
    for event in &events {
        out.push_str(&event.to_string());
        out.push('\n');
    }
    Ok(out)
}

/// Re-emit the tree as JSON.
///
/// The canonical form has no `"Kind"` keys and cannot be read back;
/// `tagged` selects the interchange form the other commands accept.
pub fn run_json(root: &Node, compact: bool, tagged: bool) -> Result<String, PhastError> {
    let text = match (tagged, compact) {
        (false, false) => to_json_pretty(root)?,
        (false, true) => to_json_compact(root)?,
        (true, false) => to_tagged_json_pretty(root)?,
        (true, true) => to_tagged_json(root)?,
    };
    Ok(text)
}

/// Response for the `stats` command.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Status: "ok".
    pub status: String,
    /// Schema version for compatibility.
    pub schema_version: String,
    /// Kind of the root node.
    pub root: NodeKind,
    /// Total nodes entered.
    pub nodes: usize,
    /// Deepest node level, the root being 0.
    pub max_depth: usize,
    /// Count per node kind, in declaration order.
    pub kinds: BTreeMap<NodeKind, usize>,
}

/// Count nodes per kind and measure depth.
pub fn run_stats(root: &Node) -> StatsResponse {
    let mut counter = KindCounter::new();
    let summary = traverse(&mut counter, root);
    StatsResponse {
        status: "ok".to_string(),
        schema_version: SCHEMA_VERSION.to_string(),
        root: root.kind(),
        nodes: summary.nodes_entered,
        max_depth: summary.max_depth,
        kinds: counter.into_counts(),
    }
}
