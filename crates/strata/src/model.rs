//! Core node/edge types and layout tunables.
//!
//! These are intentionally lightweight and `Clone`-friendly: a graph exists only for the
//! duration of one `layout` call, and any positional memory across re-layouts belongs to
//! the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dimensions::DimensionTable;

/// Identifier for a node, unique within a single `layout` call.
///
/// Must be non-empty; validated at the pipeline boundary rather than on construction so
/// deserialized input is checked in one place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The kind of a pipeline-diagram node. Layout only uses it to pick box dimensions;
/// what a node means is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Agent,
    Task,
    Tool,
    Artifact,
    Annotation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }
}

/// A directed relation between two nodes. Edges have no identity beyond their endpoints;
/// duplicates are permitted and have no effect beyond a single occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// An input node annotated with its box and top-left position. `x` is the node's left
/// edge; `y` is the top of its rank's row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The result of one layout call: every input node positioned, edges passed through
/// unchanged for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
}

/// Layout tunables. Always passed explicitly; there is no module-level configuration.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Vertical gap between consecutive rank rows.
    pub rank_gap: f64,
    /// Horizontal gap between adjacent nodes within a rank.
    pub node_gap: f64,
    /// Hard ceiling on the node count. Crossing reduction is quadratic in the worst case,
    /// so oversized graphs are rejected up front instead of degrading unboundedly.
    pub max_nodes: usize,
    pub dimensions: DimensionTable,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rank_gap: 60.0,
            node_gap: 40.0,
            max_nodes: 10_000,
            dimensions: DimensionTable::default(),
        }
    }
}
