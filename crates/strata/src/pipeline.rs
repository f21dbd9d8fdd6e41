//! The layout pipeline: validate, rank, order, position.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};
use crate::model::{Edge, Layout, LayoutConfig, Node, NodeId, Point, PositionedNode, Size};
use crate::{order, position, rank};

/// Computes positions for every supplied node. Pure and deterministic: two calls with
/// equal input (including node order, which breaks ordering ties) produce identical
/// output. Edges are passed through unchanged.
///
/// Edges referencing ids outside the node set are ignored, duplicate edges count once,
/// and disconnected nodes land at rank 0. Malformed shapes (empty ids, duplicate ids,
/// bad gaps, oversized graphs) fail fast before any computation.
pub fn layout(nodes: &[Node], edges: &[Edge], config: &LayoutConfig) -> Result<Layout> {
    validate(nodes, edges, config)?;

    if nodes.is_empty() {
        return Ok(Layout {
            nodes: Vec::new(),
            edges: edges.to_vec(),
        });
    }

    let ranks = rank::assign_ranks(nodes, edges);

    let max_rank = ranks.values().copied().max().unwrap_or(0);
    let mut layers: Vec<Vec<NodeId>> = vec![Vec::new(); max_rank as usize + 1];
    for n in nodes {
        let r = ranks.get(&n.id).copied().unwrap_or(0);
        layers[r as usize].push(n.id.clone());
    }

    order::reduce_crossings(&mut layers, edges);

    let dims: FxHashMap<NodeId, Size> = nodes
        .iter()
        .map(|n| (n.id.clone(), config.dimensions.resolve(n.kind)))
        .collect();
    let positions =
        position::compute_positions(&layers, &dims, config.rank_gap, config.node_gap);

    let positioned = nodes
        .iter()
        .map(|n| {
            let size = config.dimensions.resolve(n.kind);
            let point = positions
                .get(&n.id)
                .copied()
                .unwrap_or(Point { x: 0.0, y: 0.0 });
            PositionedNode {
                id: n.id.clone(),
                kind: n.kind,
                x: point.x,
                y: point.y,
                width: size.width,
                height: size.height,
            }
        })
        .collect();

    Ok(Layout {
        nodes: positioned,
        edges: edges.to_vec(),
    })
}

fn validate(nodes: &[Node], edges: &[Edge], config: &LayoutConfig) -> Result<()> {
    for (name, value) in [("rank_gap", config.rank_gap), ("node_gap", config.node_gap)] {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidGap { name, value });
        }
    }

    if nodes.len() > config.max_nodes {
        return Err(Error::GraphTooLarge {
            nodes: nodes.len(),
            max: config.max_nodes,
        });
    }

    let mut seen: FxHashSet<&NodeId> = FxHashSet::default();
    for n in nodes {
        if n.id.is_empty() {
            return Err(Error::EmptyNodeId);
        }
        if !seen.insert(&n.id) {
            return Err(Error::DuplicateNodeId {
                id: n.id.to_string(),
            });
        }
    }

    for e in edges {
        if e.source.is_empty() || e.target.is_empty() {
            return Err(Error::EmptyEdgeEndpoint);
        }
    }

    Ok(())
}
