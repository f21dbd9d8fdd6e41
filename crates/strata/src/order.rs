//! Crossing reduction via a barycenter heuristic.
//!
//! True crossing minimization is NP-hard, so ranks are reordered heuristically: each rank
//! is stable-sorted by the mean position of its neighbors in an adjacent, already-ordered
//! rank. Exactly one forward and one backward sweep is performed rather than iterating to
//! a fixed point; the graphs this engine targets are small enough that a single pass
//! captures most of the benefit.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::model::{Edge, NodeId};

/// Reorders each rank's nodes in place. Layers are indexed by rank; the initial order of
/// each layer (the supplied node order) is the tie-break, so identical input always
/// produces identical output.
pub fn reduce_crossings(layers: &mut [Vec<NodeId>], edges: &[Edge]) {
    if layers.len() < 2 {
        return;
    }

    // Edge direction is irrelevant for ordering, so neighbors are collected undirected.
    // The set also absorbs duplicate edges.
    let mut neighbors: FxHashMap<&NodeId, FxHashSet<&NodeId>> = FxHashMap::default();
    for e in edges {
        neighbors.entry(&e.source).or_default().insert(&e.target);
        neighbors.entry(&e.target).or_default().insert(&e.source);
    }

    for r in 1..layers.len() {
        let reference = index_by_position(&layers[r - 1]);
        sort_by_barycenter(&mut layers[r], &neighbors, &reference);
    }

    for r in (0..layers.len() - 1).rev() {
        let reference = index_by_position(&layers[r + 1]);
        sort_by_barycenter(&mut layers[r], &neighbors, &reference);
    }
}

fn index_by_position(layer: &[NodeId]) -> FxHashMap<NodeId, usize> {
    layer
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), i))
        .collect()
}

fn sort_by_barycenter(
    layer: &mut Vec<NodeId>,
    neighbors: &FxHashMap<&NodeId, FxHashSet<&NodeId>>,
    reference: &FxHashMap<NodeId, usize>,
) {
    let mut keyed: Vec<(NodeId, f64)> = layer
        .drain(..)
        .map(|id| {
            let b = barycenter(&id, neighbors, reference);
            (id, b)
        })
        .collect();
    // Stable sort; nodes with no neighbor in the reference rank keep their relative order
    // at the end.
    keyed.sort_by(|a, b| a.1.total_cmp(&b.1));
    layer.extend(keyed.into_iter().map(|(id, _)| id));
}

/// Mean reference-rank index of a node's neighbors, or `+inf` when none of its neighbors
/// are in the reference rank.
fn barycenter(
    id: &NodeId,
    neighbors: &FxHashMap<&NodeId, FxHashSet<&NodeId>>,
    reference: &FxHashMap<NodeId, usize>,
) -> f64 {
    let Some(adjacent) = neighbors.get(id) else {
        return f64::INFINITY;
    };

    let mut sum: f64 = 0.0;
    let mut count: usize = 0;
    for other in adjacent {
        if let Some(&ix) = reference.get(*other) {
            sum += ix as f64;
            count += 1;
        }
    }

    if count == 0 {
        f64::INFINITY
    } else {
        sum / count as f64
    }
}
