//! Rank (layer) assignment via longest-path propagation.
//!
//! A node's rank is the length of the longest path reaching it from any root, so every
//! ancestor lands strictly above all of its descendants. Adjacency is built only from
//! edges whose both endpoints are confirmed members of the node set; the producing graph
//! can be mid-mutation, so dangling references are expected input, not an error.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

use crate::model::{Edge, Node, NodeId};

/// Assigns every supplied node a rank `>= 0`. For every edge with both endpoints present,
/// `rank(target) >= rank(source) + 1`. Runs in O(V + E).
pub fn assign_ranks(nodes: &[Node], edges: &[Edge]) -> FxHashMap<NodeId, u32> {
    let ids: FxHashSet<&NodeId> = nodes.iter().map(|n| &n.id).collect();

    let mut children: FxHashMap<&NodeId, Vec<&NodeId>> = FxHashMap::default();
    let mut in_degree: FxHashMap<&NodeId, usize> = FxHashMap::default();
    let mut seen: FxHashSet<(&NodeId, &NodeId)> = FxHashSet::default();
    for e in edges {
        if !ids.contains(&e.source) || !ids.contains(&e.target) {
            continue;
        }
        // Duplicate edges must not inflate the in-degree bookkeeping below.
        if !seen.insert((&e.source, &e.target)) {
            continue;
        }
        children.entry(&e.source).or_default().push(&e.target);
        *in_degree.entry(&e.target).or_insert(0) += 1;
    }

    let mut ranks: FxHashMap<NodeId, u32> = FxHashMap::default();
    let mut queue: VecDeque<&NodeId> = VecDeque::new();
    for n in nodes {
        if in_degree.get(&n.id).copied().unwrap_or(0) == 0 {
            ranks.insert(n.id.clone(), 0);
            queue.push_back(&n.id);
        }
    }

    // A child is enqueued only once every one of its parents has contributed, so its rank
    // settles on the longest path length rather than whichever path reached it first.
    let mut processed: FxHashMap<&NodeId, usize> = FxHashMap::default();
    while let Some(id) = queue.pop_front() {
        let rank = ranks.get(id).copied().unwrap_or(0);
        let Some(out) = children.get(id) else {
            continue;
        };
        for &child in out {
            let entry = ranks.entry(child.clone()).or_insert(0);
            *entry = (*entry).max(rank + 1);
            let count = processed.entry(child).or_insert(0);
            *count += 1;
            if *count == in_degree.get(child).copied().unwrap_or(0) {
                queue.push_back(child);
            }
        }
    }

    // A cycle keeps a node's processed-parent counter from ever completing, so it never
    // reaches the queue. Such nodes fall back to rank 0 rather than being dropped.
    for n in nodes {
        ranks.entry(n.id.clone()).or_insert(0);
    }

    ranks
}
