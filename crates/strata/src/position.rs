//! Coordinate assignment from (rank, order-within-rank).
//!
//! Rows are laid out top-down; each row is centered horizontally on `x = 0` so the
//! diagram stays balanced as ranks widen and narrow between re-layouts.

use rustc_hash::FxHashMap;

use crate::dimensions::FALLBACK_SIZE;
use crate::model::{NodeId, Point, Size};

/// Converts ordered layers into concrete top-left positions. `y` advances by each row's
/// tallest box plus `rank_gap`, so rows never overlap vertically; within a row the
/// cursor advances by `width + node_gap`, so boxes never overlap horizontally.
pub fn compute_positions(
    layers: &[Vec<NodeId>],
    dims: &FxHashMap<NodeId, Size>,
    rank_gap: f64,
    node_gap: f64,
) -> FxHashMap<NodeId, Point> {
    let mut positions: FxHashMap<NodeId, Point> = FxHashMap::default();

    let mut y: f64 = 0.0;
    for layer in layers {
        if layer.is_empty() {
            continue;
        }

        let mut row_height: f64 = 0.0;
        let mut total_width: f64 = 0.0;
        for id in layer {
            let size = size_of(dims, id);
            row_height = row_height.max(size.height);
            total_width += size.width;
        }
        total_width += node_gap * (layer.len() - 1) as f64;

        let mut x = -total_width / 2.0;
        for id in layer {
            positions.insert(id.clone(), Point { x, y });
            x += size_of(dims, id).width + node_gap;
        }

        y += row_height + rank_gap;
    }

    positions
}

fn size_of(dims: &FxHashMap<NodeId, Size>, id: &NodeId) -> Size {
    // The pipeline resolves a size for every node; missing entries mean a caller is using
    // this module directly, and the fallback box keeps layout from collapsing.
    dims.get(id).copied().unwrap_or(FALLBACK_SIZE)
}
