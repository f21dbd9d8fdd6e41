//! Layered DAG layout for live pipeline visualizations.
//!
//! The engine is a single pure function, [`layout`], that turns a node/edge list into
//! positioned nodes: rank (layer) assignment via longest-path propagation, crossing
//! reduction via one forward + one backward barycenter sweep, then top-down centered
//! coordinate assignment. It owns no state across calls, so callers can re-run it on
//! every topology change and concurrent calls need no synchronization.
//!
//! The producing graph can be mid-mutation while work progresses, so edges that
//! reference ids outside the node set are expected input and are ignored everywhere
//! rather than rejected. Malformed input shapes (empty or duplicate ids) fail fast
//! with a descriptive [`Error`] before any computation begins.

pub mod dimensions;
pub mod error;
pub mod model;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod rank;

pub use dimensions::DimensionTable;
pub use error::{Error, Result};
pub use model::{
    Edge, Layout, LayoutConfig, Node, NodeId, NodeKind, Point, PositionedNode, Size,
};
pub use pipeline::layout;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
