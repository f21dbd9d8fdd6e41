pub type Result<T> = std::result::Result<T, Error>;

/// Input-shape violations caught at the pipeline boundary, before any rank or crossing
/// computation runs. Dangling edge references and cycles are deliberately not here; both
/// have defined non-error behavior (see crate docs).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("node id must not be empty")]
    EmptyNodeId,

    #[error("duplicate node id: {id}")]
    DuplicateNodeId { id: String },

    #[error("edge endpoint id must not be empty")]
    EmptyEdgeEndpoint,

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidGap { name: &'static str, value: f64 },

    #[error("graph has {nodes} nodes, exceeding the configured limit of {max}")]
    GraphTooLarge { nodes: usize, max: usize },
}
