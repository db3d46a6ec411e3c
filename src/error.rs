//! Error types for graph construction and analytics preconditions

use thiserror::Error;

pub type GraphResult<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex not found: {0}")]
    MissingVertex(String),

    #[error("Self-loop edge on vertex: {0}")]
    SelfLoop(String),

    #[error("Collaboration edge needs at least one shared title: {0} -- {1}")]
    EmptyEdge(String, String),

    #[error("Bipartite edge must join an actor and a movie: {0} -- {1}")]
    SameKindEdge(String, String),

    #[error("Unknown search source: {0}")]
    UnknownSource(String),

    #[error("Component not found: rank {0}")]
    UnknownComponent(usize),
}
