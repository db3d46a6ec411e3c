//! Graph representations and algorithms module

pub mod algorithms;
pub mod bipartite;
pub mod builder;
pub mod collaboration;
pub mod separation;

pub use bipartite::{BipartiteGraph, VertexKind};
pub use collaboration::CollaborationGraph;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Map;
use std::ops::Range;

/// Iterator over every handle of a graph, in arena order
pub type Handles = Map<Range<u32>, fn(u32) -> VertexHandle>;

/// Stable index of a vertex inside a graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexHandle(pub(crate) u32);

impl VertexHandle {
    /// Position of the vertex in the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Hop or weight distance, with an explicit variant for vertices never reached.
///
/// Every `Finite` value orders before `Unreached`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance {
    Finite(u64),
    Unreached,
}

impl Distance {
    pub fn is_reached(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreached => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreached => write!(f, "unreachable"),
        }
    }
}

/// Read-only contract shared by the collaboration and bipartite graphs.
///
/// Vertices live in an arena addressed by [`VertexHandle`]; the string ids
/// are resolved once through a lookup table.
pub trait Graph {
    /// Number of vertices in the arena
    fn vertex_count(&self) -> usize;

    /// Number of undirected edges
    fn edge_count(&self) -> usize;

    /// Resolve a vertex id to its handle
    fn handle_of(&self, id: &str) -> Option<VertexHandle>;

    /// Vertex id stored at a handle
    fn id_of(&self, handle: VertexHandle) -> &str;

    /// Adjacency list of a vertex
    fn adjacent(&self, handle: VertexHandle) -> &[VertexHandle];

    fn vertex_exists(&self, id: &str) -> bool {
        self.handle_of(id).is_some()
    }

    /// Ids of the neighbors of `id`; empty for an unknown vertex
    fn get_neighbors(&self, id: &str) -> Vec<&str> {
        match self.handle_of(id) {
            Some(handle) => self
                .adjacent(handle)
                .iter()
                .map(|&n| self.id_of(n))
                .collect(),
            None => Vec::new(),
        }
    }

    fn edge_exists(&self, a: &str, b: &str) -> bool {
        match (self.handle_of(a), self.handle_of(b)) {
            (Some(ha), Some(hb)) => self.adjacent(ha).contains(&hb),
            _ => false,
        }
    }

    /// Every vertex handle, in arena order
    fn handles(&self) -> Handles {
        (0..self.vertex_count() as u32).map(VertexHandle as fn(u32) -> VertexHandle)
    }

    /// Every vertex id, in arena order
    fn all_vertices(&self) -> Vec<&str> {
        self.handles().map(|h| self.id_of(h)).collect()
    }
}
