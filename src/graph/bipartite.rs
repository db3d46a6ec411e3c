//! Typed actor/movie bipartite graph

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, VertexHandle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which side of the bipartition a vertex belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    Actor,
    Movie,
}

#[derive(Debug, Clone)]
struct Vertex {
    id: String,
    kind: VertexKind,
    /// Display name for actors, title for movies
    payload: String,
}

/// Undirected, unweighted graph where every edge joins an actor and a movie
#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexHandle>,
    adjacency: Vec<Vec<VertexHandle>>,
    edge_count: usize,
    actor_count: usize,
}

impl BipartiteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a typed vertex; no-op when the id is already present
    pub fn add_vertex(&mut self, id: &str, kind: VertexKind, payload: &str) -> VertexHandle {
        if let Some(&handle) = self.index.get(id) {
            return handle;
        }

        let handle = VertexHandle(self.vertices.len() as u32);
        self.index.insert(id.to_string(), handle);
        self.vertices.push(Vertex {
            id: id.to_string(),
            kind,
            payload: payload.to_string(),
        });
        self.adjacency.push(Vec::new());
        if kind == VertexKind::Actor {
            self.actor_count += 1;
        }
        handle
    }

    /// Connect an existing actor and an existing movie (either order)
    pub fn add_edge(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let ha = self
            .handle_of(a)
            .ok_or_else(|| GraphError::MissingVertex(a.to_string()))?;
        let hb = self
            .handle_of(b)
            .ok_or_else(|| GraphError::MissingVertex(b.to_string()))?;
        if self.kind_of(ha) == self.kind_of(hb) {
            return Err(GraphError::SameKindEdge(a.to_string(), b.to_string()));
        }

        self.adjacency[ha.index()].push(hb);
        self.adjacency[hb.index()].push(ha);
        self.edge_count += 1;
        Ok(())
    }

    pub fn kind_of(&self, handle: VertexHandle) -> VertexKind {
        self.vertices[handle.index()].kind
    }

    pub fn payload_of(&self, handle: VertexHandle) -> &str {
        &self.vertices[handle.index()].payload
    }

    /// Kind and payload of a vertex id
    pub fn get_vertex_data(&self, id: &str) -> Option<(VertexKind, &str)> {
        self.handle_of(id)
            .map(|h| (self.kind_of(h), self.payload_of(h)))
    }

    pub fn is_actor(&self, handle: VertexHandle) -> bool {
        self.kind_of(handle) == VertexKind::Actor
    }

    pub fn actor_count(&self) -> usize {
        self.actor_count
    }

    pub fn movie_count(&self) -> usize {
        self.vertices.len() - self.actor_count
    }
}

impl Graph for BipartiteGraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn handle_of(&self, id: &str) -> Option<VertexHandle> {
        self.index.get(id).copied()
    }

    fn id_of(&self, handle: VertexHandle) -> &str {
        &self.vertices[handle.index()].id
    }

    fn adjacent(&self, handle: VertexHandle) -> &[VertexHandle] {
        &self.adjacency[handle.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_join_actor_and_movie() {
        let mut graph = BipartiteGraph::new();
        graph.add_vertex("tt1", VertexKind::Movie, "M1");
        graph.add_vertex("nm1", VertexKind::Actor, "Ann");
        graph.add_vertex("nm2", VertexKind::Actor, "Bob");

        graph.add_edge("tt1", "nm1").unwrap();
        assert!(graph.edge_exists("nm1", "tt1"));
        assert_eq!(graph.get_neighbors("tt1"), vec!["nm1"]);

        let err = graph.add_edge("nm1", "nm2").unwrap_err();
        assert!(matches!(err, GraphError::SameKindEdge(_, _)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_missing_endpoint_rejected() {
        let mut graph = BipartiteGraph::new();
        graph.add_vertex("tt1", VertexKind::Movie, "M1");
        assert_eq!(
            graph.add_edge("tt1", "nm9"),
            Err(GraphError::MissingVertex("nm9".to_string()))
        );
    }

    #[test]
    fn test_vertex_data_and_counts() {
        let mut graph = BipartiteGraph::new();
        graph.add_vertex("tt1", VertexKind::Movie, "M1");
        graph.add_vertex("nm1", VertexKind::Actor, "Ann");
        graph.add_vertex("nm1", VertexKind::Movie, "ignored");

        assert_eq!(graph.get_vertex_data("nm1"), Some((VertexKind::Actor, "Ann")));
        assert_eq!(graph.get_vertex_data("nm2"), None);
        assert_eq!(graph.actor_count(), 1);
        assert_eq!(graph.movie_count(), 1);
    }
}
