//! Weighted actor-to-actor collaboration graph

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, VertexHandle};
use std::collections::{BTreeSet, HashMap};

/// Display name recorded when a person id is missing from the name table
pub const UNKNOWN_NAME: &str = "ERROR";

/// Undirected actor graph whose edges carry the set of shared movie titles.
///
/// An edge's weight is the size of its title set, so actors who share more
/// movies sit further apart for weighted searches.
#[derive(Debug, Clone, Default)]
pub struct CollaborationGraph {
    /// Person ids by handle
    ids: Vec<String>,

    /// Display names by handle
    names: Vec<String>,

    /// Person id to handle
    index: HashMap<String, VertexHandle>,

    /// Adjacency lists by handle
    adjacency: Vec<Vec<VertexHandle>>,

    /// Edge slot for each normalized (low, high) handle pair
    edge_slots: HashMap<(VertexHandle, VertexHandle), usize>,

    /// Shared titles per edge slot
    edge_titles: Vec<BTreeSet<String>>,
}

fn edge_key(a: VertexHandle, b: VertexHandle) -> (VertexHandle, VertexHandle) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl CollaborationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with room for `vertex_capacity` actors
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(vertex_capacity),
            names: Vec::with_capacity(vertex_capacity),
            index: HashMap::with_capacity(vertex_capacity),
            adjacency: Vec::with_capacity(vertex_capacity),
            edge_slots: HashMap::new(),
            edge_titles: Vec::new(),
        }
    }

    /// Add an actor; no-op when the id is already present
    pub fn add_vertex(&mut self, id: &str, name: &str) -> VertexHandle {
        if let Some(&handle) = self.index.get(id) {
            return handle;
        }

        let handle = VertexHandle(self.ids.len() as u32);
        self.index.insert(id.to_string(), handle);
        self.ids.push(id.to_string());
        self.names.push(name.to_string());
        self.adjacency.push(Vec::new());
        handle
    }

    /// Connect two existing actors, merging `titles` into any existing edge.
    ///
    /// At least one title is required so every edge weighs one or more.
    pub fn add_edge<I>(&mut self, a: &str, b: &str, titles: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = String>,
    {
        let ha = self
            .handle_of(a)
            .ok_or_else(|| GraphError::MissingVertex(a.to_string()))?;
        let hb = self
            .handle_of(b)
            .ok_or_else(|| GraphError::MissingVertex(b.to_string()))?;
        if ha == hb {
            return Err(GraphError::SelfLoop(a.to_string()));
        }
        let titles: BTreeSet<String> = titles.into_iter().collect();
        if titles.is_empty() {
            return Err(GraphError::EmptyEdge(a.to_string(), b.to_string()));
        }

        let key = edge_key(ha, hb);
        let slot = match self.edge_slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.edge_titles.len();
                self.edge_titles.push(BTreeSet::new());
                self.edge_slots.insert(key, slot);
                self.adjacency[ha.index()].push(hb);
                self.adjacency[hb.index()].push(ha);
                slot
            }
        };
        self.edge_titles[slot].extend(titles);
        Ok(())
    }

    /// Shared titles of the edge between two actor ids
    pub fn get_edge_data(&self, a: &str, b: &str) -> Option<&BTreeSet<String>> {
        let ha = self.handle_of(a)?;
        let hb = self.handle_of(b)?;
        self.titles_between(ha, hb)
    }

    pub fn titles_between(&self, a: VertexHandle, b: VertexHandle) -> Option<&BTreeSet<String>> {
        self.edge_slots
            .get(&edge_key(a, b))
            .map(|&slot| &self.edge_titles[slot])
    }

    /// Edge cost used by weighted searches: the number of shared titles
    pub fn weight(&self, a: VertexHandle, b: VertexHandle) -> Option<u64> {
        self.titles_between(a, b).map(|titles| titles.len() as u64)
    }

    pub fn name_of(&self, handle: VertexHandle) -> &str {
        &self.names[handle.index()]
    }
}

impl Graph for CollaborationGraph {
    fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_titles.len()
    }

    fn handle_of(&self, id: &str) -> Option<VertexHandle> {
        self.index.get(id).copied()
    }

    fn id_of(&self, handle: VertexHandle) -> &str {
        &self.ids[handle.index()]
    }

    fn adjacent(&self, handle: VertexHandle) -> &[VertexHandle] {
        &self.adjacency[handle.index()]
    }

    fn edge_exists(&self, a: &str, b: &str) -> bool {
        self.get_edge_data(a, b).is_some()
    }
}
