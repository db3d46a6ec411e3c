//! Component analysis module

pub mod centrality;
pub mod detection;
pub mod metrics;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, VertexHandle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A connected component, ranked by size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// 1-based rank, largest component first
    pub rank: usize,

    /// Members in traversal order
    pub members: Vec<VertexHandle>,
}

impl Component {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Label of the form "Component 1"
    pub fn label(&self) -> String {
        format!("Component {}", self.rank)
    }

    /// Member ids resolved through the graph the component was found in
    pub fn member_ids<'g, G: Graph>(&self, graph: &'g G) -> Vec<&'g str> {
        self.members.iter().map(|&h| graph.id_of(h)).collect()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component {} ({} members)", self.rank, self.size())
    }
}

/// All components of a graph snapshot, sorted by descending size
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    components: Vec<Component>,
}

impl Components {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Component by 1-based rank
    pub fn get(&self, rank: usize) -> GraphResult<&Component> {
        rank.checked_sub(1)
            .and_then(|i| self.components.get(i))
            .ok_or(GraphError::UnknownComponent(rank))
    }

    /// Component by label, e.g. "Component 1"
    pub fn by_label(&self, label: &str) -> Option<&Component> {
        let rank = label.strip_prefix("Component ")?.trim().parse().ok()?;
        self.get(rank).ok()
    }

    pub fn largest(&self) -> Option<&Component> {
        self.components.first()
    }

    /// Total number of vertices over all components
    pub fn vertex_total(&self) -> usize {
        self.components.iter().map(Component::size).sum()
    }
}

impl<'a> IntoIterator for &'a Components {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
