//! Single-source shortest path search

use crate::error::{GraphError, GraphResult};
use crate::graph::{CollaborationGraph, Distance, Graph, VertexHandle};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Distance and path for one target vertex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord<'g> {
    pub distance: Distance,
    /// Vertex ids from the source to the target; empty when unreached
    pub path: Vec<&'g str>,
}

/// Result of a single-source search over every vertex of a graph.
///
/// Each vertex keeps one predecessor, written by the same relaxation that
/// writes its distance, so paths rebuilt from it always match the distance.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    distances: Vec<Distance>,
    predecessors: Vec<Option<VertexHandle>>,
}

impl ShortestPaths {
    fn new(source: VertexHandle, vertex_count: usize) -> Self {
        let mut distances = vec![Distance::Unreached; vertex_count];
        distances[source.index()] = Distance::Finite(0);
        Self {
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    fn relax(&mut self, target: VertexHandle, via: VertexHandle, distance: u64) {
        self.distances[target.index()] = Distance::Finite(distance);
        self.predecessors[target.index()] = Some(via);
    }

    pub fn distance(&self, target: VertexHandle) -> Distance {
        self.distances[target.index()]
    }

    /// Handles on the path from the source to `target`
    pub fn path(&self, target: VertexHandle) -> Vec<VertexHandle> {
        if !self.distance(target).is_reached() {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessors[current.index()] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }

    /// Distance and id path for a target id; `None` for an unknown id
    pub fn record<'g, G: Graph>(&self, graph: &'g G, target: &str) -> Option<PathRecord<'g>> {
        let handle = graph.handle_of(target)?;
        Some(self.record_at(graph, handle))
    }

    pub fn record_at<'g, G: Graph>(&self, graph: &'g G, target: VertexHandle) -> PathRecord<'g> {
        PathRecord {
            distance: self.distance(target),
            path: self.path(target).into_iter().map(|h| graph.id_of(h)).collect(),
        }
    }

    /// Every vertex with its record, in arena order
    pub fn records<'a, 'g, G: Graph>(
        &'a self,
        graph: &'g G,
    ) -> impl Iterator<Item = (&'g str, PathRecord<'g>)> + 'a
    where
        'g: 'a,
    {
        graph
            .handles()
            .map(move |h| (graph.id_of(h), self.record_at(graph, h)))
    }

    /// Finite distances with their vertices
    pub fn reached(&self) -> impl Iterator<Item = (VertexHandle, u64)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.finite().map(|d| (VertexHandle(i as u32), d)))
    }
}

/// Frontier entry for the weighted search
#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: u64,
    node: VertexHandle,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn resolve_source<G: Graph>(graph: &G, source: &str) -> GraphResult<VertexHandle> {
    graph
        .handle_of(source)
        .ok_or_else(|| GraphError::UnknownSource(source.to_string()))
}

/// Weighted search over the collaboration graph, where each edge costs its
/// number of shared titles
pub fn weighted_shortest_paths(
    graph: &CollaborationGraph,
    source: &str,
) -> GraphResult<ShortestPaths> {
    let source = resolve_source(graph, source)?;
    let mut paths = ShortestPaths::new(source, graph.vertex_count());
    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0, node: source });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale entry superseded by a cheaper push
        if Distance::Finite(cost) > paths.distance(node) {
            continue;
        }

        for &neighbor in graph.adjacent(node) {
            let Some(weight) = graph.weight(node, neighbor) else {
                continue;
            };
            let candidate = cost + weight;
            if Distance::Finite(candidate) < paths.distance(neighbor) {
                paths.relax(neighbor, node, candidate);
                heap.push(State {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    Ok(paths)
}

/// Breadth-first search counting one per hop
pub fn unweighted_shortest_paths<G: Graph>(graph: &G, source: &str) -> GraphResult<ShortestPaths> {
    let source = resolve_source(graph, source)?;
    Ok(bfs_from(graph, source))
}

/// Breadth-first search from a handle already known to be in the graph
pub fn bfs_from<G: Graph>(graph: &G, source: VertexHandle) -> ShortestPaths {
    let mut paths = ShortestPaths::new(source, graph.vertex_count());
    let mut settled = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        let next = match paths.distance(node) {
            Distance::Finite(d) => d + 1,
            Distance::Unreached => continue,
        };
        for &neighbor in graph.adjacent(node) {
            if !settled[neighbor.index()] && !paths.distance(neighbor).is_reached() {
                paths.relax(neighbor, node, next);
                queue.push_back(neighbor);
            }
        }
    }

    paths
}
