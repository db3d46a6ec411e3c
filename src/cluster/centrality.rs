//! Random-walk centrality estimate over the actor/movie graph
//!
//! Visit counts from many short self-avoiding walks approximate how central
//! a vertex is. This is a biased estimator: it ranks by visit frequency under
//! finite walks, not by true betweenness or eigenvector centrality.

use crate::graph::{BipartiteGraph, Graph, VertexHandle, VertexKind};
use log;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

/// Neighbor draws tried before a walk gives up on finding an unvisited vertex
pub const DEFAULT_NEIGHBOR_RETRIES: usize = 10;

/// Most visited vertices of one kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopVisited {
    pub visits: u64,
    /// Every vertex at `visits`; empty when nothing was visited
    pub vertices: Vec<VertexHandle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CentralityEstimate {
    pub actors: TopVisited,
    pub movies: TopVisited,
    pub walks: usize,
}

/// Walk parameters
#[derive(Debug, Clone, Copy)]
pub struct WalkConfig {
    pub walk_count: usize,
    /// Steps taken after the start vertex
    pub walk_length: usize,
    pub neighbor_retries: usize,
}

impl WalkConfig {
    pub fn new(walk_count: usize, walk_length: usize) -> Self {
        Self {
            walk_count,
            walk_length,
            neighbor_retries: DEFAULT_NEIGHBOR_RETRIES,
        }
    }
}

/// Run `walk_count` walks from uniformly random vertices and report the
/// most visited actors and movies
pub fn estimate_centrality<R: Rng + ?Sized>(
    graph: &BipartiteGraph,
    config: &WalkConfig,
    rng: &mut R,
) -> CentralityEstimate {
    let vertex_count = graph.vertex_count();
    if config.walk_count == 0 || vertex_count == 0 {
        return CentralityEstimate::default();
    }

    log::info!(
        "Running {} random walks of up to {} steps",
        config.walk_count,
        config.walk_length
    );

    let mut visits = vec![0u64; vertex_count];
    let mut on_walk = HashSet::new();

    for _ in 0..config.walk_count {
        on_walk.clear();
        let mut current = VertexHandle(rng.gen_range(0..vertex_count) as u32);
        visits[current.index()] += 1;
        on_walk.insert(current);

        for _ in 0..config.walk_length {
            match next_step(graph, current, &on_walk, config.neighbor_retries, rng) {
                Some(next) => {
                    visits[next.index()] += 1;
                    on_walk.insert(next);
                    current = next;
                }
                None => break,
            }
        }
    }

    CentralityEstimate {
        actors: most_visited(graph, &visits, VertexKind::Actor),
        movies: most_visited(graph, &visits, VertexKind::Movie),
        walks: config.walk_count,
    }
}

/// Draw a neighbor not yet on this walk, giving up after `retries` draws
fn next_step<R: Rng + ?Sized>(
    graph: &BipartiteGraph,
    current: VertexHandle,
    on_walk: &HashSet<VertexHandle>,
    retries: usize,
    rng: &mut R,
) -> Option<VertexHandle> {
    let neighbors = graph.adjacent(current);
    if neighbors.is_empty() {
        return None;
    }

    (0..retries)
        .map(|_| neighbors[rng.gen_range(0..neighbors.len())])
        .find(|candidate| !on_walk.contains(candidate))
}

fn most_visited(graph: &BipartiteGraph, visits: &[u64], kind: VertexKind) -> TopVisited {
    let mut top = TopVisited::default();
    for handle in graph.handles().filter(|&h| graph.kind_of(h) == kind) {
        let count = visits[handle.index()];
        if count == 0 || count < top.visits {
            continue;
        }
        if count > top.visits {
            top.visits = count;
            top.vertices.clear();
        }
        top.vertices.push(handle);
    }
    top
}
