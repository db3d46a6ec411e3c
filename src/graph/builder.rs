//! Graph construction from cast records

use crate::data::CastRecords;
use crate::error::GraphResult;
use crate::graph::collaboration::UNKNOWN_NAME;
use crate::graph::{BipartiteGraph, CollaborationGraph, Graph, VertexKind};
use itertools::Itertools;
use log;

fn display_name<'a>(records: &'a CastRecords, person_id: &str) -> &'a str {
    records
        .names
        .get(person_id)
        .map(String::as_str)
        .unwrap_or(UNKNOWN_NAME)
}

/// Build the weighted actor graph: one edge per co-credited pair, carrying
/// every title the pair shares
pub fn build_collaboration_graph(records: &CastRecords) -> GraphResult<CollaborationGraph> {
    log::info!("Building collaboration graph from {} movies", records.movies.len());

    let people = records.credited_people();
    let mut graph = CollaborationGraph::with_capacity(people.len());
    for person_id in people {
        graph.add_vertex(person_id, display_name(records, person_id));
    }

    for (movie_id, title) in &records.movies {
        for (a, b) in records.cast_of(movie_id).tuple_combinations() {
            graph.add_edge(a, b, std::iter::once(title.clone()))?;
        }
    }

    log::info!(
        "Collaboration graph has {} actors and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Build the actor/movie graph: one edge per credit
pub fn build_bipartite_graph(records: &CastRecords) -> GraphResult<BipartiteGraph> {
    log::info!("Building bipartite graph from {} movies", records.movies.len());

    let mut graph = BipartiteGraph::new();
    for (movie_id, title) in &records.movies {
        graph.add_vertex(movie_id, VertexKind::Movie, title);
        for person_id in records.cast_of(movie_id) {
            graph.add_vertex(person_id, VertexKind::Actor, display_name(records, person_id));
            graph.add_edge(movie_id, person_id)?;
        }
    }

    log::info!(
        "Bipartite graph has {} actors, {} movies and {} edges",
        graph.actor_count(),
        graph.movie_count(),
        graph.edge_count()
    );

    Ok(graph)
}
