//! Degree-of-separation queries over the actor/movie graph
//!
//! Distances are counted in collaborations: actor -> movie -> actor is one step.

use crate::graph::{BipartiteGraph, Distance, Graph, VertexHandle};
use std::collections::VecDeque;

fn actor_handle(graph: &BipartiteGraph, id: &str) -> Option<VertexHandle> {
    graph.handle_of(id).filter(|&h| graph.is_actor(h))
}

/// Collaboration steps between two actors.
///
/// Unknown ids, movie ids and disconnected pairs all report `Unreached`.
pub fn degree_of_separation(graph: &BipartiteGraph, a: &str, b: &str) -> Distance {
    let (Some(source), Some(target)) = (actor_handle(graph, a), actor_handle(graph, b)) else {
        return Distance::Unreached;
    };
    if source == target {
        return Distance::Finite(0);
    }

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    queue.push_back((source, 0u64));

    while let Some((current, hops)) = queue.pop_front() {
        if current == target {
            // Every collaboration crosses two raw edges
            return Distance::Finite(hops / 2);
        }
        if visited[current.index()] {
            continue;
        }
        visited[current.index()] = true;

        for &neighbor in graph.adjacent(current) {
            if !visited[neighbor.index()] {
                queue.push_back((neighbor, hops + 1));
            }
        }
    }

    Distance::Unreached
}

/// Collaboration distances from one actor to every actor
#[derive(Debug, Clone)]
pub struct ActorDistances {
    source: Option<VertexHandle>,
    /// Indexed by handle; movies stay `Unreached`
    distances: Vec<Distance>,
}

impl ActorDistances {
    pub fn source(&self) -> Option<VertexHandle> {
        self.source
    }

    /// Distance to an actor id; `None` for unknown ids and movies
    pub fn get(&self, graph: &BipartiteGraph, id: &str) -> Option<Distance> {
        actor_handle(graph, id).map(|h| self.distances[h.index()])
    }

    pub fn distance(&self, handle: VertexHandle) -> Distance {
        self.distances[handle.index()]
    }

    /// Every actor with its distance, in arena order
    pub fn iter<'a>(
        &'a self,
        graph: &'a BipartiteGraph,
    ) -> impl Iterator<Item = (VertexHandle, Distance)> + 'a {
        graph
            .handles()
            .filter(move |&h| graph.is_actor(h))
            .map(move |h| (h, self.distances[h.index()]))
    }
}

/// Distances from `source` to every actor, expanding actor -> movie -> actor
/// per step so values are already in collaboration units
pub fn min_distance_to_all(graph: &BipartiteGraph, source: &str) -> ActorDistances {
    let mut distances = vec![Distance::Unreached; graph.vertex_count()];
    let Some(start) = actor_handle(graph, source) else {
        return ActorDistances {
            source: None,
            distances,
        };
    };

    distances[start.index()] = Distance::Finite(0);
    let mut queue = VecDeque::new();
    queue.push_back((start, 0u64));

    while let Some((current, steps)) = queue.pop_front() {
        for &movie in graph.adjacent(current) {
            for &costar in graph.adjacent(movie) {
                if !distances[costar.index()].is_reached() {
                    distances[costar.index()] = Distance::Finite(steps + 1);
                    queue.push_back((costar, steps + 1));
                }
            }
        }
    }

    ActorDistances {
        source: Some(start),
        distances,
    }
}

/// Largest finite distance from a reference actor and every actor at it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreatestDistance {
    /// `None` when the reference actor is absent
    pub distance: Option<u64>,
    pub actors: Vec<VertexHandle>,
}

pub fn greatest_distance_from(graph: &BipartiteGraph, reference: &str) -> GreatestDistance {
    let distances = min_distance_to_all(graph, reference);
    let mut greatest = GreatestDistance {
        distance: None,
        actors: Vec::new(),
    };

    for (actor, distance) in distances.iter(graph) {
        let Some(d) = distance.finite() else {
            continue;
        };
        match greatest.distance {
            Some(best) if d < best => {}
            Some(best) if d == best => greatest.actors.push(actor),
            _ => {
                greatest.distance = Some(d);
                greatest.actors.clear();
                greatest.actors.push(actor);
            }
        }
    }

    log::debug!(
        "Greatest distance from {}: {:?} ({} actors)",
        reference,
        greatest.distance,
        greatest.actors.len()
    );

    greatest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CastRecords;
    use crate::graph::builder::build_bipartite_graph;

    fn two_movie_graph() -> BipartiteGraph {
        let mut records = CastRecords::new();
        records.add_movie("M1", "First");
        records.add_movie("M2", "Second");
        for person in ["A", "B", "C"] {
            records.add_credit("M1", person);
        }
        records.add_credit("M2", "C");
        records.add_credit("M2", "D");
        build_bipartite_graph(&records).unwrap()
    }

    #[test]
    fn test_degree_across_bridge() {
        let graph = two_movie_graph();
        assert_eq!(degree_of_separation(&graph, "A", "D"), Distance::Finite(2));
        assert_eq!(degree_of_separation(&graph, "A", "B"), Distance::Finite(1));
        assert_eq!(degree_of_separation(&graph, "A", "A"), Distance::Finite(0));
    }

    #[test]
    fn test_degree_is_symmetric() {
        let graph = two_movie_graph();
        for a in ["A", "B", "C", "D"] {
            for b in ["A", "B", "C", "D"] {
                assert_eq!(
                    degree_of_separation(&graph, a, b),
                    degree_of_separation(&graph, b, a)
                );
            }
        }
    }

    #[test]
    fn test_invalid_endpoints_are_unreached() {
        let mut graph = two_movie_graph();
        graph.add_vertex("E", crate::graph::VertexKind::Actor, "Eve");

        assert_eq!(degree_of_separation(&graph, "A", "M1"), Distance::Unreached);
        assert_eq!(degree_of_separation(&graph, "A", "nobody"), Distance::Unreached);
        assert_eq!(degree_of_separation(&graph, "A", "E"), Distance::Unreached);
    }

    #[test]
    fn test_min_distance_to_all() {
        let graph = two_movie_graph();
        let distances = min_distance_to_all(&graph, "A");

        assert_eq!(distances.get(&graph, "A"), Some(Distance::Finite(0)));
        assert_eq!(distances.get(&graph, "B"), Some(Distance::Finite(1)));
        assert_eq!(distances.get(&graph, "C"), Some(Distance::Finite(1)));
        assert_eq!(distances.get(&graph, "D"), Some(Distance::Finite(2)));
        assert_eq!(distances.get(&graph, "M1"), None);
        assert_eq!(distances.iter(&graph).count(), 4);
    }

    #[test]
    fn test_min_distance_from_movie_reaches_nothing() {
        let graph = two_movie_graph();
        let distances = min_distance_to_all(&graph, "M1");
        assert!(distances.source().is_none());
        assert!(distances.iter(&graph).all(|(_, d)| d == Distance::Unreached));
    }

    #[test]
    fn test_greatest_distance_keeps_ties() {
        let mut records = CastRecords::new();
        records.add_movie("M1", "First");
        records.add_movie("M2", "Second");
        records.add_movie("M3", "Third");
        records.add_credit("M1", "A");
        records.add_credit("M1", "B");
        records.add_credit("M2", "B");
        records.add_credit("M2", "C");
        records.add_credit("M3", "B");
        records.add_credit("M3", "D");
        let graph = build_bipartite_graph(&records).unwrap();

        let greatest = greatest_distance_from(&graph, "A");
        assert_eq!(greatest.distance, Some(2));
        let mut ids: Vec<&str> = greatest.actors.iter().map(|&h| graph.id_of(h)).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["C", "D"]);
    }

    #[test]
    fn test_greatest_distance_unknown_reference() {
        let graph = two_movie_graph();
        let greatest = greatest_distance_from(&graph, "nobody");
        assert_eq!(greatest.distance, None);
        assert!(greatest.actors.is_empty());
    }
}
