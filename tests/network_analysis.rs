use cast_network_analyzer::cluster::centrality::{estimate_centrality, WalkConfig};
use cast_network_analyzer::cluster::detection::find_connected_components;
use cast_network_analyzer::cluster::metrics::estimate_diameter;
use cast_network_analyzer::data::CastRecords;
use cast_network_analyzer::graph::algorithms::{unweighted_shortest_paths, weighted_shortest_paths};
use cast_network_analyzer::graph::builder::{build_bipartite_graph, build_collaboration_graph};
use cast_network_analyzer::graph::separation::{degree_of_separation, min_distance_to_all};
use cast_network_analyzer::{Distance, Graph};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::Duration;

fn records_from(movies: &[(&str, &[&str])]) -> CastRecords {
    let mut records = CastRecords::new();
    for (movie, cast) in movies {
        records.add_movie(movie, movie);
        for person in *cast {
            records.add_credit(movie, person);
            records.add_name(person, &format!("Name of {}", person));
        }
    }
    records
}

fn two_movie_records() -> CastRecords {
    records_from(&[("M1", &["A", "B", "C"][..]), ("M2", &["C", "D"][..])])
}

/// Two chains joined through a shared actor, plus a separate pair
fn mixed_records() -> CastRecords {
    records_from(&[
        ("M1", &["A", "B"][..]),
        ("M2", &["B", "C"][..]),
        ("M3", &["C", "D", "E"][..]),
        ("M4", &["E", "F"][..]),
        ("M5", &["X", "Y"][..]),
    ])
}

#[test]
fn test_two_movie_collaboration_scenario() {
    let graph = build_collaboration_graph(&two_movie_records()).unwrap();

    for (a, b, title) in [("A", "B", "M1"), ("A", "C", "M1"), ("B", "C", "M1"), ("C", "D", "M2")] {
        let titles = graph.get_edge_data(a, b).unwrap();
        assert_eq!(titles.len(), 1);
        assert!(titles.contains(title));
    }

    let components = find_connected_components(&graph);
    assert_eq!(components.len(), 1);
    assert_eq!(components.largest().unwrap().size(), 4);

    let paths = weighted_shortest_paths(&graph, "A").unwrap();
    let record = paths.record(&graph, "D").unwrap();
    assert_eq!(record.path, vec!["A", "C", "D"]);
    assert_eq!(record.distance, Distance::Finite(2));
}

#[test]
fn test_two_movie_bipartite_scenario() {
    let graph = build_bipartite_graph(&two_movie_records()).unwrap();

    assert_eq!(degree_of_separation(&graph, "A", "D"), Distance::Finite(2));

    let distances = min_distance_to_all(&graph, "A");
    assert_eq!(distances.get(&graph, "B"), Some(Distance::Finite(1)));
    assert_eq!(distances.get(&graph, "C"), Some(Distance::Finite(1)));
    assert_eq!(distances.get(&graph, "D"), Some(Distance::Finite(2)));
}

#[test]
fn test_components_cover_every_vertex_once() {
    let graph = build_collaboration_graph(&mixed_records()).unwrap();
    let components = find_connected_components(&graph);

    let mut seen = HashSet::new();
    for component in &components {
        for id in component.member_ids(&graph) {
            assert!(seen.insert(id));
        }
    }
    let all: HashSet<&str> = graph.all_vertices().into_iter().collect();
    assert_eq!(seen, all);
    assert_eq!(components.vertex_total(), graph.vertex_count());
    assert_eq!(components.get(1).unwrap().size(), 6);
    assert_eq!(components.get(2).unwrap().size(), 2);
}

#[test]
fn test_unweighted_distances_respect_triangle_bound() {
    let graph = build_collaboration_graph(&mixed_records()).unwrap();
    let ids = graph.all_vertices();
    let searches: Vec<_> = ids
        .iter()
        .map(|id| unweighted_shortest_paths(&graph, id).unwrap())
        .collect();

    for (i, from_a) in searches.iter().enumerate() {
        let a = graph.handle_of(ids[i]).unwrap();
        assert_eq!(from_a.distance(a), Distance::Finite(0));
        for (j, from_b) in searches.iter().enumerate() {
            let b = graph.handle_of(ids[j]).unwrap();
            for c in graph.handles() {
                if let (Some(ab), Some(bc), Some(ac)) = (
                    from_a.distance(b).finite(),
                    from_b.distance(c).finite(),
                    from_a.distance(c).finite(),
                ) {
                    assert!(ac <= ab + bc);
                }
            }
        }
    }
}

#[test]
fn test_extra_shared_movie_never_shortens_weighted_paths() {
    let base = mixed_records();
    let mut heavier = base.clone();
    heavier.add_movie("M6", "M6");
    heavier.add_credit("M6", "B");
    heavier.add_credit("M6", "C");

    let light = build_collaboration_graph(&base).unwrap();
    let heavy = build_collaboration_graph(&heavier).unwrap();
    let light_paths = weighted_shortest_paths(&light, "A").unwrap();
    let heavy_paths = weighted_shortest_paths(&heavy, "A").unwrap();

    for id in light.all_vertices() {
        let before = light_paths.record(&light, id).unwrap().distance;
        let after = heavy_paths.record(&heavy, id).unwrap().distance;
        assert!(after >= before, "{} got closer", id);
    }
    assert_eq!(
        heavy_paths.record(&heavy, "F").unwrap().distance,
        Distance::Finite(5)
    );
}

#[test]
fn test_degree_of_separation_identity_and_symmetry() {
    let graph = build_bipartite_graph(&mixed_records()).unwrap();
    let actors = ["A", "B", "C", "D", "E", "F", "X", "Y"];

    for a in actors {
        assert_eq!(degree_of_separation(&graph, a, a), Distance::Finite(0));
        for b in actors {
            assert_eq!(
                degree_of_separation(&graph, a, b),
                degree_of_separation(&graph, b, a)
            );
        }
    }
    assert_eq!(degree_of_separation(&graph, "A", "F"), Distance::Finite(4));
    assert_eq!(degree_of_separation(&graph, "A", "X"), Distance::Unreached);
}

#[test]
fn test_diameter_matches_exact_value_with_unbounded_budget() {
    let records = records_from(&[
        ("M1", &["P0", "P1"][..]),
        ("M2", &["P1", "P2"][..]),
        ("M3", &["P2", "P3"][..]),
        ("M4", &["P3", "P4"][..]),
    ]);
    let graph = build_collaboration_graph(&records).unwrap();
    let components = find_connected_components(&graph);
    let mut rng = StdRng::seed_from_u64(2024);

    let estimate = estimate_diameter(&graph, &components, 1, Duration::MAX, &mut rng).unwrap();

    assert_eq!(estimate.value, Some(4));
    assert!(!estimate.is_partial());
}

#[test]
fn test_centrality_without_walks() {
    let graph = build_bipartite_graph(&mixed_records()).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    let estimate = estimate_centrality(&graph, &WalkConfig::new(0, 25), &mut rng);

    assert_eq!(estimate.actors.visits, 0);
    assert!(estimate.actors.vertices.is_empty());
    assert_eq!(estimate.movies.visits, 0);
    assert!(estimate.movies.vertices.is_empty());
}
