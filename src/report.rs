//! Analysis summary printed as JSON

use crate::cluster::centrality::{CentralityEstimate, TopVisited};
use crate::cluster::metrics::{AverageSeparation, SeparationEstimate};
use crate::cluster::Components;
use crate::graph::separation::GreatestDistance;
use crate::graph::{BipartiteGraph, CollaborationGraph, Distance, Graph, VertexHandle};
use anyhow::Result;
use serde::Serialize;
use serde_json::to_string_pretty;

/// Number of components listed individually in the summary
const LISTED_COMPONENTS: usize = 10;

#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub actors: usize,
    pub collaborations: usize,
    pub movies: usize,
    pub credits: usize,
}

impl GraphStats {
    pub fn new(collaboration: &CollaborationGraph, bipartite: &BipartiteGraph) -> Self {
        Self {
            actors: collaboration.vertex_count(),
            collaborations: collaboration.edge_count(),
            movies: bipartite.movie_count(),
            credits: bipartite.edge_count(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComponentSummary {
    pub label: String,
    pub size: usize,
}

#[derive(Debug, Serialize)]
pub struct ComponentStats {
    pub count: usize,
    pub largest: Vec<ComponentSummary>,
}

impl ComponentStats {
    pub fn new(components: &Components) -> Self {
        Self {
            count: components.len(),
            largest: components
                .iter()
                .take(LISTED_COMPONENTS)
                .map(|c| ComponentSummary {
                    label: c.label(),
                    size: c.size(),
                })
                .collect(),
        }
    }
}

/// Budgeted estimate with durations in seconds
#[derive(Debug, Serialize)]
pub struct EstimateSummary<T> {
    pub value: Option<T>,
    pub partial: bool,
    pub sources_sampled: usize,
    pub component_size: usize,
    pub elapsed_secs: f64,
    pub projected_total_secs: Option<f64>,
    pub projected_remaining_secs: Option<f64>,
}

impl<T: Clone> From<&SeparationEstimate<T>> for EstimateSummary<T> {
    fn from(estimate: &SeparationEstimate<T>) -> Self {
        Self {
            value: estimate.value.clone(),
            partial: estimate.is_partial(),
            sources_sampled: estimate.sources_sampled,
            component_size: estimate.component_size,
            elapsed_secs: estimate.elapsed.as_secs_f64(),
            projected_total_secs: estimate.projected_total.map(|d| d.as_secs_f64()),
            projected_remaining_secs: estimate.projected_remaining.map(|d| d.as_secs_f64()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NamedVertex {
    pub id: String,
    pub name: String,
}

fn named(graph: &BipartiteGraph, handles: &[VertexHandle]) -> Vec<NamedVertex> {
    handles
        .iter()
        .map(|&h| NamedVertex {
            id: graph.id_of(h).to_string(),
            name: graph.payload_of(h).to_string(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct SeparationSummary {
    pub from: String,
    pub to: String,
    /// `None` when unreachable
    pub degree: Option<u64>,
}

impl SeparationSummary {
    pub fn new(from: &str, to: &str, distance: Distance) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            degree: distance.finite(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GreatestDistanceSummary {
    pub reference: String,
    pub distance: Option<u64>,
    pub actors: Vec<NamedVertex>,
}

impl GreatestDistanceSummary {
    pub fn new(graph: &BipartiteGraph, reference: &str, greatest: &GreatestDistance) -> Self {
        Self {
            reference: reference.to_string(),
            distance: greatest.distance,
            actors: named(graph, &greatest.actors),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopVisitedSummary {
    pub visits: u64,
    pub vertices: Vec<NamedVertex>,
}

#[derive(Debug, Serialize)]
pub struct CentralitySummary {
    pub walks: usize,
    pub actors: TopVisitedSummary,
    pub movies: TopVisitedSummary,
}

impl CentralitySummary {
    pub fn new(graph: &BipartiteGraph, estimate: &CentralityEstimate) -> Self {
        let summarize = |top: &TopVisited| TopVisitedSummary {
            visits: top.visits,
            vertices: named(graph, &top.vertices),
        };
        Self {
            walks: estimate.walks,
            actors: summarize(&estimate.actors),
            movies: summarize(&estimate.movies),
        }
    }
}

/// Everything one run of the analyzer reports
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub graph: GraphStats,
    pub components: ComponentStats,
    pub diameter: EstimateSummary<u64>,
    pub average_separation: EstimateSummary<AverageSeparation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separation: Option<SeparationSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greatest_distance: Option<GreatestDistanceSummary>,
    pub centrality: CentralitySummary,
}

impl AnalysisReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(to_string_pretty(self)?)
    }
}
