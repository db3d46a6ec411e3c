//! Time-budgeted diameter and average-separation estimates
//!
//! Running a breadth-first search from every vertex of a large component is
//! too slow to always finish, so both estimators visit sources in shuffled
//! order until a wall-clock budget runs out. The reported statistic is exact
//! over the sources actually searched; the time figures are projections.

use crate::cluster::Components;
use crate::error::GraphResult;
use crate::graph::algorithms::{bfs_from, ShortestPaths};
use crate::graph::{Graph, VertexHandle};
use log;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use statrs::statistics::Statistics;
use std::time::{Duration, Instant};

/// Outcome of a budgeted estimate over one component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeparationEstimate<T> {
    /// Statistic over the sampled sources; `None` if nothing contributed
    pub value: Option<T>,

    /// Sources searched before the budget ran out
    pub sources_sampled: usize,

    /// Vertices in the target component
    pub component_size: usize,

    pub elapsed: Duration,

    /// Time a full run would take at the measured throughput
    pub projected_total: Option<Duration>,

    /// `projected_total` minus `elapsed`
    pub projected_remaining: Option<Duration>,
}

impl<T> SeparationEstimate<T> {
    /// True when the budget ran out before every source was searched
    pub fn is_partial(&self) -> bool {
        self.sources_sampled < self.component_size
    }
}

/// Mean hop distance between actors, with the spread of per-source means
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageSeparation {
    pub mean: f64,
    /// `None` with fewer than two contributing sources
    pub std_dev: Option<f64>,
}

struct Sampling {
    sources_sampled: usize,
    component_size: usize,
    elapsed: Duration,
}

impl Sampling {
    fn into_estimate<T>(self, value: Option<T>) -> SeparationEstimate<T> {
        let projected_total = if self.sources_sampled == 0 {
            None
        } else if self.sources_sampled == self.component_size {
            Some(self.elapsed)
        } else {
            let scale = self.component_size as f64 / self.sources_sampled as f64;
            Some(self.elapsed.mul_f64(scale))
        };

        SeparationEstimate {
            value,
            sources_sampled: self.sources_sampled,
            component_size: self.component_size,
            elapsed: self.elapsed,
            projected_total,
            projected_remaining: projected_total.map(|t| t.saturating_sub(self.elapsed)),
        }
    }
}

/// Search from shuffled component members until the budget is spent.
///
/// The budget is polled once per source, so one slow search can overrun it.
fn sample_component<G, R, F>(
    graph: &G,
    components: &Components,
    rank: usize,
    budget: Duration,
    rng: &mut R,
    mut fold: F,
) -> GraphResult<Sampling>
where
    G: Graph,
    R: Rng + ?Sized,
    F: FnMut(VertexHandle, &ShortestPaths),
{
    let component = components.get(rank)?;
    let mut sources = component.members.clone();
    sources.shuffle(rng);

    log::info!(
        "Sampling {} with a budget of {:.0}s",
        component,
        budget.as_secs_f64()
    );

    let started = Instant::now();
    let mut sources_sampled = 0;
    for source in sources {
        if started.elapsed() >= budget {
            log::warn!(
                "Time budget spent after {} of {} sources",
                sources_sampled,
                component.size()
            );
            break;
        }

        let paths = bfs_from(graph, source);
        fold(source, &paths);
        sources_sampled += 1;

        if sources_sampled % 1000 == 0 {
            log::debug!("Searched {} sources in {:?}", sources_sampled, started.elapsed());
        }
    }

    Ok(Sampling {
        sources_sampled,
        component_size: component.size(),
        elapsed: started.elapsed(),
    })
}

/// Largest hop distance between any sampled source and any vertex
pub fn estimate_diameter<G, R>(
    graph: &G,
    components: &Components,
    rank: usize,
    budget: Duration,
    rng: &mut R,
) -> GraphResult<SeparationEstimate<u64>>
where
    G: Graph,
    R: Rng + ?Sized,
{
    let mut diameter: Option<u64> = None;
    let sampling = sample_component(graph, components, rank, budget, rng, |_, paths| {
        if let Some(farthest) = paths.reached().map(|(_, d)| d).max() {
            diameter = Some(diameter.map_or(farthest, |d| d.max(farthest)));
        }
    })?;

    log::info!(
        "Diameter estimate {:?} from {} sources",
        diameter,
        sampling.sources_sampled
    );

    Ok(sampling.into_estimate(diameter))
}

/// Mean hop distance from each sampled source to every other reachable
/// vertex, averaged over sources
pub fn estimate_average_separation<G, R>(
    graph: &G,
    components: &Components,
    rank: usize,
    budget: Duration,
    rng: &mut R,
) -> GraphResult<SeparationEstimate<AverageSeparation>>
where
    G: Graph,
    R: Rng + ?Sized,
{
    let mut source_means: Vec<f64> = Vec::new();
    let sampling = sample_component(graph, components, rank, budget, rng, |source, paths| {
        let (total, count) = paths
            .reached()
            .filter(|&(v, _)| v != source)
            .fold((0u64, 0u64), |(total, count), (_, d)| (total + d, count + 1));
        if count > 0 {
            source_means.push(total as f64 / count as f64);
        }
    })?;

    let value = if source_means.is_empty() {
        None
    } else {
        let std_dev = if source_means.len() > 1 {
            Some(source_means.iter().std_dev())
        } else {
            None
        };
        Some(AverageSeparation {
            mean: source_means.iter().mean(),
            std_dev,
        })
    };

    log::info!(
        "Average separation estimate {:?} from {} sources",
        value.map(|v| v.mean),
        sampling.sources_sampled
    );

    Ok(sampling.into_estimate(value))
}
