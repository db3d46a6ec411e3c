use anyhow::Result;
use cast_network_analyzer::cluster::{centrality, detection, metrics};
use cast_network_analyzer::config::AnalysisConfig;
use cast_network_analyzer::data::tsv::InputPaths;
use cast_network_analyzer::data::{preprocessing, snapshot};
use cast_network_analyzer::graph::{builder, separation};
use cast_network_analyzer::report::{
    AnalysisReport, CentralitySummary, ComponentStats, EstimateSummary, GraphStats,
    GreatestDistanceSummary, SeparationSummary,
};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(
    name = "cast-network-analyzer",
    about = "Collaboration network analysis of actor and movie credits"
)]
struct Cli {
    /// Path to the title basics TSV file
    #[clap(long, default_value = "./datasets/title-basics-f.tsv")]
    titles: PathBuf,

    /// Path to the title principals TSV file
    #[clap(long, default_value = "./datasets/title-principals-f.tsv")]
    principals: PathBuf,

    /// Path to the name basics TSV file
    #[clap(long, default_value = "./datasets/name-basics-f.tsv")]
    names: PathBuf,

    /// Snapshot of parsed records, reused on later runs
    #[clap(long, default_value = "cast-records.bin")]
    snapshot: PathBuf,

    /// Sample ratio (0.0-1.0) of movies to keep
    #[clap(long, default_value = "1.0")]
    sample: f64,

    /// Wall-clock budget in seconds for each estimator
    #[clap(long, default_value = "900")]
    time_budget_secs: u64,

    /// Rank of the component to estimate over (1 = largest)
    #[clap(long, default_value = "1")]
    component: usize,

    /// Number of random walks for the centrality estimate
    #[clap(long, default_value = "10000")]
    walks: usize,

    /// Maximum steps per random walk
    #[clap(long, default_value = "50")]
    walk_length: usize,

    /// Actor id the greatest-distance query starts from
    #[clap(long)]
    reference_actor: Option<String>,

    /// Actor id for a degree-of-separation query (with --to)
    #[clap(long, requires = "to")]
    from: Option<String>,

    /// Actor id for a degree-of-separation query (with --from)
    #[clap(long, requires = "from")]
    to: Option<String>,

    /// Seed for shuffling and random walks
    #[clap(long)]
    seed: Option<u64>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn rng_for(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
        None => StdRng::from_entropy(),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = AnalysisConfig::new(
        Duration::from_secs(args.time_budget_secs),
        args.component,
        args.walks,
        args.walk_length,
        args.reference_actor.clone(),
    )
    .with_seed(args.seed);

    // 1. Load records
    let paths = InputPaths {
        titles: &args.titles,
        principals: &args.principals,
        names: &args.names,
    };
    let records = snapshot::load_or_parse(&paths, &args.snapshot)?;
    let records = preprocessing::sample_movies(records, args.sample, &mut rng_for(config.seed, 0));

    // 2. Build both graphs; construction completes before any analytics run
    let (collaboration, bipartite) = rayon::join(
        || builder::build_collaboration_graph(&records),
        || builder::build_bipartite_graph(&records),
    );
    let (collaboration, bipartite) = (collaboration?, bipartite?);

    // 3. Components of the collaboration graph
    let components = detection::find_connected_components(&collaboration);

    // 4. Budgeted estimators share the read-only graph
    let (diameter, average) = rayon::join(
        || {
            metrics::estimate_diameter(
                &collaboration,
                &components,
                config.component_rank,
                config.time_budget,
                &mut rng_for(config.seed, 1),
            )
        },
        || {
            metrics::estimate_average_separation(
                &collaboration,
                &components,
                config.component_rank,
                config.time_budget,
                &mut rng_for(config.seed, 2),
            )
        },
    );
    let (diameter, average) = (diameter?, average?);

    // 5. Bipartite queries
    let pair_separation = match (&args.from, &args.to) {
        (Some(from), Some(to)) => Some(SeparationSummary::new(
            from,
            to,
            separation::degree_of_separation(&bipartite, from, to),
        )),
        _ => None,
    };

    let greatest_distance = config.reference_actor.as_deref().map(|reference| {
        let greatest = separation::greatest_distance_from(&bipartite, reference);
        GreatestDistanceSummary::new(&bipartite, reference, &greatest)
    });

    let walk_estimate = centrality::estimate_centrality(
        &bipartite,
        &config.walk_config(),
        &mut rng_for(config.seed, 3),
    );

    let report = AnalysisReport {
        graph: GraphStats::new(&collaboration, &bipartite),
        components: ComponentStats::new(&components),
        diameter: EstimateSummary::from(&diameter),
        average_separation: EstimateSummary::from(&average),
        separation: pair_separation,
        greatest_distance,
        centrality: CentralitySummary::new(&bipartite, &walk_estimate),
    };

    println!("{}", report.to_json()?);
    log::info!("Analysis complete");

    Ok(())
}
