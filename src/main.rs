//! # linkdist CLI
//!
//! Command-line front end for the linkdist library. Builds a synthetic link
//! matrix, fills its all-pairs distance matrix in parallel and reports what
//! it found. The distance matrix itself is never written out.

use anyhow::{bail, Context, Result};
use clap::Parser;
use linkdist::{reference, DistanceMatrix, FillOptions};
use log::{error, info};

mod cli;

use cli::Topology;

/// Command-line interface for linkdist
#[derive(Parser)]
#[command(name = "linkdist")]
#[command(about = "All-pairs shortest paths over dense link matrices via parallel bidirectional BFS")]
#[command(long_about = "Fills the all-pairs distance matrix of a generated graph:
  linkdist --nodes 500 --topology random --density 0.01
  linkdist --nodes 64 --topology cycle --verify
  linkdist --nodes 2000 --topology chain --threads 4

Unreachable pairs are reported with the sentinel (default: N).")]
#[command(version = env!("LINKDIST_VERSION"))]
struct Cli {
    /// Number of nodes (N)
    #[arg(short, long, default_value_t = 256)]
    nodes: usize,

    /// Graph shape to generate
    #[arg(short, long, value_enum, default_value_t = Topology::Random)]
    topology: Topology,

    /// Edge probability for the random topology
    #[arg(short, long, default_value_t = 0.02)]
    density: f64,

    /// Seed for the random topology
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Value written for unreachable pairs (defaults to N)
    #[arg(long)]
    sentinel: Option<i32>,

    /// Cross-check every cell against single-source BFS
    #[arg(long)]
    verify: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if cli.nodes == 0 {
        bail!("--nodes must be positive");
    }
    if !(0.0..=1.0).contains(&cli.density) {
        bail!("--density must be within [0, 1], got {}", cli.density);
    }
    let n = cli.nodes;
    let sentinel = match cli.sentinel {
        Some(s) => s,
        None => i32::try_from(n).context("--nodes is too large for an i32 sentinel")?,
    };
    let threads = cli.threads.unwrap_or_else(num_cpus::get);

    if cli.verbose {
        eprintln!("🔗 linkdist v{} starting...", env!("LINKDIST_VERSION"));
    }

    let forward = cli::graph::generate(cli.topology, n, cli.density, cli.seed);
    let reverse = linkdist::transpose(&forward, n);
    info!(
        "Generated {:?} graph: {n} nodes, {} edges",
        cli.topology,
        linkdist::LinkMatrix::new(&forward, n).edge_count()
    );

    let total_pairs = (n as u64) * (n as u64);
    let progress_manager = (!cli.quiet).then(|| {
        cli::ProgressManager::new(total_pairs, &format!("🧭 Filling {n}x{n} distance matrix"))
    });
    let options = FillOptions {
        threads: Some(threads),
        progress: progress_manager.as_ref().map(|pm| pm.callback()),
    };

    let mut distances = vec![sentinel; n * n];
    let stats = linkdist::fill_distance_matrix_with_options(
        &mut distances,
        &forward,
        &reverse,
        n,
        sentinel,
        &options,
    )?;

    println!("nodes:       {}", stats.nodes);
    println!("threads:     {threads}");
    println!("pairs:       {total_pairs}");
    println!("reachable:   {}", stats.reachable_pairs);
    println!("unreachable: {}", stats.unreachable_pairs);
    println!("max:         {}", stats.max_distance);
    println!("elapsed:     {:.3}s", stats.elapsed.as_secs_f64());

    let metrics = DistanceMatrix::new(&distances, n, sentinel);
    println!("compactness: {}", format_ratio(metrics.compactness()));
    println!("stratum:     {}", format_ratio(metrics.stratum()));

    if cli.verify {
        verify(&distances, &forward, n, sentinel)?;
        println!("verify:      ok");
    }

    Ok(())
}

fn format_ratio(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"))
}

/// Compare a filled matrix with single-source BFS ground truth
fn verify(distances: &[i32], forward: &[i32], n: usize, sentinel: i32) -> Result<()> {
    let expected = reference::reference_distance_matrix(forward, n, sentinel);
    let mismatches: Vec<usize> = distances
        .iter()
        .zip(&expected)
        .enumerate()
        .filter(|(_, (got, want))| got != want)
        .map(|(idx, _)| idx)
        .collect();

    if let Some(&first) = mismatches.first() {
        let (i, j) = (first / n, first % n);
        bail!(
            "{} cells disagree with BFS; first is ({i}, {j}): got {}, expected {}",
            mismatches.len(),
            distances[first],
            expected[first]
        );
    }
    info!("All {} cells match single-source BFS", distances.len());
    Ok(())
}
