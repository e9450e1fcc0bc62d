use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use heap_paths::{
    graphs::Graph,
    loader::{read_instance, FileType},
    search::{batch::all_shortest_path_trees, dijkstra::Dijkstra},
};
use rand::{thread_rng, Rng};

/// Times single source queries from random sources, then all sources in parallel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file
    #[arg(short, long)]
    in_file: PathBuf,
    /// Format of the input file
    #[arg(short, long, value_enum, default_value = "bincode")]
    file_type: FileType,
    /// Number of benchmarks to be run.
    #[arg(short, long)]
    number_of_benchmarks: u32,
    /// Also run a query from every vertex in parallel
    #[arg(short, long)]
    all_sources: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let instance = read_instance(&args.in_file, &args.file_type)
        .with_context(|| format!("reading {}", args.in_file.display()))?;
    let graph = &instance.graph;

    let mut dijkstra = Dijkstra::new(graph);
    let mut durations = Vec::new();

    let mut rng = thread_rng();
    for _ in 0..args.number_of_benchmarks {
        let source = rng.gen_range(0..graph.number_of_vertices());

        let start = Instant::now();
        let tree = dijkstra.shortest_path_tree(source)?;
        durations.push(start.elapsed());

        println!(
            "Reached {} vertices, average duration {:?}",
            tree.number_of_reachable(),
            durations.iter().sum::<Duration>() / durations.len() as u32
        );
    }

    if args.all_sources {
        let start = Instant::now();
        let trees = all_shortest_path_trees(graph)?;
        println!(
            "{} queries in parallel took {:?}",
            trees.len(),
            start.elapsed()
        );
    }

    Ok(())
}
