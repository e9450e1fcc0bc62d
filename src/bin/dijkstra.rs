use std::{
    io::{stdout, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use heap_paths::{
    loader::{read_instance, FileType},
    output::{write_json, write_routes},
    search::dijkstra::shortest_path_tree,
};

#[derive(Debug, ValueEnum, Clone)]
enum OutputFormat {
    Text,
    Json,
}

/// Prints the shortest distance from a source to every vertex
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph instance
    #[arg(short, long)]
    in_file: PathBuf,
    /// Format of the instance
    #[arg(short, long, value_enum, default_value = "text")]
    file_type: FileType,
    /// Query from this vertex instead of the source given in the instance
    #[arg(short, long)]
    source: Option<u32>,
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Also print the full path to every reachable vertex
    #[arg(short, long)]
    paths: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let instance = read_instance(&args.in_file, &args.file_type)
        .with_context(|| format!("reading {}", args.in_file.display()))?;
    let source = args.source.unwrap_or(instance.source);

    let tree = shortest_path_tree(&instance.graph, source)
        .with_context(|| format!("querying from source {}", source))?;

    let mut writer = BufWriter::new(stdout().lock());
    match args.format {
        OutputFormat::Text => write_routes(&mut writer, &tree, args.paths)?,
        OutputFormat::Json => {
            write_json(&mut writer, &tree)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    Ok(())
}
