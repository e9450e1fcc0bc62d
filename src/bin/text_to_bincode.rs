use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use heap_paths::loader::{read_text_file, write_bincode_file};

/// Reading a .bincode file is way faster than a text file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in text format
    #[arg(short = 't', long)]
    graph_text: PathBuf,
    /// Outfile in bincode format
    #[arg(short = 'b', long)]
    graph_bincode: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let instance = read_text_file(&args.graph_text)
        .with_context(|| format!("reading {}", args.graph_text.display()))?;
    println!("Reading text graph took {:?}", start.elapsed());

    let start = Instant::now();
    write_bincode_file(&args.graph_bincode, &instance)
        .with_context(|| format!("writing {}", args.graph_bincode.display()))?;
    println!("Writing bincode took {:?}", start.elapsed());

    Ok(())
}
