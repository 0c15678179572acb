//! Fill a universal-hashing table with generated keys and report the
//! chain-length distribution.

mod config;
mod logging;
mod workload;

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use unihash::{HashTable, TableResult};

#[derive(Parser)]
#[command(name = "unihash-fill")]
#[command(about = "Fill a universal-hashing table and report chain lengths")]
struct Args {
    /// Path to configuration file
    config: PathBuf,
}

fn main() {
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&config.logging);

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> TableResult<()> {
    let mut table: HashTable<String> = config.table.builder().build()?;
    let function = table.function();
    info!(
        max_key = config.table.max_key,
        table_size = table.table_size(),
        p = function.modulus(),
        a = function.a(),
        b = function.b(),
        "table created"
    );

    let report = workload::fill(&mut table, &config.workload);
    info!(
        seed = report.seed,
        added = report.added,
        failed = report.failed,
        "fill complete"
    );

    let probe = config.workload.probe;
    match table.get(probe) {
        Some(value) => println!("Got data '{value}' at key = {probe}"),
        None => println!("No data at key = {probe}"),
    }

    let lengths = table.chain_lengths();
    if config.workload.print_slots {
        for (index, length) in lengths.iter().enumerate() {
            println!("HashTable[{index}] length = {length}");
        }
    }

    let stats = unihash::ChainStats::from_lengths(&lengths);
    println!("{stats}");
    for (length, slots) in &stats.histogram {
        println!("  length {length:>4}: {slots} slots");
    }

    Ok(())
}
