//! Command-line driver for `seedbloom`.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use seedbloom::config::{DEFAULT_BITS, DEFAULT_HASHES, DEFAULT_SEED};
use seedbloom::{bulk, evaluate, BloomFilter, Config, SeedSource};

#[derive(Parser)]
#[command(name = "seedbloom", version, about = "Seeded Bloom filter driver")]
struct Cli {
    #[command(flatten)]
    filter: FilterArgs,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Args)]
struct FilterArgs {
    /// Bit array length (m)
    #[arg(long, global = true, default_value_t = DEFAULT_BITS)]
    bits: usize,
    /// Number of hash functions (k)
    #[arg(long, global = true, default_value_t = DEFAULT_HASHES)]
    hashes: usize,
    /// Seed for reproducible hash seeds
    #[arg(long, global = true, default_value_t = DEFAULT_SEED, conflicts_with = "random_seed")]
    seed: u64,
    /// Draw hash seeds from process entropy
    #[arg(long, global = true, default_value_t = false)]
    random_seed: bool,
}

impl FilterArgs {
    fn config(&self) -> Config {
        let seed = if self.random_seed {
            SeedSource::Random
        } else {
            SeedSource::Fixed(self.seed)
        };
        Config::new(self.bits, self.hashes).seed(seed)
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Add the items of one file, then test the items of another
    AddTest {
        /// Comma-delimited items to add
        #[arg(long)]
        add: PathBuf,
        /// Comma-delimited items to test
        #[arg(long)]
        test: PathBuf,
    },
    /// Compare filter answers against exact membership
    Evaluate {
        /// Comma-delimited items to insert
        #[arg(long)]
        inputs: PathBuf,
        /// Comma-delimited items to query
        #[arg(long)]
        queries: PathBuf,
    },
    /// Insert a fixed set of letters and query letters and other words
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.filter.config();

    match cli.cmd {
        Cmd::AddTest { add, test } => {
            let mut filter = BloomFilter::<str>::from_config(&config)?;
            let added = bulk::add_from_file(&mut filter, &add)
                .with_context(|| format!("reading {}", add.display()))?;
            tracing::info!(count = added.len(), "Added items");

            let probes = bulk::test_from_file(&filter, &test)
                .with_context(|| format!("reading {}", test.display()))?;
            for probe in probes {
                println!("Item={} Result={}", probe.item, probe.membership);
            }
        }
        Cmd::Evaluate { inputs, queries } => {
            let inputs = bulk::read_file(&inputs)
                .with_context(|| format!("reading {}", inputs.display()))?;
            let queries = bulk::read_file(&queries)
                .with_context(|| format!("reading {}", queries.display()))?;
            let report = evaluate::evaluate(&config, inputs, queries)?;

            for outcome in &report.outcomes {
                println!("{outcome}");
            }
            println!("{report}");
        }
        Cmd::Demo => {
            let report = evaluate::demo(&config)?;

            for outcome in &report.outcomes {
                let item = &outcome.item;
                match (outcome.expected, outcome.reported) {
                    (true, true) => println!("{item} is in bloom filter as wished"),
                    (true, false) => println!("{item}: FALSE NEGATIVE"),
                    (false, true) => println!("{item} isnt in bloom, but a false positive"),
                    (false, false) => println!("{item} is not in the bloom filter as wished"),
                }
            }
            println!("{report}");
        }
    }

    Ok(())
}
