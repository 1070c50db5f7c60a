//! Print a randomized market/shop fixture document as JSON

use anyhow::Context;
use clap::Parser;
use pehenava_qr::{LoggingOptions, MarketGenerator, fixtures, logging};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(
    name = "gen-markets",
    version,
    about = "Generate market and shop fixtures for seeding the Pehenava database"
)]
struct Cli {
    /// Number of markets to generate
    #[arg(long, default_value_t = MarketGenerator::DEFAULT_MARKETS)]
    count: u32,

    /// Fewest shops per market
    #[arg(long, default_value_t = MarketGenerator::DEFAULT_MIN_SHOPS)]
    min_shops: u32,

    /// Most shops per market
    #[arg(long, default_value_t = MarketGenerator::DEFAULT_MAX_SHOPS)]
    max_shops: u32,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Emit single-line JSON instead of indented JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&LoggingOptions::from_env())?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let markets = MarketGenerator::new()
        .market_count(cli.count)
        .shops_per_market(cli.min_shops, cli.max_shops)?
        .generate(&mut rng);

    let json = fixtures::to_json(&markets, cli.compact).context("serializing markets")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{json}").context("writing markets to stdout")?;

    Ok(())
}
