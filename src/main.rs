//! Pehenava payment QR generator entrypoint

use clap::Parser;
use pehenava_qr::{BatchDriver, Error, PaymentQrProducer, PehenavaConfig, Result, logging};
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "pehenava-qr",
    version,
    about = "Generate styled UPI payment QR codes for the Pehenava storefront"
)]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to pehenava.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory to write QR images into
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Generate a QR for this amount instead of the demo list (repeatable)
    #[arg(long = "amount", value_name = "RUPEES")]
    amounts: Vec<Decimal>,

    /// Only generate the static (open-amount) QR
    #[arg(long, conflicts_with = "amounts")]
    static_only: bool,

    /// Decode every rendered image and fail if it does not match its URI
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PehenavaConfig::load(cli.config.as_deref())?;

    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }

    if cli.static_only {
        config.batch.amounts.clear();
        config.batch.include_static = true;
    } else if !cli.amounts.is_empty() {
        config.batch.amounts = cli.amounts;
    }

    if cli.verify {
        config.render.verify = true;
    }

    logging::init(&config.logging)?;
    match config.source.as_deref() {
        Some(path) => info!(path = %path.display(), "Using configuration file"),
        None => debug!("No pehenava.toml / pehenava.yaml found, using defaults"),
    }

    let producer = PaymentQrProducer::new(
        config.payee.payee()?,
        config.payee.uri_builder(),
        config.output.writer()?,
    )?
    .with_styles(config.render.static_style()?, config.render.amount_style()?)
    .with_verification(config.render.verify);

    info!(
        dir = %producer.writer().dir().display(),
        amounts = config.batch.amounts.len(),
        "Starting QR batch"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    BatchDriver::new(&producer)
        .include_static(config.batch.include_static)
        .run(&config.batch.amounts, &mut out)?;
    out.flush().map_err(Error::Io)?;

    Ok(())
}
