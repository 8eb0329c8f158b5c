use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use fpgrowth::dataset::read_transactions_from_path;
use fpgrowth::report::{DEFAULT_MIN_LEN, write_report};
use fpgrowth::{Support, fp_growth};

/// Mine frequent itemsets from a transaction file with FP-Growth.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Transaction file, one comma-separated transaction per line
    input: PathBuf,

    /// Minimum support: a transaction count (`3`), a fraction (`0.2`) or a percentage (`20%`)
    #[arg(short, long)]
    support: Support,

    /// Report file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Smallest itemset size to report
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    min_len: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let transactions = read_transactions_from_path(&args.input)?;
    let threshold = args
        .support
        .min_count(transactions.len())
        .context("invalid support")?;
    info!(
        "mining {} transactions at support {} ({} transactions)",
        transactions.len(),
        args.support,
        threshold
    );

    let patterns = fp_growth(&transactions, threshold);
    info!("found {} patterns", patterns.len());

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create report file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_report(&mut writer, &patterns, args.min_len)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!("report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_report(&mut writer, &patterns, args.min_len).context("failed to write report")?;
        }
    }

    Ok(())
}
