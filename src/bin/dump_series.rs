use anyhow::{Context, Result};
use clap::Parser;
use coin_deck::{DashboardSnapshot, Timeframe, build_rng};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Dump a generated dashboard snapshot as pretty JSON")]
struct Args {
    /// Output path for the JSON dump
    #[arg(long, default_value = "deck_snapshot.json")]
    out: PathBuf,

    /// Timeframe for the market graph series
    #[arg(long, value_enum, default_value_t = Timeframe::D7)]
    timeframe: Timeframe,

    /// Seed for reproducible dumps
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("🚀 Generating dashboard snapshot ({})", args.timeframe);

    // 2. Generate
    let mut rng = build_rng(args.seed);
    let snapshot = DashboardSnapshot::generate(&mut rng, args.timeframe);
    log::info!(
        "   {} candles, {} summary cards",
        snapshot.market.candles.len(),
        snapshot.summaries.len()
    );

    // 3. Write
    let json = serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    log::info!("✅ Wrote {}", args.out.display());
    Ok(())
}
