use anyhow::Result;
use clap::Parser;
use coin_deck::{Cli, DashboardSnapshot, build_rng, report};

fn main() -> Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("coin_deck"), my_code_level)
        .init();

    let args = Cli::parse();
    let mut rng = build_rng(args.seed);

    log::info!("Generating {} snapshot (seed: {:?})", args.timeframe, args.seed);
    let snapshot = DashboardSnapshot::generate(&mut rng, args.timeframe);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", report::render(&snapshot));
    }

    Ok(())
}
