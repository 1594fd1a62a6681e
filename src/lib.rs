// Core modules
pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod report;
pub mod synth;

// Re-export commonly used types outside of crate (for the bins)
pub use analysis::SeriesSummary;
pub use config::Timeframe;
pub use dashboard::DashboardSnapshot;

use rand::SeedableRng;
use rand::rngs::StdRng;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Timeframe for the market graph
    #[arg(long, value_enum, default_value_t = Timeframe::D7)]
    pub timeframe: Timeframe,

    /// Seed the generators for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit the snapshot as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Seeded when asked, OS entropy otherwise. Every generator downstream
/// draws from this one handle.
pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
