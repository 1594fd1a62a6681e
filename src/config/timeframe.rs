use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Market-graph range selector. Each tag fixes how many points a walk
/// produces and how hard each step is allowed to move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, ValueEnum, Default,
)]
pub enum Timeframe {
    #[strum(to_string = "1H")]
    #[value(name = "1h")]
    H1,
    #[default]
    #[strum(to_string = "7D")]
    #[value(name = "7d")]
    D7,
    #[strum(to_string = "1M")]
    #[value(name = "1m")]
    M1,
    #[strum(to_string = "1Y")]
    #[value(name = "1y")]
    Y1,
    #[strum(to_string = "ALL")]
    #[value(name = "all")]
    All,
}

impl Timeframe {
    pub fn point_count(&self) -> usize {
        match self {
            Self::H1 => 60,  // 60 minutes
            Self::D7 => 7,   // 7 days
            Self::M1 => 30,  // 30 days (approx)
            Self::Y1 => 12,  // 12 months
            Self::All => 50, // Arbitrary for "all time"
        }
    }

    /// Multiplier on the candle body step.
    pub(crate) fn step_scale(&self) -> f64 {
        match self {
            Self::H1 => 0.5,
            Self::D7 => 1.0,
            Self::M1 => 2.0,
            Self::Y1 | Self::All => 4.0,
        }
    }

    /// Multiplier on the wick extension beyond the body.
    pub(crate) fn wick_scale(&self) -> f64 {
        match self {
            Self::H1 => 0.5,
            _ => 1.0,
        }
    }

    /// Label for point `i` of `count`, oldest first. The last point always
    /// names the most recent period, so no reversal happens downstream.
    pub(crate) fn label(&self, i: usize, count: usize) -> String {
        match self {
            Self::H1 => format!("T-{}m", count - i),
            Self::D7 => format!("Day {}", i + 1),
            Self::M1 => format!("Wk {}", i + 1),
            Self::Y1 => format!("M{}", i + 1),
            Self::All => format!("P {}", i + 1),
        }
    }
}
