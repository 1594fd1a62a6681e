use crate::config::{DECK, Pct, UsdValue};
use crate::domain::SparkPoint;
use crate::synth::{SparkConfig, spark_walk};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    pub fn from_pct(pct: Pct) -> Self {
        if pct.is_gain() {
            Trend::Positive
        } else {
            Trend::Negative
        }
    }
}

/// Headline figure row: invested / total change / day change.
#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: UsdValue,
    pub change: Pct,
    pub trend: Trend,
}

pub fn stat_cards() -> Vec<StatCard> {
    DECK.stats
        .iter()
        .map(|spec| {
            let change = Pct::new(spec.change_pct);
            StatCard {
                title: spec.title,
                value: UsdValue::new(spec.value_usd),
                change,
                trend: Trend::from_pct(change),
            }
        })
        .collect()
}

/// Per-asset card with a fresh sparkline behind the headline number.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryCard {
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: UsdValue,
    pub change: Pct,
    pub trend: Trend,
    pub spark: Vec<SparkPoint>,
}

pub fn summary_cards<R: Rng + ?Sized>(rng: &mut R) -> Vec<SummaryCard> {
    let config = SparkConfig::default();
    DECK.assets
        .iter()
        .map(|spec| {
            let change = Pct::new(spec.card_change_pct);
            SummaryCard {
                name: spec.name,
                symbol: spec.symbol,
                value: UsdValue::new(spec.card_value_usd),
                change,
                trend: Trend::from_pct(change),
                spark: spark_walk(rng, &config),
            }
        })
        .collect()
}
