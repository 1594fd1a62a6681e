use crate::analysis::SeriesSummary;
use crate::config::{DECK, Timeframe, UsdValue};
use crate::dashboard::{Portfolio, StatCard, SummaryCard, stat_cards, summary_cards};
use crate::domain::Candle;
use crate::synth::{CandleConfig, candle_walk};
use chrono::{DateTime, Local};
use rand::Rng;
use serde::Serialize;

/// Market graph panel: the candle series plus its reduced header numbers
/// and the balance/profit/loss footer.
#[derive(Debug, Clone, Serialize)]
pub struct MarketView {
    pub timeframe: Timeframe,
    pub candles: Vec<Candle>,
    pub summary: SeriesSummary,
    pub balance: UsdValue,
    pub profit: UsdValue,
    pub loss: UsdValue,
}

impl MarketView {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, timeframe: Timeframe) -> Self {
        let candles = candle_walk(rng, &CandleConfig::for_timeframe(timeframe));
        let summary = SeriesSummary::from_candles(&candles);
        Self {
            timeframe,
            candles,
            summary,
            balance: UsdValue::new(DECK.totals.balance_usd),
            profit: UsdValue::new(DECK.totals.profit_usd),
            loss: UsdValue::new(DECK.totals.loss_usd),
        }
    }
}

/// Everything one render pass of the dashboard consumes.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Local>,
    pub portfolio: Portfolio,
    pub total_value: UsdValue,
    pub stats: Vec<StatCard>,
    pub market: MarketView,
    pub summaries: Vec<SummaryCard>,
}

impl DashboardSnapshot {
    /// One full recomputation. Nothing survives between calls; switching
    /// timeframe means generating a whole new snapshot.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, timeframe: Timeframe) -> Self {
        let portfolio = Portfolio::from_deck();
        let total_value = portfolio.total_value();
        Self {
            generated_at: Local::now(),
            portfolio,
            total_value,
            stats: stat_cards(),
            market: MarketView::generate(rng, timeframe),
            summaries: summary_cards(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn snapshot_assembles_every_panel() {
        let snapshot = DashboardSnapshot::generate(&mut rng(1), Timeframe::D7);
        assert_eq!(snapshot.market.candles.len(), 7);
        assert_eq!(snapshot.stats.len(), DECK.stats.len());
        assert_eq!(snapshot.summaries.len(), DECK.assets.len());
        assert_eq!(snapshot.portfolio.holdings.len(), DECK.holdings.len());
        assert_eq!(
            snapshot.total_value.value(),
            snapshot.portfolio.total_value().value()
        );
    }

    #[test]
    fn timeframe_switch_is_a_full_regeneration() {
        let hourly = DashboardSnapshot::generate(&mut rng(2), Timeframe::H1);
        let yearly = DashboardSnapshot::generate(&mut rng(2), Timeframe::Y1);
        assert_eq!(hourly.market.candles.len(), 60);
        assert_eq!(yearly.market.candles.len(), 12);
        // Same seed, same walk underneath; only the range table differs.
        assert_eq!(
            hourly.market.candles[0].open,
            yearly.market.candles[0].open
        );
    }

    #[test]
    fn market_summary_matches_its_candles() {
        let snapshot = DashboardSnapshot::generate(&mut rng(3), Timeframe::M1);
        let recomputed = SeriesSummary::from_candles(&snapshot.market.candles);
        assert_eq!(snapshot.market.summary, recomputed);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snapshot = DashboardSnapshot::generate(&mut rng(4), Timeframe::All);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"candles\""));
        assert!(json.contains("\"Bitcoin\""));
    }
}
