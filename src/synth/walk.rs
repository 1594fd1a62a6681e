//! Random-walk series generators.
//!
//! Both walks take the RNG from the caller, so tests and the CLI `--seed`
//! flag get reproducible series while normal runs stay fresh per render.

use crate::config::{DECK, Timeframe, Volatility};
use crate::domain::{Candle, SparkPoint};
use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct SparkConfig {
    pub count: usize,
    pub volatility: Volatility,
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            count: DECK.walk.spark_points,
            volatility: Volatility::default(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CandleConfig {
    pub count: usize,
    pub volatility: Volatility,
    pub timeframe: Timeframe,
}

impl CandleConfig {
    /// Point count comes straight off the timeframe's range table.
    pub fn for_timeframe(timeframe: Timeframe) -> Self {
        Self {
            count: timeframe.point_count(),
            volatility: Volatility::default(),
            timeframe,
        }
    }
}

impl Default for CandleConfig {
    fn default() -> Self {
        Self::for_timeframe(Timeframe::default())
    }
}

/// Single-value walk for card sparklines, clamped into the spark band.
/// A zero count yields an empty series.
pub fn spark_walk<R: Rng + ?Sized>(rng: &mut R, config: &SparkConfig) -> Vec<SparkPoint> {
    let w = &DECK.walk;
    let mut points = Vec::with_capacity(config.count);
    let mut last = rng.random_range(w.spark_base_min..w.spark_base_max);

    for i in 0..config.count {
        last += (rng.random::<f64>() - 0.5) * w.spark_step * config.volatility.value();
        last = last.clamp(w.spark_floor, w.spark_ceiling);
        points.push(SparkPoint::new(format!("P{i}"), last));
    }
    points
}

/// OHLC walk for the market graph. Candles are emitted oldest first, so the
/// last element is always the most recent period and nothing gets reversed.
///
/// Unlike the sparkline, candle values are not clamped into a band; the walk
/// is free to drift. Only the non-negative price floor applies.
pub fn candle_walk<R: Rng + ?Sized>(rng: &mut R, config: &CandleConfig) -> Vec<Candle> {
    let w = &DECK.walk;
    let step = w.candle_step * config.timeframe.step_scale() * config.volatility.value();
    let wick = w.wick_extra * config.timeframe.wick_scale();

    let mut candles = Vec::with_capacity(config.count);
    let mut last_close = rng.random_range(w.candle_base_min..w.candle_base_max);

    for i in 0..config.count {
        let open = last_close;
        let close = open + (rng.random::<f64>() - 0.5) * step;
        let high = open.max(close) + rng.random::<f64>() * wick;
        let low = open.min(close) - rng.random::<f64>() * wick;

        let label = config.timeframe.label(i, config.count);
        candles.push(Candle::new(label, open, high, low, close));
        last_close = close;
    }
    candles
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn spark_walk_produces_exact_count_with_labels() {
        let config = SparkConfig {
            count: 10,
            volatility: Volatility::default(),
        };
        let points = spark_walk(&mut rng(1), &config);
        assert_eq!(points.len(), 10);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.label, format!("P{i}"));
        }
    }

    #[test]
    fn zero_count_yields_empty_series() {
        let spark = SparkConfig {
            count: 0,
            volatility: Volatility::default(),
        };
        assert!(spark_walk(&mut rng(2), &spark).is_empty());

        let candle = CandleConfig {
            count: 0,
            ..CandleConfig::default()
        };
        assert!(candle_walk(&mut rng(2), &candle).is_empty());
    }

    #[test]
    fn spark_walk_stays_in_band_even_under_wild_volatility() {
        let config = SparkConfig {
            count: 200,
            volatility: Volatility::new(50.0),
        };
        for seed in 0..20 {
            for p in spark_walk(&mut rng(seed), &config) {
                let v = p.value.value();
                assert!((10.0..=150.0).contains(&v), "value {v} escaped the band");
            }
        }
    }

    #[test]
    fn candle_wicks_bracket_the_body() {
        let config = CandleConfig::for_timeframe(Timeframe::All);
        for seed in 0..20 {
            for c in candle_walk(&mut rng(seed), &config) {
                let (body_lo, body_hi) = c.body_range();
                assert!(c.low <= body_lo, "low above body in {c:?}");
                assert!(c.high >= body_hi, "high below body in {c:?}");
            }
        }
    }

    #[test]
    fn candle_labels_run_chronologically() {
        let config = CandleConfig::for_timeframe(Timeframe::D7);
        let candles = candle_walk(&mut rng(7), &config);
        let labels: Vec<&str> = candles.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6", "Day 7"]);

        let hourly = candle_walk(&mut rng(7), &CandleConfig::for_timeframe(Timeframe::H1));
        assert_eq!(hourly.last().map(|c| c.label.as_str()), Some("T-1m"));
    }

    #[test]
    fn candles_chain_open_to_previous_close() {
        let config = CandleConfig::for_timeframe(Timeframe::M1);
        let candles = candle_walk(&mut rng(11), &config);
        for pair in candles.windows(2) {
            assert_eq!(pair[1].open, pair[0].close);
        }
    }

    #[test]
    fn seeded_walks_are_reproducible() {
        let config = CandleConfig::for_timeframe(Timeframe::Y1);
        let a = candle_walk(&mut rng(42), &config);
        let b = candle_walk(&mut rng(42), &config);
        assert_eq!(a, b);

        let spark_config = SparkConfig::default();
        let a = spark_walk(&mut rng(42), &spark_config);
        let b = spark_walk(&mut rng(42), &spark_config);
        assert_eq!(a, b);
    }

    #[test]
    fn timeframe_changes_count_but_not_the_walk_shape() {
        for tf in [
            Timeframe::H1,
            Timeframe::D7,
            Timeframe::M1,
            Timeframe::Y1,
            Timeframe::All,
        ] {
            let candles = candle_walk(&mut rng(3), &CandleConfig::for_timeframe(tf));
            assert_eq!(candles.len(), tf.point_count(), "{tf}");
            assert!(candles.iter().all(|c| !c.label.is_empty()));
        }
    }

    proptest! {
        #[test]
        fn spark_band_holds_for_all_inputs(
            seed in any::<u64>(),
            count in 0usize..120,
            volatility in 0.0f64..25.0,
        ) {
            let config = SparkConfig { count, volatility: Volatility::new(volatility) };
            let points = spark_walk(&mut rng(seed), &config);
            prop_assert_eq!(points.len(), count);
            for p in points {
                prop_assert!((10.0..=150.0).contains(&p.value.value()));
            }
        }

        #[test]
        fn candle_invariants_hold_for_all_inputs(
            seed in any::<u64>(),
            count in 0usize..120,
            volatility in -10.0f64..10.0,
        ) {
            let config = CandleConfig {
                count,
                volatility: Volatility::new(volatility),
                timeframe: Timeframe::All,
            };
            let candles = candle_walk(&mut rng(seed), &config);
            prop_assert_eq!(candles.len(), count);
            for c in candles {
                let (body_lo, body_hi) = c.body_range();
                prop_assert!(c.low <= body_lo);
                prop_assert!(c.high >= body_hi);
                prop_assert!(!c.label.is_empty());
            }
        }
    }
}
