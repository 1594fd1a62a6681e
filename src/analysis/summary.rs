use crate::config::{Pct, Price};
use crate::domain::{Candle, SparkPoint};
use serde::{Deserialize, Serialize};

/// Pre-reduced numbers the display layer consumes alongside a series:
/// last/first value, movement since the start and the overall range.
///
/// An empty series reduces to the all-zero summary rather than an error;
/// the zero-baseline guard lives in [`Pct::change`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesSummary {
    pub current: Price,
    pub first: Price,
    pub delta: f64,
    pub percent_change: Pct,
    pub range_min: Price,
    pub range_max: Price,
}

impl SeriesSummary {
    pub fn from_candles(candles: &[Candle]) -> Self {
        let (Some(head), Some(tail)) = (candles.first(), candles.last()) else {
            return Self::default();
        };

        let first = head.open.value();
        let current = tail.close.value();

        let mut range_min = f64::INFINITY;
        let mut range_max = f64::NEG_INFINITY;
        for c in candles {
            range_min = range_min.min(c.low.value());
            range_max = range_max.max(c.high.value());
        }

        Self {
            current: Price::new(current),
            first: Price::new(first),
            delta: current - first,
            percent_change: Pct::change(current, first),
            range_min: Price::new(range_min),
            range_max: Price::new(range_max),
        }
    }

    pub fn from_spark(points: &[SparkPoint]) -> Self {
        let (Some(head), Some(tail)) = (points.first(), points.last()) else {
            return Self::default();
        };

        let first = head.value.value();
        let current = tail.value.value();

        let mut range_min = f64::INFINITY;
        let mut range_max = f64::NEG_INFINITY;
        for p in points {
            range_min = range_min.min(p.value.value());
            range_max = range_max.max(p.value.value());
        }

        Self {
            current: Price::new(current),
            first: Price::new(first),
            delta: current - first,
            percent_change: Pct::change(current, first),
            range_min: Price::new(range_min),
            range_max: Price::new(range_max),
        }
    }
}
