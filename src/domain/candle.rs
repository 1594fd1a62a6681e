use crate::config::Price;
use serde::{Deserialize, Serialize};

// Define the CandleKind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleKind {
    Bullish,
    Bearish,
}

// One synthetic period: a labelled open/high/low/close quad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub label: String,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl Candle {
    // A constructor for convenience
    pub fn new(label: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Candle {
            label: label.into(),
            open: Price::new(open),
            high: Price::new(high),
            low: Price::new(low),
            close: Price::new(close),
        }
    }

    // A method to determine the kind of candle
    pub fn kind(&self) -> CandleKind {
        if self.close >= self.open {
            CandleKind::Bullish
        } else {
            CandleKind::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (Price, Price) {
        match self.kind() {
            CandleKind::Bullish => (self.open, self.close),
            CandleKind::Bearish => (self.close, self.open),
        }
    }

    /// Midpoint of the body, useful as a single-line rendering of the candle.
    pub fn body_mid(&self) -> Price {
        Price::new((self.open.value() + self.close.value()) / 2.0)
    }
}
