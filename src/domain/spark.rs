use crate::config::Price;
use serde::{Deserialize, Serialize};

/// One point of a compact single-value trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparkPoint {
    pub label: String,
    pub value: Price,
}

impl SparkPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        SparkPoint {
            label: label.into(),
            // Sparklines carry one-decimal resolution only
            value: Price::new(value).round_coarse(),
        }
    }
}
