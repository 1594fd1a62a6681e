//! Typed value objects shared across the deck (Immutable Blueprints)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    const MIN_EPSILON: f64 = 1e-12;

    pub const fn new(val: f64) -> Self {
        // Absolute prices should not be negative
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > Self::MIN_EPSILON
    }

    /// Rounds to one decimal, matching the resolution sparkline points carry.
    pub(crate) fn round_coarse(self) -> Price {
        Price::new((self.0 * 10.0).round() / 10.0)
    }

    /// Formats a price with "Trader Precision" adaptive decimals.
    pub fn format_price(self) -> String {
        let price = self.0;
        if price == 0.0 {
            return "$0.00".to_string();
        }

        if price >= 1000.0 {
            format!("${:.2}", price)
        } else if price >= 1.0 {
            format!("${:.4}", price)
        } else if price >= 0.01 {
            format!("${:.5}", price)
        } else {
            format!("${:.8}", price)
        }
    }
}

impl From<f64> for Price {
    fn from(v: f64) -> Self {
        Price::new(v)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_price())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Pct(f64);

impl Pct {
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Percent change from `first` to `current`.
    /// Handles a zero baseline by returning 0.0 (neutral).
    pub fn change(current: f64, first: f64) -> Self {
        if first.abs() > f64::EPSILON {
            Self::new((current - first) / first * 100.0)
        } else {
            Self::new(0.0)
        }
    }

    pub fn is_gain(self) -> bool {
        self.0 >= 0.0
    }
}

impl std::fmt::Display for Pct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.2}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct UsdValue(f64);

impl UsdValue {
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Compact display for headline totals: $72.8k, $1.5M.
    pub fn compact(self) -> String {
        let val = self.0.abs();
        let body = if val >= 1_000_000.0 {
            format!("${:.1}M", val / 1_000_000.0)
        } else if val >= 1_000.0 {
            format!("${:.1}k", val / 1_000.0)
        } else {
            format!("${:.2}", val)
        };
        if self.0 < 0.0 { format!("-{body}") } else { body }
    }

    /// Compact display with an explicit leading sign: +$49.7k, -$23.1k.
    pub fn compact_signed(self) -> String {
        if self.0 < 0.0 {
            self.compact()
        } else {
            format!("+{}", self.compact())
        }
    }
}

impl std::ops::AddAssign for UsdValue {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::fmt::Display for UsdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cents = (self.0.abs() * 100.0).round() as u64;
        let whole = cents / 100;
        let frac = cents % 100;

        // Thousands separators, done by hand so we stay off a formatting crate.
        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.0 < 0.0 { "-" } else { "" };
        write!(f, "{sign}${grouped}.{frac:02}")
    }
}

/// Scale applied to every step of a synthetic walk.
/// Negative inputs are taken as magnitudes rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volatility(f64);

impl Volatility {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { -val } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Volatility {
    fn default() -> Self {
        Self(1.0)
    }
}

impl std::fmt::Display for Volatility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}x", self.0)
    }
}
