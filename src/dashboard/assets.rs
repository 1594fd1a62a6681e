use crate::config::{DECK, Pct, UsdValue};
use serde::Serialize;

/// A position in the mock portfolio ("My Assets" list).
#[derive(Debug, Clone, Serialize)]
pub struct AssetHolding {
    pub name: &'static str,
    pub symbol: &'static str,
    pub amount: f64,
    pub value: UsdValue,
}

/// One segment of the allocation donut.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationSlice {
    pub name: &'static str,
    pub value: UsdValue,
    pub share: Pct,
}

#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub holdings: Vec<AssetHolding>,
}

impl Portfolio {
    pub fn from_deck() -> Self {
        let holdings = DECK
            .holdings
            .iter()
            .map(|spec| AssetHolding {
                name: spec.name,
                symbol: spec.symbol,
                amount: spec.amount,
                value: UsdValue::new(spec.value_usd),
            })
            .collect();
        Self { holdings }
    }

    pub fn total_value(&self) -> UsdValue {
        let mut total = UsdValue::default();
        for h in &self.holdings {
            total += h.value;
        }
        total
    }

    /// Donut segments. Shares always total 100% for a non-empty portfolio.
    pub fn allocation(&self) -> Vec<AllocationSlice> {
        let total = self.total_value().value();
        self.holdings
            .iter()
            .map(|h| {
                let share = if total > f64::EPSILON {
                    Pct::new(h.value.value() / total * 100.0)
                } else {
                    Pct::default()
                };
                AllocationSlice {
                    name: h.name,
                    value: h.value,
                    share,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_the_holdings() {
        let portfolio = Portfolio::from_deck();
        let expected: f64 = DECK.holdings.iter().map(|h| h.value_usd).sum();
        assert!((portfolio.total_value().value() - expected).abs() < 1e-9);
    }

    #[test]
    fn allocation_shares_total_one_hundred_percent() {
        let portfolio = Portfolio::from_deck();
        let total_share: f64 = portfolio
            .allocation()
            .iter()
            .map(|s| s.share.value())
            .sum();
        assert!((total_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn holdings_mirror_the_deck_catalog() {
        let portfolio = Portfolio::from_deck();
        assert_eq!(portfolio.holdings.len(), DECK.holdings.len());
        assert_eq!(portfolio.holdings[0].symbol, "BTC");
        assert_eq!(portfolio.holdings[0].value.to_string(), "$19,405.12");
    }
}
