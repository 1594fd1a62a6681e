//! Configuration module for the coin-deck application.

// Can all be private now because we have a public re-export.
mod deck;
mod timeframe;
mod types;

// Re-export commonly used items
pub use deck::{AssetSpec, DECK, DeckConfig, HoldingSpec, MarketTotals, StatSpec, WalkBounds};
pub use timeframe::Timeframe;
pub use types::{Pct, Price, UsdValue, Volatility};
