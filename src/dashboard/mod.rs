// Mock dashboard assembly: portfolio, cards and the full snapshot
mod assets;
mod cards;
mod snapshot;

// Re-export commonly used types
pub use assets::{AllocationSlice, AssetHolding, Portfolio};
pub use cards::{StatCard, SummaryCard, Trend, stat_cards, summary_cards};
pub use snapshot::{DashboardSnapshot, MarketView};
