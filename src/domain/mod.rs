// Domain types and value objects
mod candle;
mod spark;

// Re-export commonly used types
pub use candle::{Candle, CandleKind};
pub use spark::SparkPoint;
