// Synthetic series generation
mod walk;

// Re-export commonly used types
pub use walk::{CandleConfig, SparkConfig, candle_walk, spark_walk};
