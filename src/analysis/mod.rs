// Derived statistics over generated series
mod summary;

pub use summary::SeriesSummary;
