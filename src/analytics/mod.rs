//! Presentation Derivations
//!
//! Statistical derivations feeding the chart surface: nearest-rank percentile
//! aggregation across well production series, plus mean / standard-deviation
//! helpers.

mod percentiles;
mod stats;

pub use percentiles::{aggregate_percentiles, nearest_rank, percentile_index, PercentileChart};
pub use stats::{mean, std_dev};
