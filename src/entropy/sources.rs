//! Standard Entropy Sources Registry.
//!
//! Re-exports available entropy sources for convenient access.

pub use super::aggregator::EntropyAggregator;
pub use super::custom::CustomSource;
pub use super::os::OsEntropy;
