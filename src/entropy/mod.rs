//! Entropy sources for coefficient generation.
//!
//! This module defines the interface through which the sharing layer draws randomness,
//! along with the concrete sources shipped with the crate and uniform sampling of
//! field elements.
//!
//! # Design
//! - **Caller-Supplied**: Generation never constructs its own source; the caller passes one in.
//!   Only the top-level convenience functions default to [`os::OsEntropy`].
//! - **Non-Deterministic**: Production sources must not be seeded generators. Predictable
//!   coefficients let an attacker forge shares or recover the secret below threshold.
//! - **Multi-Source**: [`aggregator::EntropyAggregator`] XOR-mixes independent sources.

pub mod aggregator;
pub mod custom;
pub mod os;
pub mod sample;
pub mod sources;

pub use sample::sample_field_element;

use thiserror::Error;

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// Source initialization failed (e.g. an aggregator with no sources).
    #[error("entropy source initialization failed")]
    InitFailed,
    /// Failed to collect sufficient entropy bytes.
    #[error("failed to collect entropy")]
    CollectionFailed,
    /// Source is exhausted (e.g., fixed buffer).
    #[error("entropy source exhausted")]
    Exhausted,
}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with random bytes from the source.
    ///
    /// # Returns
    /// * `Ok(())` on success.
    /// * `Err(EntropyError)` if the source fails.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Returns the estimated entropy per byte (in bits, 0.0-8.0).
    ///
    /// Polynomial generation logs a warning when this is below 8.0.
    fn entropy_estimate(&self) -> f64;
}
