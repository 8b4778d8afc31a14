//! Custom User-Provided Entropy Source.
//!
//! Buffers entropy injected by the caller (hardware tokens, dice rolls, a remote beacon).
//! Usually combined with [`super::os::OsEntropy`] through the aggregator rather than
//! used alone.

use zeroize::Zeroizing;

use super::{EntropyError, EntropySource};

/// Source that buffers user-injected entropy.
pub struct CustomSource {
    buffer: Zeroizing<Vec<u8>>,
    estimate: f64,
}

impl CustomSource {
    /// Creates a new empty CustomSource.
    pub fn new() -> Self {
        Self {
            buffer: Zeroizing::new(Vec::new()),
            estimate: 2.0,
        }
    }

    /// Overrides the per-byte entropy estimate (clamped to 0.0-8.0).
    pub fn with_estimate(mut self, bits_per_byte: f64) -> Self {
        self.estimate = bits_per_byte.clamp(0.0, 8.0);
        self
    }

    /// Add entropy bytes to the pool.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Bytes still available.
    pub fn available(&self) -> usize {
        self.buffer.len()
    }
}

impl Default for CustomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for CustomSource {
    fn name(&self) -> &'static str {
        "CustomInput"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.buffer.len() < dest.len() {
            return Err(EntropyError::Exhausted);
        }

        dest.copy_from_slice(&self.buffer[..dest.len()]);
        // Wipe consumed bytes before shifting them out.
        for b in self.buffer[..dest.len()].iter_mut() {
            *b = 0;
        }
        self.buffer.drain(..dest.len());
        Ok(())
    }

    fn entropy_estimate(&self) -> f64 {
        // Quality of injected bytes is unknown unless the caller says otherwise.
        self.estimate
    }
}
