//! Operating-System Entropy Source.
//!
//! Reads from the platform CSPRNG (`getrandom` on Linux, `BCryptGenRandom` on Windows,
//! etc.) through `rand_core::OsRng`. This is the default source for share generation.

use rand_core::{OsRng, RngCore};

use super::{EntropyError, EntropySource};

/// Entropy drawn from the operating system's random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy {
    _private: (),
}

impl OsEntropy {
    /// Creates a new OS entropy handle. Holds no state.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl EntropySource for OsEntropy {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            log::warn!("OS entropy source failed: {}", e);
            EntropyError::CollectionFailed
        })
    }

    fn entropy_estimate(&self) -> f64 {
        8.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_fill() {
        let mut source = OsEntropy::new();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        assert!(source.fill(&mut a).is_ok());
        assert!(source.fill(&mut b).is_ok());
        // 2^-256 chance of a false failure.
        assert_ne!(a, b);
        assert_eq!(source.name(), "OsRng");
    }

    #[test]
    fn test_os_fill_empty() {
        let mut source = OsEntropy::new();
        let mut empty: [u8; 0] = [];
        assert!(source.fill(&mut empty).is_ok());
    }
}
