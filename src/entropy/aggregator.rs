//! Entropy Aggregator.
//!
//! Combines multiple entropy sources into a unified stream by XORing their output.
//! If any single contributing source is uniform and independent of the others, the
//! mixed output is uniform.
//!
//! The reported estimate only credits sources that actually contributed. A
//! high-quality source that fails and is skipped must not vouch for the weak
//! sources left behind.

use zeroize::Zeroizing;

use super::os::OsEntropy;
use super::{EntropyError, EntropySource};

/// Aggregator that collects from multiple sources.
pub struct EntropyAggregator {
    sources: Vec<Box<dyn EntropySource + Send + Sync>>,
    /// Lowest per-fill estimate seen so far; `None` until a fill succeeds.
    credited: Option<f64>,
}

impl EntropyAggregator {
    /// Creates a new empty aggregator.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            credited: None,
        }
    }

    /// Creates an aggregator seeded with the operating-system source.
    pub fn with_os() -> Self {
        let mut agg = Self::new();
        agg.add_source(OsEntropy::new());
        agg
    }

    /// Adds a source to the aggregator.
    pub fn add_source<S>(&mut self, source: S)
    where
        S: EntropySource + Send + Sync + 'static,
    {
        self.sources.push(Box::new(source));
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Fills the destination buffer by collecting from all sources and XORing the results.
    ///
    /// Sources that fail are skipped; the call fails only if every source fails.
    /// The fill is credited with the best estimate among the sources that succeeded.
    pub fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.sources.is_empty() {
            return Err(EntropyError::InitFailed);
        }

        dest.iter_mut().for_each(|b| *b = 0);

        let mut temp_buf = Zeroizing::new(vec![0u8; dest.len()]);
        let mut success_count = 0;
        let mut fill_estimate = 0.0f64;

        for source in &mut self.sources {
            match source.fill(&mut temp_buf) {
                Ok(()) => {
                    for (d, s) in dest.iter_mut().zip(temp_buf.iter()) {
                        *d ^= *s;
                    }
                    success_count += 1;
                    fill_estimate = fill_estimate.max(source.entropy_estimate());
                }
                Err(e) => log::debug!("entropy source {} skipped: {}", source.name(), e),
            }
        }

        if success_count == 0 {
            return Err(EntropyError::CollectionFailed);
        }

        self.credited = Some(match self.credited {
            Some(prev) => prev.min(fill_estimate),
            None => fill_estimate,
        });
        Ok(())
    }
}

impl Default for EntropyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for EntropyAggregator {
    fn name(&self) -> &'static str {
        "Aggregator"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        EntropyAggregator::fill(self, dest)
    }

    /// Estimate of the weakest fill so far. Sources may be correlated, so each fill
    /// is credited with its best contributing source only. Zero before any fill.
    fn entropy_estimate(&self) -> f64 {
        self.credited.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::custom::CustomSource;

    #[test]
    fn test_aggregator_mixing() {
        let mut agg = EntropyAggregator::new();

        let mut s1 = CustomSource::new();
        s1.add_bytes(&[0xAA, 0xAA]);
        agg.add_source(s1);

        let mut s2 = CustomSource::new();
        s2.add_bytes(&[0x55, 0x55]);
        agg.add_source(s2);

        let mut buf = [0u8; 2];
        assert!(agg.fill(&mut buf).is_ok());

        // AA ^ 55 = FF
        assert_eq!(buf, [0xFF, 0xFF]);
    }

    #[test]
    fn test_aggregator_partial_failure() {
        let mut agg = EntropyAggregator::new();

        // Empty source, will fail to fill
        agg.add_source(CustomSource::new());

        let mut s2 = CustomSource::new();
        s2.add_bytes(&[0x01, 0x02]);
        agg.add_source(s2);

        let mut buf = [0u8; 2];
        assert!(agg.fill(&mut buf).is_ok());
        assert_eq!(buf, [0x01, 0x02]);
    }

    #[test]
    fn test_aggregator_empty_and_exhausted() {
        let mut agg = EntropyAggregator::new();
        let mut buf = [0u8; 4];
        assert_eq!(agg.fill(&mut buf), Err(EntropyError::InitFailed));

        agg.add_source(CustomSource::new());
        assert_eq!(agg.fill(&mut buf), Err(EntropyError::CollectionFailed));
    }

    #[test]
    fn test_aggregator_estimate() {
        let mut agg = EntropyAggregator::with_os();
        agg.add_source(CustomSource::new());
        assert_eq!(agg.len(), 2);
        assert_eq!(agg.entropy_estimate(), 0.0);

        let mut buf = [0u8; 8];
        agg.fill(&mut buf).unwrap();
        assert_eq!(agg.entropy_estimate(), 8.0);
    }

    #[test]
    fn test_failed_source_is_not_credited() {
        let mut agg = EntropyAggregator::new();
        agg.add_source(CustomSource::new().with_estimate(8.0));
        let mut weak = CustomSource::new().with_estimate(0.0);
        weak.add_bytes(&[0u8; 4]);
        agg.add_source(weak);

        let mut buf = [0xEEu8; 4];
        agg.fill(&mut buf).unwrap();
        assert_eq!(buf, [0u8; 4]);
        assert_eq!(agg.entropy_estimate(), 0.0);
    }

    #[test]
    fn test_estimate_tracks_weakest_fill() {
        let mut agg = EntropyAggregator::new();
        let mut strong = CustomSource::new().with_estimate(8.0);
        strong.add_bytes(&[0x11; 2]);
        agg.add_source(strong);
        let mut weak = CustomSource::new().with_estimate(1.0);
        weak.add_bytes(&[0x22; 4]);
        agg.add_source(weak);

        let mut buf = [0u8; 2];
        agg.fill(&mut buf).unwrap();
        assert_eq!(agg.entropy_estimate(), 8.0);

        // The strong source is drained; only the weak one contributes now.
        agg.fill(&mut buf).unwrap();
        assert_eq!(buf, [0x22, 0x22]);
        assert_eq!(agg.entropy_estimate(), 1.0);

        // A failed fill leaves the estimate alone.
        assert_eq!(agg.fill(&mut [0u8; 64]), Err(EntropyError::CollectionFailed));
        assert_eq!(agg.entropy_estimate(), 1.0);
    }
}
