//! Uniform sampling of field elements.
//!
//! Draws `ceil(bits(p) / 8)` bytes, masks the excess high bits, and rejects candidates
//! `>= p`. Each draw is accepted with probability above 1/2, so the loop terminates
//! quickly for any working source. A bounded retry count turns a stuck source into an
//! error instead of a hang.

use num_bigint_dig::BigUint;
use zeroize::Zeroizing;

use super::{EntropyError, EntropySource};

/// Maximum rejected draws before giving up on the source.
const MAX_REJECTIONS: usize = 128;

/// Samples a value uniformly from `[0, modulus)`.
///
/// # Returns
/// * `Ok(v)` with `v < modulus`.
/// * `Err(EntropyError)` if the source fails or keeps producing out-of-range values.
pub fn sample_field_element<R: EntropySource + ?Sized>(
    modulus: &BigUint,
    rng: &mut R,
) -> Result<BigUint, EntropyError> {
    let bits = modulus.bits();
    if bits == 0 {
        return Err(EntropyError::InitFailed);
    }
    let len = (bits + 7) / 8;
    let excess = len * 8 - bits;
    let top_mask = 0xFFu8 >> excess;

    let mut buf = Zeroizing::new(vec![0u8; len]);
    for _ in 0..MAX_REJECTIONS {
        rng.fill(&mut buf)?;
        buf[0] &= top_mask;
        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < modulus {
            return Ok(candidate);
        }
    }

    log::warn!(
        "entropy source {} produced {} out-of-range samples in a row",
        rng.name(),
        MAX_REJECTIONS
    );
    Err(EntropyError::CollectionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::custom::CustomSource;
    use crate::entropy::os::OsEntropy;
    use num_traits::One;

    struct ConstEntropy(u8);

    impl EntropySource for ConstEntropy {
        fn name(&self) -> &'static str { "Const" }
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
            dest.iter_mut().for_each(|b| *b = self.0);
            Ok(())
        }
        fn entropy_estimate(&self) -> f64 { 0.0 }
    }

    #[test]
    fn test_sample_in_range() {
        let p = (BigUint::one() << 521usize) - BigUint::one();
        let mut rng = OsEntropy::new();
        for _ in 0..32 {
            let v = sample_field_element(&p, &mut rng).unwrap();
            assert!(v < p);
        }
    }

    #[test]
    fn test_sample_masks_high_bits() {
        // p = 257 needs 9 bits: two bytes, top byte masked to one bit.
        let p = BigUint::from(257u32);
        let mut src = CustomSource::new();
        src.add_bytes(&[0xFE, 0x05]);
        let v = sample_field_element(&p, &mut src).unwrap();
        assert_eq!(v, BigUint::from(5u32));
    }

    #[test]
    fn test_sample_rejects_out_of_range() {
        let p = BigUint::from(257u32);
        let mut src = CustomSource::new();
        // 0x01FF = 511 >= 257 is rejected, then 0x0100 = 256 is accepted.
        src.add_bytes(&[0x01, 0xFF, 0x01, 0x00]);
        let v = sample_field_element(&p, &mut src).unwrap();
        assert_eq!(v, BigUint::from(256u32));
        assert_eq!(src.available(), 0);
    }

    #[test]
    fn test_sample_stuck_source() {
        let p = BigUint::from(257u32);
        let mut rng = ConstEntropy(0xFF);
        assert_eq!(sample_field_element(&p, &mut rng), Err(EntropyError::CollectionFailed));
    }

    #[test]
    fn test_sample_exhausted_source() {
        let p = BigUint::from(257u32);
        let mut src = CustomSource::new();
        assert_eq!(sample_field_element(&p, &mut src), Err(EntropyError::Exhausted));
    }
}
