//! Random polynomial construction and evaluation.
//!
//! A sharing polynomial is `f(x) = s + c_1 x + ... + c_{k-1} x^{k-1}` over GF(p), where
//! `s` is the secret and every `c_i` is drawn uniformly from `[0, p)`. It exists only
//! while shares are being computed and is wiped on drop.

use std::fmt;

use num_bigint_dig::BigUint;
use num_traits::Zero;
use zeroize::Zeroizing;

use crate::core::field::PrimeField;
use crate::entropy::{sample_field_element, EntropySource};
use crate::mpc::{ConfigError, SharingError};

/// Coefficients `[c_0, c_1, ..., c_{k-1}]`, constant term first.
pub(crate) struct Polynomial {
    coefficients: Zeroizing<Vec<BigUint>>,
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .field("coefficients", &"***SENSITIVE***")
            .finish()
    }
}

impl Polynomial {
    /// Builds a random polynomial of degree `threshold - 1` whose constant term is `secret`.
    ///
    /// # Returns
    /// * `Err(ConfigError::MissingSecret)` if the secret is zero.
    /// * `Err(ConfigError::ZeroThreshold)` if `threshold == 0`.
    /// * `Err(ConfigError::SecretOutOfRange)` if `secret >= p`.
    /// * `Err(SharingError::Entropy)` if the source fails.
    pub(crate) fn random<R: EntropySource + ?Sized>(
        field: &PrimeField,
        secret: &BigUint,
        threshold: u32,
        rng: &mut R,
    ) -> Result<Self, SharingError> {
        if secret.is_zero() {
            return Err(ConfigError::MissingSecret.into());
        }
        if !field.contains(secret) {
            return Err(ConfigError::SecretOutOfRange.into());
        }
        Self::with_intercept(field, secret.clone(), threshold, rng)
    }

    /// Builds a random polynomial of degree `threshold - 1` with `f(0) = 0`.
    ///
    /// Adding its evaluations to existing shares re-randomizes them without
    /// changing the secret.
    pub(crate) fn random_zero<R: EntropySource + ?Sized>(
        field: &PrimeField,
        threshold: u32,
        rng: &mut R,
    ) -> Result<Self, SharingError> {
        Self::with_intercept(field, BigUint::zero(), threshold, rng)
    }

    fn with_intercept<R: EntropySource + ?Sized>(
        field: &PrimeField,
        intercept: BigUint,
        threshold: u32,
        rng: &mut R,
    ) -> Result<Self, SharingError> {
        if threshold == 0 {
            return Err(ConfigError::ZeroThreshold.into());
        }

        let mut coefficients = Zeroizing::new(Vec::<BigUint>::with_capacity(threshold as usize));
        coefficients.push(intercept);
        for _ in 1..threshold {
            coefficients.push(sample_field_element(field.modulus(), rng)?);
        }

        // Checked after drawing: aggregated sources only know what contributed.
        if threshold > 1 && rng.entropy_estimate() < 8.0 {
            log::warn!(
                "entropy source {} estimates {:.1} bits/byte; coefficients may be predictable",
                rng.name(),
                rng.entropy_estimate()
            );
        }
        Ok(Self { coefficients })
    }

    #[cfg(test)]
    pub(crate) fn from_coefficients(coefficients: Vec<BigUint>) -> Self {
        Self {
            coefficients: Zeroizing::new(coefficients),
        }
    }

    pub(crate) fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    #[cfg(test)]
    pub(crate) fn intercept(&self) -> Option<&BigUint> {
        self.coefficients.first()
    }

    /// Evaluates the polynomial at `x` using Horner's method, reducing after every step.
    pub(crate) fn evaluate(&self, field: &PrimeField, x: &BigUint) -> BigUint {
        let mut acc = BigUint::zero();
        for coeff in self.coefficients.iter().rev() {
            acc = field.add(&field.mul(&acc, x), coeff);
        }
        acc
    }
}
