//! Threshold Secret Sharing.
//!
//! This module implements Shamir's Secret Sharing over a prime field GF(p) with
//! arbitrary-precision elements. The default field is GF(2^521 - 1).
//!
//! # Components
//! - `share`: Definition of a secret share.
//! - `polynomial`: Random polynomial construction and Horner evaluation.
//! - `quorum`: Threshold validation and share generation.
//! - `reconstruct`: Lagrange interpolation for secret recovery.
//! - `aggregate`: Operations on shares (proactive refresh, homomorphic addition).
//!
//! # Security
//! - **Zeroization**: Coefficients and share values are zeroized on drop.
//! - **Fail-Fast**: All parameters are validated before any entropy is drawn.
//! - **No Integrity**: Recovery from too few or inconsistent shares returns a wrong value
//!   silently. Layer a commitment scheme on top if that matters.

pub mod aggregate;
pub(crate) mod polynomial;
pub mod quorum;
pub mod reconstruct;
pub mod share;

use num_bigint_dig::BigUint;
use thiserror::Error;

use crate::config::SharingConfig;
use crate::core::field::{FieldError, PrimeField};
use crate::entropy::{EntropyError, EntropySource};
use share::Share;

/// Invalid parameters supplied to a sharing operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Threshold of zero.
    #[error("threshold must be at least 1")]
    ZeroThreshold,
    /// Threshold larger than the number of shares.
    #[error("threshold {threshold} exceeds total shares {total_shares}: secret would be irrecoverable")]
    ThresholdExceedsShares { threshold: u32, total_shares: u32 },
    /// Fewer than two shares requested.
    #[error("must produce at least two shares, got {0}")]
    TooFewShares(u32),
    /// Secret is zero (treated as absent).
    #[error("secret must be specified and nonzero")]
    MissingSecret,
    /// Secret is not a canonical field element.
    #[error("secret must be smaller than the field prime")]
    SecretOutOfRange,
    /// Share x-coordinates would wrap around the field modulus.
    #[error("{total_shares} shares do not fit below the field prime")]
    TooManyShares { total_shares: u32 },
    /// Configured modulus failed the probable-prime test.
    #[error("configured modulus is not prime")]
    NotPrime,
    /// Modulus below 2.
    #[error("field modulus must be at least 2")]
    InvalidPrime,
    /// Recovery needs at least two points.
    #[error("need at least two shares to recover, got {0}")]
    NotEnoughShares(usize),
    /// A share sits at x = 0, where the polynomial equals the secret.
    #[error("share x-coordinate must be nonzero")]
    ZeroPoint,
    /// Refresh with a constant mask polynomial would leave every share unchanged.
    #[error("refresh needs a threshold of at least 2, got {0}")]
    RefreshThreshold(u32),
}

/// Errors for secret sharing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharingError {
    #[error("invalid sharing configuration: {0}")]
    Config(#[from] ConfigError),
    /// Two shares with the same x-coordinate.
    #[error("duplicate share x-coordinate {0}")]
    DuplicatePoint(u32),
    /// A denominator had no inverse modulo p. Unreachable for a prime modulus and
    /// distinct points below it.
    #[error("modular division by a value with no inverse")]
    NoInverse,
    #[error("entropy source failure: {0}")]
    Entropy(#[from] EntropyError),
    /// Shares combined pairwise sit at different x-coordinates.
    #[error("shares do not line up: x={left} vs x={right}")]
    ShareMismatch { left: u32, right: u32 },
}

impl From<FieldError> for SharingError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::NoInverse => SharingError::NoInverse,
            FieldError::InvalidModulus => SharingError::Config(ConfigError::InvalidPrime),
        }
    }
}

/// Trait for Secret Sharing Schemes.
pub trait SecretSharingScheme {
    type Share;
    type Secret;
    type Error;

    /// Splits a secret into `n` shares with threshold `k`.
    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &Self::Secret,
        k: u32,
        n: u32,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error>;

    /// Reconstructs a secret from shares.
    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error>;
}

/// Shamir's Secret Sharing over a prime field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShamirPrimeField {
    field: PrimeField,
}

impl ShamirPrimeField {
    /// Creates a scheme over GF(`prime`). Primality is not checked.
    pub fn new(prime: BigUint) -> Result<Self, SharingError> {
        Ok(Self {
            field: PrimeField::new(prime)?,
        })
    }

    /// Creates a scheme from a validated configuration, including the primality check.
    pub fn from_config(config: &SharingConfig) -> Result<Self, SharingError> {
        let field = config.validate()?;
        Ok(Self { field })
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }
}

impl SecretSharingScheme for ShamirPrimeField {
    type Share = Share;
    type Secret = BigUint;
    type Error = SharingError;

    fn split<R: EntropySource + ?Sized>(
        &self,
        secret: &BigUint,
        k: u32,
        n: u32,
        rng: &mut R,
    ) -> Result<Vec<Share>, SharingError> {
        quorum::split_secret(&self.field, secret, k, n, rng)
    }

    fn reconstruct(&self, shares: &[Share]) -> Result<BigUint, SharingError> {
        reconstruct::reconstruct_secret(&self.field, shares)
    }
}
