//! Configuration for a sharing deployment.
//!
//! Groups the threshold, share count and field prime that a host application
//! settles on once and reuses for every split and recovery.

use num_bigint_dig::{prime::probably_prime, BigUint};

use crate::core::field::PrimeField;
use crate::mpc::quorum::validate_parameters;
use crate::mpc::ConfigError;

/// Miller-Rabin rounds used by [`SharingConfig::validate`].
pub const DEFAULT_PRIMALITY_ROUNDS: usize = 20;

/// Threshold sharing parameters.
///
/// Built by the host application and handed to
/// [`ShamirPrimeField::from_config`](crate::mpc::ShamirPrimeField::from_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharingConfig {
    /// Minimum number of shares needed to reconstruct (K).
    pub threshold: u32,

    /// Number of shares to produce (N).
    pub total_shares: u32,

    /// Field order. Defaults to `2^521 - 1`.
    pub prime: BigUint,

    /// Miller-Rabin rounds for the primality check. Zero skips it.
    pub primality_rounds: usize,
}

impl SharingConfig {
    /// A `threshold`-of-`total_shares` configuration over the default prime.
    pub fn new(threshold: u32, total_shares: u32) -> Self {
        Self {
            threshold,
            total_shares,
            prime: PrimeField::default().modulus().clone(),
            primality_rounds: DEFAULT_PRIMALITY_ROUNDS,
        }
    }

    /// Overrides the field prime.
    pub fn with_prime(mut self, prime: BigUint) -> Self {
        self.prime = prime;
        self
    }

    /// Overrides the number of Miller-Rabin rounds.
    pub fn with_primality_rounds(mut self, rounds: usize) -> Self {
        self.primality_rounds = rounds;
        self
    }

    /// Validates the configuration and returns the field it describes.
    ///
    /// # Returns
    /// * `Err(ConfigError::InvalidPrime)` if `prime < 2`.
    /// * Any error from [`validate_parameters`].
    /// * `Err(ConfigError::NotPrime)` if the prime fails the probable-prime test.
    pub fn validate(&self) -> Result<PrimeField, ConfigError> {
        let field =
            PrimeField::new(self.prime.clone()).map_err(|_| ConfigError::InvalidPrime)?;
        validate_parameters(&field, self.threshold, self.total_shares)?;
        if self.primality_rounds > 0 && !probably_prime(&self.prime, self.primality_rounds) {
            log::warn!("configured {}-bit modulus is composite", field.bits());
            return Err(ConfigError::NotPrime);
        }
        Ok(field)
    }
}
