//! Quorum logic for Shamir's Secret Sharing over GF(p).
//!
//! This module implements threshold validation and share generation.
//!
//! # Security
//! - **Validation First**: Every parameter is checked before any entropy is drawn, so a
//!   rejected call emits no shares and consumes no randomness.
//! - **Zeroization**: The polynomial is wiped when it goes out of scope.
//! - **Nonzero Points**: Shares are evaluated at `x = 1..=n`; `x = 0` would be the secret.

use num_bigint_dig::BigUint;

use crate::core::field::PrimeField;
use crate::entropy::EntropySource;
use crate::mpc::polynomial::Polynomial;
use crate::mpc::{share::Share, ConfigError, SharingError};

/// Checks the `(threshold, total_shares)` pair against the field.
///
/// # Returns
/// * `Err(ConfigError::ZeroThreshold)` if `threshold == 0`.
/// * `Err(ConfigError::ThresholdExceedsShares)` if `threshold > total_shares`.
/// * `Err(ConfigError::TooFewShares)` if `total_shares < 2`.
/// * `Err(ConfigError::TooManyShares)` if `total_shares >= p`, which would make two
///   x-coordinates collide modulo `p` or land one on zero.
pub fn validate_parameters(
    field: &PrimeField,
    threshold: u32,
    total_shares: u32,
) -> Result<(), ConfigError> {
    if threshold == 0 {
        return Err(ConfigError::ZeroThreshold);
    }
    if threshold > total_shares {
        return Err(ConfigError::ThresholdExceedsShares {
            threshold,
            total_shares,
        });
    }
    if total_shares < 2 {
        return Err(ConfigError::TooFewShares(total_shares));
    }
    if !field.contains(&BigUint::from(total_shares)) {
        return Err(ConfigError::TooManyShares { total_shares });
    }
    Ok(())
}

/// Splits a secret into `total_shares` shares, requiring `threshold` of them to reconstruct.
///
/// # Arguments
/// * `field` - The prime field to work in.
/// * `secret` - The secret, `0 < secret < p`.
/// * `threshold` - Number of shares required for reconstruction.
/// * `total_shares` - Number of shares to generate.
/// * `rng` - Non-deterministic entropy source for the random coefficients.
///
/// # Returns
/// * `Ok(Vec<Share>)` with x-coordinates exactly `1..=total_shares`, in order.
/// * `Err(SharingError)` on invalid parameters or entropy failure.
pub fn split_secret<R: EntropySource + ?Sized>(
    field: &PrimeField,
    secret: &BigUint,
    threshold: u32,
    total_shares: u32,
    rng: &mut R,
) -> Result<Vec<Share>, SharingError> {
    validate_parameters(field, threshold, total_shares)?;

    let poly = Polynomial::random(field, secret, threshold, rng)?;

    let shares: Vec<Share> = (1..=total_shares)
        .map(|x| Share {
            x,
            y: poly.evaluate(field, &BigUint::from(x)),
        })
        .collect();

    log::debug!(
        "split secret into {} shares (threshold {}, {}-bit field, {} entropy)",
        total_shares,
        threshold,
        field.bits(),
        rng.name()
    );

    Ok(shares)
}
