//! Secret reconstruction from shares.
//!
//! This module implements Lagrange interpolation over GF(p) to recover the value of the
//! sharing polynomial at a target point: `x = 0` for the secret, or a fresh `x` to
//! re-issue a lost share.
//!
//! # Method
//! For points `(x_i, y_i)` and target `t`:
//! - `num_i = prod_{o != i} (t - x_o)`
//! - `den_i = prod_{o != i} (x_i - x_o)`
//! - `D = prod_j den_j`
//!
//! The result is `(sum_i num_i * D * y_i / den_i) / D`. Scaling by `D` keeps every
//! division until the end of each term, and all arithmetic stays exact in GF(p).
//!
//! # Validation
//! - At least two shares, no share at `x = 0`, and pairwise-distinct x-coordinates.
//! - No integrity check: too few or inconsistent shares yield a wrong value silently.

use num_bigint_dig::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::core::field::PrimeField;
use crate::mpc::{share::Share, ConfigError, SharingError};

/// Reconstructs the secret (the polynomial's value at `x = 0`) from a set of shares.
///
/// # Returns
/// * `Ok(BigUint)` in `[0, p)`. Equals the secret when at least `threshold` consistent
///   shares are supplied.
/// * `Err(SharingError)` if the share set is malformed.
pub fn reconstruct_secret(field: &PrimeField, shares: &[Share]) -> Result<BigUint, SharingError> {
    validate_shares(shares)?;
    let secret = interpolate_at(field, 0, shares)?;
    log::debug!(
        "reconstructed secret from {} shares ({}-bit field)",
        shares.len(),
        field.bits()
    );
    Ok(secret)
}

/// Re-issues the share at `x` from an existing share set.
///
/// Needs at least `threshold` consistent shares to produce a share that matches the
/// original polynomial.
///
/// # Returns
/// * `Err(ConfigError::ZeroPoint)` if `x == 0`.
/// * `Err(SharingError::DuplicatePoint)` if `x` is already held by one of `shares`.
pub fn recover_share(field: &PrimeField, shares: &[Share], x: u32) -> Result<Share, SharingError> {
    if x == 0 {
        return Err(ConfigError::ZeroPoint.into());
    }
    validate_shares(shares)?;
    if shares.iter().any(|s| s.x == x) {
        return Err(SharingError::DuplicatePoint(x));
    }
    let y = interpolate_at(field, x, shares)?;
    log::debug!("re-issued share x={} from {} shares", x, shares.len());
    Ok(Share { x, y })
}

/// Checks size, nonzero x, and pairwise-distinct x over the share set.
fn validate_shares(shares: &[Share]) -> Result<(), SharingError> {
    if shares.len() < 2 {
        return Err(ConfigError::NotEnoughShares(shares.len()).into());
    }

    for share in shares {
        if share.x == 0 {
            return Err(ConfigError::ZeroPoint.into());
        }
    }

    // O(m^2), m is small.
    for i in 0..shares.len() {
        for j in (i + 1)..shares.len() {
            if shares[i].x == shares[j].x {
                return Err(SharingError::DuplicatePoint(shares[i].x));
            }
        }
    }

    Ok(())
}

/// Lagrange interpolation of the share points, evaluated at `target`.
fn interpolate_at(field: &PrimeField, target: u32, shares: &[Share]) -> Result<BigUint, SharingError> {
    let diff = |a: u32, b: u32| field.reduce_signed(&BigInt::from(i64::from(a) - i64::from(b)));

    let mut nums = Vec::with_capacity(shares.len());
    let mut dens = Vec::with_capacity(shares.len());
    for (i, current) in shares.iter().enumerate() {
        let mut num = BigUint::one();
        let mut den = BigUint::one();
        for (o, other) in shares.iter().enumerate() {
            if o == i {
                continue;
            }
            num = field.mul(&num, &diff(target, other.x));
            den = field.mul(&den, &diff(current.x, other.x));
        }
        nums.push(num);
        dens.push(den);
    }

    let den_all = dens.iter().fold(BigUint::one(), |acc, d| field.mul(&acc, d));

    let mut numerator = BigUint::zero();
    for ((num, den), share) in nums.iter().zip(dens.iter()).zip(shares.iter()) {
        let scaled = field.mul(&field.mul(num, &den_all), &field.reduce(&share.y));
        numerator = field.add(&numerator, &field.divide(&scaled, den)?);
    }

    let value = field.divide(&numerator, &den_all)?;
    Ok(field.reduce(&value))
}
