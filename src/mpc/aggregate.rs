//! Operations on shares.
//!
//! This module implements operations on existing shares, such as proactive refresh
//! and homomorphic addition.
//!
//! # Features
//! - **Proactive Refresh**: Updates shares without changing the secret.
//! - **Homomorphic Addition**: Adds two secrets by adding their shares.
//!
//! # Security
//! - **Zeroization**: The refresh polynomial is zeroized on drop.
//! - **All-or-Nothing**: Refresh computes every update before touching any share.

use num_bigint_dig::BigUint;

use crate::core::field::PrimeField;
use crate::entropy::EntropySource;
use crate::mpc::polynomial::Polynomial;
use crate::mpc::{share::Share, ConfigError, SharingError};

/// Refreshes a set of shares by adding evaluations of a random polynomial with `f(0) = 0`.
///
/// The secret is unchanged. Refreshed shares do not combine with pre-refresh shares, so
/// a custodian who leaked an old share no longer helps an attacker.
///
/// # Arguments
/// * `shares` - Shares to refresh in place. Refresh every outstanding share together.
/// * `threshold` - The threshold used for the original sharing (degree is `threshold - 1`).
///   Must be at least 2, since a degree-0 mask with `f(0) = 0` is identically zero.
/// * `rng` - Entropy source.
pub fn refresh_shares<R: EntropySource + ?Sized>(
    field: &PrimeField,
    shares: &mut [Share],
    threshold: u32,
    rng: &mut R,
) -> Result<(), SharingError> {
    if shares.is_empty() {
        return Err(ConfigError::NotEnoughShares(0).into());
    }
    if threshold < 2 {
        return Err(ConfigError::RefreshThreshold(threshold).into());
    }
    for (i, share) in shares.iter().enumerate() {
        if share.x == 0 {
            return Err(ConfigError::ZeroPoint.into());
        }
        if shares[i + 1..].iter().any(|o| o.x == share.x) {
            return Err(SharingError::DuplicatePoint(share.x));
        }
    }

    let mask = Polynomial::random_zero(field, threshold, rng)?;
    let updates: Vec<BigUint> = shares
        .iter()
        .map(|s| mask.evaluate(field, &BigUint::from(s.x)))
        .collect();

    for (share, update) in shares.iter_mut().zip(updates.iter()) {
        share.y = field.add(&field.reduce(&share.y), update);
    }

    log::debug!("refreshed {} shares (threshold {})", shares.len(), threshold);
    Ok(())
}

/// Adds two shares homomorphically.
///
/// If `a` is a share of `s1` and `b` is a share of `s2` at the same x-coordinate, the
/// result is a share of `s1 + s2 (mod p)`.
pub fn add_shares(field: &PrimeField, a: &Share, b: &Share) -> Result<Share, SharingError> {
    if a.x != b.x {
        return Err(SharingError::ShareMismatch {
            left: a.x,
            right: b.x,
        });
    }
    Ok(Share::new(a.x, field.add(&field.reduce(&a.y), &field.reduce(&b.y)))?)
}
