//! Threshold secret sharing over a large prime field.
//!
//! Splits a secret integer into `N` shares such that any `K` of them reconstruct it
//! exactly and fewer than `K` reveal nothing about it. Shares are points on a random
//! degree-`(K-1)` polynomial over GF(p) whose constant term is the secret; recovery is
//! Lagrange interpolation at zero.
//!
//! The default field is GF(2^521 - 1). Any prime may be supplied instead.
//!
//! ```no_run
//! use threshold_sss::{generate_shares, recover_secret, default_prime, BigUint};
//!
//! let prime = default_prime();
//! let secret = BigUint::from(737373u32);
//! let shares = generate_shares(&secret, 8, 10, &prime)?;
//! assert_eq!(recover_secret(&shares[..8], &prime)?, secret);
//! assert_eq!(recover_secret(&shares[2..], &prime)?, secret);
//! # Ok::<(), threshold_sss::SharingError>(())
//! ```
//!
//! Share transport, persistence and integrity checks are out of scope.

pub mod config;
pub mod core;
pub mod entropy;
pub mod mpc;

pub use num_bigint_dig::BigUint;

pub use crate::config::SharingConfig;
pub use crate::core::field::{FieldError, PrimeField, DEFAULT_PRIME_BITS};
pub use crate::entropy::{EntropyError, EntropySource};
pub use crate::mpc::share::Share;
pub use crate::mpc::{ConfigError, SecretSharingScheme, ShamirPrimeField, SharingError};

use crate::entropy::os::OsEntropy;

/// The default field prime, `2^521 - 1`.
pub fn default_prime() -> BigUint {
    PrimeField::default().modulus().clone()
}

/// Splits `secret` into `total_shares` shares over GF(`prime`), any `threshold` of which
/// reconstruct it. Coefficients come from the operating system's CSPRNG.
///
/// Returns shares with x-coordinates `1..=total_shares`, in order.
pub fn generate_shares(
    secret: &BigUint,
    threshold: u32,
    total_shares: u32,
    prime: &BigUint,
) -> Result<Vec<Share>, SharingError> {
    generate_shares_with(secret, threshold, total_shares, prime, &mut OsEntropy::new())
}

/// Same as [`generate_shares`], drawing coefficients from a caller-supplied source.
pub fn generate_shares_with<R: EntropySource + ?Sized>(
    secret: &BigUint,
    threshold: u32,
    total_shares: u32,
    prime: &BigUint,
    rng: &mut R,
) -> Result<Vec<Share>, SharingError> {
    let field = PrimeField::new(prime.clone())?;
    mpc::quorum::split_secret(&field, secret, threshold, total_shares, rng)
}

/// Recovers the secret from a set of shares over GF(`prime`).
///
/// With fewer shares than the original threshold this returns an unrelated field
/// element rather than an error.
pub fn recover_secret(shares: &[Share], prime: &BigUint) -> Result<BigUint, SharingError> {
    let field = PrimeField::new(prime.clone())?;
    mpc::reconstruct::reconstruct_secret(&field, shares)
}
