//! Prime field arithmetic over arbitrary-precision integers.
//!
//! This module implements arithmetic in GF(p) for a caller-supplied modulus `p`.
//! Elements are `BigUint` values in `[0, p)`; every operation returns a value
//! normalized into that range.
//!
//! # Design Choices
//! - **Explicit Modulus**: The prime is carried by a `PrimeField` value and threaded
//!   through every call. There is no process-wide modulus.
//! - **Unchecked Primality**: `PrimeField::new` only rejects moduli below 2. A composite
//!   modulus silently breaks interpolation; primality is checked by
//!   `SharingConfig::validate`, not here.
//! - **Iterative Inversion**: Modular inverses use the extended Euclidean algorithm in a
//!   loop, so input size never affects stack depth.

use num_bigint_dig::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use thiserror::Error;

/// Bit length of the default prime, the Mersenne prime `2^521 - 1`.
pub const DEFAULT_PRIME_BITS: usize = 521;

/// Errors raised by field arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The modulus is 0 or 1.
    #[error("field modulus must be at least 2")]
    InvalidModulus,
    /// The denominator shares a factor with the modulus (or is zero modulo it).
    #[error("value has no multiplicative inverse modulo the field prime")]
    NoInverse,
}

/// The field of integers modulo a prime `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
}

impl Default for PrimeField {
    /// GF(2^521 - 1).
    fn default() -> Self {
        Self {
            modulus: (BigUint::one() << DEFAULT_PRIME_BITS) - BigUint::one(),
        }
    }
}

impl PrimeField {
    /// Creates a field with the given modulus.
    ///
    /// # Returns
    /// * `Err(FieldError::InvalidModulus)` if `modulus < 2`.
    pub fn new(modulus: BigUint) -> Result<Self, FieldError> {
        if modulus < BigUint::from(2u32) {
            return Err(FieldError::InvalidModulus);
        }
        Ok(Self { modulus })
    }

    /// Creates the field of order `2^exponent - 1`.
    ///
    /// The result is only a field when the exponent yields a Mersenne prime
    /// (e.g. 127, 521, 607).
    pub fn mersenne(exponent: usize) -> Result<Self, FieldError> {
        Self::new((BigUint::one() << exponent) - BigUint::one())
    }

    /// The field order `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> usize {
        self.modulus.bits()
    }

    /// Returns true if `value` is already a canonical element (`value < p`).
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Reduces a signed integer into `[0, p)`.
    pub fn reduce_signed(&self, value: &BigInt) -> BigUint {
        let p = BigInt::from_biguint(Sign::Plus, self.modulus.clone());
        let r = ((value % &p) + &p) % &p;
        // r is non-negative here, so the conversion cannot fail.
        r.to_biguint().unwrap_or_else(BigUint::zero)
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        (a + &self.modulus - b) % &self.modulus
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// Additive inverse `-a mod p`.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        (&self.modulus - self.reduce(a)) % &self.modulus
    }

    /// Multiplicative inverse of `value` via the extended Euclidean algorithm.
    ///
    /// # Returns
    /// * `Ok(v)` with `value * v ≡ 1 (mod p)` and `v` in `[0, p)`.
    /// * `Err(FieldError::NoInverse)` if `value ≡ 0` or `gcd(value, p) != 1`.
    pub fn inverse(&self, value: &BigUint) -> Result<BigUint, FieldError> {
        let a = self.reduce(value);
        if a.is_zero() {
            return Err(FieldError::NoInverse);
        }

        // Invariant: t_i * a ≡ r_i (mod p)
        let mut r0 = BigInt::from_biguint(Sign::Plus, self.modulus.clone());
        let mut r1 = BigInt::from_biguint(Sign::Plus, a);
        let mut t0 = BigInt::zero();
        let mut t1 = BigInt::one();

        while !r1.is_zero() {
            let q = &r0 / &r1;
            let r2 = &r0 - &q * &r1;
            r0 = std::mem::replace(&mut r1, r2);
            let t2 = &t0 - &q * &t1;
            t0 = std::mem::replace(&mut t1, t2);
        }

        if !r0.is_one() {
            return Err(FieldError::NoInverse);
        }
        Ok(self.reduce_signed(&t0))
    }

    /// Field division: returns `v` such that `den * v ≡ num (mod p)`.
    pub fn divide(&self, num: &BigUint, den: &BigUint) -> Result<BigUint, FieldError> {
        let inv = self.inverse(den)?;
        Ok(self.mul(num, &inv))
    }
}
