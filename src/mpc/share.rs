//! Secret Share Definition.
//!
//! A share is a point $(x, y)$ on the polynomial used to hide the secret.
//! - $x$ (identifier): A non-zero integer unique to each custodian.
//! - $y$ (value): The evaluation of the polynomial at $x$, reduced mod $p$.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe the value from memory.
//! - `Debug` implementation redacts the actual value.

use std::fmt;

use num_bigint_dig::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ConfigError;

/// A share of a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// The x-coordinate. Public information (who owns the share).
    #[zeroize(skip)]
    pub x: u32,

    /// The y-coordinate. Highly sensitive information.
    pub y: BigUint,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x)
            .field("y", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a new share with validation.
    ///
    /// # Returns
    /// * `Err(ConfigError::ZeroPoint)` if `x == 0`.
    pub fn new(x: u32, y: BigUint) -> Result<Self, ConfigError> {
        if x == 0 {
            return Err(ConfigError::ZeroPoint);
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Copies the share out as a plain `(x, y)` pair.
    pub fn to_pair(&self) -> (u32, BigUint) {
        (self.x, self.y.clone())
    }
}

impl TryFrom<(u32, BigUint)> for Share {
    type Error = ConfigError;

    fn try_from((x, y): (u32, BigUint)) -> Result<Self, Self::Error> {
        Share::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_creation() {
        let s = Share::new(1, BigUint::from(10u32)).unwrap();
        assert_eq!(s.x(), 1);
        assert_eq!(s.y(), &BigUint::from(10u32));
        assert_eq!(s.to_pair(), (1, BigUint::from(10u32)));
    }

    #[test]
    fn test_share_validation() {
        assert_eq!(Share::new(0, BigUint::from(1u32)), Err(ConfigError::ZeroPoint));
        assert_eq!(
            Share::try_from((0, BigUint::from(1u32))),
            Err(ConfigError::ZeroPoint)
        );
        assert!(Share::try_from((7, BigUint::from(1u32))).is_ok());
    }

    #[test]
    fn test_debug_redaction() {
        let s = Share::new(5, BigUint::from(737373u32)).unwrap();
        let debug_str = format!("{:?}", s);
        assert!(debug_str.contains("x: 5"));
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(!debug_str.contains("737373"));
    }
}
