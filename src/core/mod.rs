//! Arithmetic primitives.

pub mod field;

pub use field::{FieldError, PrimeField, DEFAULT_PRIME_BITS};
