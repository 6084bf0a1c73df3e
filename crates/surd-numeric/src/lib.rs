//! # surd-numeric
//!
//! An exact numeric tower: integers, fractions, and real roots of fractions.
//!
//! This crate provides:
//! - Arbitrary precision integers (`Integer`), backed by `dashu`
//! - Canonical rationals (`Fraction`), always reduced with a positive denominator
//! - Roots of rationals (`Root`), simplified by prime-power extraction
//!
//! ## Promotion
//!
//! Values only move up the tower on their own: `Integer / Integer` is a
//! `Fraction`, and a rational exponent turns a `Fraction` into a `Root`.
//! Moving down is always explicit, through `try_to_*` (returns `Option`)
//! or `TryFrom` (returns [`NumericError::InvalidCast`]).
//!
//! ```
//! use surd_numeric::{Fraction, Integer, Root};
//!
//! let sqrt2 = Integer::new(2).raise_to_rational(&Fraction::from_i64(1, 2));
//! let sqrt8 = Root::new(Integer::new(2), Fraction::from(8));
//! assert_eq!((sqrt2 * sqrt8).try_to_integer(), Some(Integer::new(4)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fraction;
pub mod integer;
pub mod primes;
pub mod root;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod proptests;

pub use error::NumericError;
pub use fraction::{Fraction, ParseFractionError};
pub use integer::Integer;
pub use primes::PrimeDivisors;
pub use root::Root;
