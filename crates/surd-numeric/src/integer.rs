//! Arbitrary precision integers.
//!
//! This module wraps `dashu::IBig` and adds the pieces the rest of the
//! tower leans on: exact roots, prime factorization, exponentiation that
//! promotes into [`Fraction`] and [`Root`], and range-gated narrowing casts.

use dashu::base::{Abs, BitTest, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;
use tracing::warn;

use crate::error::{NumericError, Result};
use crate::primes::PrimeDivisors;
use crate::{Fraction, Root};

/// Largest magnitude an `f64` round-trips exactly (2^53).
const MAX_EXACT_F64: i64 = 1 << 53;

/// An arbitrary precision integer.
///
/// `%` truncates toward zero, so the remainder takes the sign of the
/// dividend. `/` is not integer-closed and produces a [`Fraction`]; use
/// [`Integer::div_trunc`] for a truncating integer quotient.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(
        s: &str,
        radix: u32,
    ) -> std::result::Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Returns true if this integer is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        // dashu gives zero a positive sign.
        self.signum() > 0
    }

    /// Returns true if this integer is divisible by two.
    #[must_use]
    pub fn is_even(&self) -> bool {
        (&self.0 % IBig::from(2u8)).is_zero()
    }

    /// Returns true if this integer is not divisible by two.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Returns `self + 1`.
    #[must_use]
    pub fn succ(&self) -> Self {
        Self(&self.0 + IBig::ONE)
    }

    /// Returns `self - 1`.
    #[must_use]
    pub fn pred(&self) -> Self {
        Self(&self.0 - IBig::ONE)
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Quotient rounded toward zero.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_trunc(&self, divisor: &Self) -> Self {
        assert!(!divisor.is_zero(), "division by zero: integer quotient");
        Self(&self.0 / &divisor.0)
    }

    /// Computes the greatest common divisor of the absolute values.
    ///
    /// `gcd(0, n) == |n|` and `gcd(0, 0) == 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Computes the least common multiple, `|a * b| / gcd(a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivideByZero`] if either operand is zero,
    /// since the gcd in the formula's denominator is then undefined for
    /// the pair.
    pub fn lcm(&self, other: &Self) -> Result<Self> {
        if self.is_zero() || other.is_zero() {
            return Err(NumericError::divide_by_zero("least common multiple of zero"));
        }
        let g = self.gcd(other);
        Ok(Self(&self.0 / &g.0 * &other.0).abs())
    }

    /// Returns the prime factors of `self` with multiplicity, in ascending order.
    ///
    /// The iterator is lazy and can be cloned to restart it. Values below two
    /// have no prime factors and yield nothing.
    #[must_use]
    pub fn prime_divisors(&self) -> PrimeDivisors {
        PrimeDivisors::new(self.clone())
    }

    /// Returns the exact integer `n`-th root, if one exists.
    ///
    /// Negative values have a root only for odd `n`.
    #[must_use]
    pub fn exact_root(&self, n: usize) -> Option<Self> {
        match n {
            0 => return None,
            1 => return Some(self.clone()),
            _ => {}
        }
        if self.is_negative() {
            if n % 2 == 0 {
                return None;
            }
            return self.abs().exact_root(n).map(|r| -r);
        }
        if self.is_zero() || self.is_one() {
            return Some(self.clone());
        }
        // 2^n already exceeds anything with at most n bits.
        let bits = self.bit_len();
        if n >= bits {
            return None;
        }

        let root = self.floor_root(n, bits);
        (root.0.pow(n) == self.0).then_some(root)
    }

    /// Newton iteration for `floor(self^(1/n))`, started above the root.
    fn floor_root(&self, n: usize, bits: usize) -> Self {
        let degree = IBig::from(n);
        let lower = IBig::from(n - 1);
        let mut x = IBig::from(2u8).pow(bits.div_ceil(n));
        loop {
            let y = (&lower * &x + &self.0 / x.pow(n - 1)) / &degree;
            if y >= x {
                return Self(x);
            }
            x = y;
        }
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: usize) -> Self {
        Self(self.0.pow(exp))
    }

    /// `self^magnitude` for a non-negative exponent of any size.
    ///
    /// Exponents that do not fit a `usize` fall back to repeated
    /// multiplication; only trivial bases finish in that regime.
    pub(crate) fn pow_magnitude(&self, magnitude: &Self) -> Self {
        if let Some(exp) = magnitude.to_usize() {
            return self.pow(exp);
        }
        if self.is_zero() || self.is_one() {
            return self.clone();
        }
        warn!(
            exponent_bits = magnitude.bit_len(),
            "exponent exceeds usize, falling back to repeated multiplication"
        );
        let mut acc = Self::one();
        let mut count = Self::zero();
        while &count < magnitude {
            acc = acc * self;
            count = count.succ();
        }
        acc
    }

    /// Raises to an integer power, promoting into a [`Fraction`].
    ///
    /// `x^0 == 1` for every `x` including zero, and negative exponents
    /// produce the reciprocal of the power.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero and `exponent` is negative.
    #[must_use]
    pub fn raise_to_integer(&self, exponent: &Self) -> Fraction {
        if exponent.is_zero() || self.is_one() {
            return Fraction::one();
        }
        if *self == -Self::one() {
            return if exponent.is_even() {
                Fraction::one()
            } else {
                -Fraction::one()
            };
        }

        let power = self.pow_magnitude(&exponent.abs());
        if exponent.is_negative() {
            Fraction::new(Self::one(), power)
        } else {
            Fraction::from_integer(power)
        }
    }

    /// Raises to a rational power, promoting into a [`Root`].
    ///
    /// Integral exponents give a degree-1 root; otherwise the result is
    /// `(self^numerator)^(1/denominator)`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero and `exponent` is negative.
    #[must_use]
    pub fn raise_to_rational(&self, exponent: &Fraction) -> Root {
        let radicand = self.raise_to_integer(exponent.numerator());
        if exponent.is_integer() {
            Root::from(radicand)
        } else {
            Root::new(exponent.denominator().clone(), radicand)
        }
    }

    /// Promotes to a fraction with denominator one.
    #[must_use]
    pub fn to_fraction(&self) -> Fraction {
        Fraction::from_integer(self.clone())
    }

    /// Promotes to a degree-1 root.
    #[must_use]
    pub fn to_root(&self) -> Root {
        Root::from(self.to_fraction())
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    pub(crate) fn to_usize(&self) -> Option<usize> {
        self.0.clone().try_into().ok()
    }

    /// Attempts to convert to a `Decimal` without loss.
    ///
    /// Returns `None` outside the 96-bit decimal mantissa range.
    #[must_use]
    pub fn try_to_decimal(&self) -> Option<Decimal> {
        let wide: i128 = self.0.clone().try_into().ok()?;
        Decimal::try_from_i128_with_scale(wide, 0).ok()
    }

    /// Attempts to convert to an `f64`.
    ///
    /// Succeeds only within ±2^53, where every integer survives the
    /// round trip through `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn try_to_f64(&self) -> Option<f64> {
        let value = self.to_i64()?;
        (-MAX_EXACT_F64..=MAX_EXACT_F64)
            .contains(&value)
            .then_some(value as f64)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

impl FromStr for Integer {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

/// Exact division, always producing a reduced [`Fraction`].
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl Div for Integer {
    type Output = Fraction;

    fn div(self, rhs: Self) -> Self::Output {
        Fraction::new(self, rhs)
    }
}

impl Div for &Integer {
    type Output = Fraction;

    fn div(self, rhs: Self) -> Self::Output {
        Fraction::new(self.clone(), rhs.clone())
    }
}

impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0 % rhs.0)
    }
}

impl Rem for &Integer {
    type Output = Integer;

    fn rem(self, rhs: Self) -> Self::Output {
        Integer(&self.0 % &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl TryFrom<&Integer> for i64 {
    type Error = NumericError;

    fn try_from(value: &Integer) -> Result<Self> {
        value
            .to_i64()
            .ok_or(NumericError::invalid_cast("Integer", "i64", "value is outside the i64 range"))
    }
}
