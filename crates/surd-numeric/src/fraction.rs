//! Exact rational numbers.
//!
//! A [`Fraction`] is always stored in lowest terms with a positive
//! denominator, and zero is always `0/1`. Every constructor re-derives that
//! form, so structural equality is value equality.

use num_traits::{One, Zero};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::{NumericError, Result};
use crate::{Integer, Root};

/// An arbitrary precision rational number in canonical form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: Integer,
    denominator: Integer,
}

impl Fraction {
    /// Creates a new fraction from numerator and denominator, reducing it.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "division by zero: fraction denominator");
        Self::reduce(numerator, denominator)
    }

    /// Creates a new fraction, reporting a zero denominator as an error.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivideByZero`] if the denominator is zero.
    pub fn try_new(numerator: Integer, denominator: Integer) -> Result<Self> {
        if denominator.is_zero() {
            return Err(NumericError::divide_by_zero("fraction denominator"));
        }
        Ok(Self::reduce(numerator, denominator))
    }

    /// Creates a fraction from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Creates a fraction from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self {
            numerator: n,
            denominator: Integer::one(),
        }
    }

    fn reduce(numerator: Integer, denominator: Integer) -> Self {
        if numerator.is_zero() {
            return Self::zero();
        }
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let g = numerator.gcd(&denominator);
        Self {
            numerator: numerator.div_trunc(&g),
            denominator: denominator.div_trunc(&g),
        }
    }

    /// Builds from a pair already known to be coprime, skipping the gcd.
    ///
    /// The sign is still normalized since the pair may come from a swap.
    pub(crate) fn from_coprime(numerator: Integer, denominator: Integer) -> Self {
        debug_assert!(!denominator.is_zero());
        if numerator.is_zero() {
            return Self::zero();
        }
        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Returns the denominator, always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// Returns true if this fraction is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn try_to_integer(&self) -> Option<Integer> {
        self.is_integer().then(|| self.numerator.clone())
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the fraction is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "division by zero: reciprocal of zero");
        Self::from_coprime(self.denominator.clone(), self.numerator.clone())
    }

    /// Returns the reciprocal, reporting zero as an error.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivideByZero`] if the fraction is zero.
    pub fn try_recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(NumericError::divide_by_zero("reciprocal of zero"));
        }
        Ok(Self::from_coprime(self.denominator.clone(), self.numerator.clone()))
    }

    /// Raises to an integer power.
    ///
    /// Numerator and denominator are raised independently, so the result
    /// stays reduced; a negative exponent inverts the pair.
    ///
    /// # Panics
    ///
    /// Panics if the fraction is zero and `exponent` is negative.
    #[must_use]
    pub fn raise_to_integer(&self, exponent: &Integer) -> Self {
        if exponent.is_zero() || self.is_one() {
            return Self::one();
        }
        if *self == -Self::one() {
            return if exponent.is_even() { Self::one() } else { -Self::one() };
        }

        let magnitude = exponent.abs();
        let numerator = self.numerator.pow_magnitude(&magnitude);
        let denominator = self.denominator.pow_magnitude(&magnitude);
        if exponent.is_negative() {
            assert!(!numerator.is_zero(), "division by zero: negative power of zero");
            Self::from_coprime(denominator, numerator)
        } else {
            Self::from_coprime(numerator, denominator)
        }
    }

    /// Raises to a rational power, promoting into a [`Root`].
    ///
    /// # Panics
    ///
    /// Panics if the fraction is zero and `exponent` is negative.
    #[must_use]
    pub fn raise_to_rational(&self, exponent: &Self) -> Root {
        let radicand = self.raise_to_integer(&exponent.numerator);
        if exponent.is_integer() {
            Root::from(radicand)
        } else {
            Root::new(exponent.denominator.clone(), radicand)
        }
    }

    /// Promotes to a degree-1 root.
    #[must_use]
    pub fn to_root(&self) -> Root {
        Root::from(self.clone())
    }

    /// Splits into an integer part and a fractional part.
    ///
    /// `quotient + remainder == self`, `|remainder| < 1`, and the remainder
    /// carries the sign of `self` (truncating division).
    #[must_use]
    pub fn divide_remainder(&self) -> (Integer, Self) {
        if self.is_negative() {
            let (quotient, remainder) = (-self).divide_remainder();
            return (-quotient, -remainder);
        }
        let quotient = self.numerator.div_trunc(&self.denominator);
        let rest = &self.numerator % &self.denominator;
        // gcd(n mod d, d) == gcd(n, d) == 1
        (quotient, Self::from_coprime(rest, self.denominator.clone()))
    }

    /// Approximates as a `Decimal`.
    ///
    /// Returns `None` if the integer part, the remainder's numerator or its
    /// denominator does not fit a decimal, or if the result overflows.
    #[must_use]
    pub fn try_to_decimal(&self) -> Option<Decimal> {
        let (quotient, remainder) = self.divide_remainder();
        let whole = quotient.try_to_decimal()?;
        let numerator = remainder.numerator.try_to_decimal()?;
        let denominator = remainder.denominator.try_to_decimal()?;
        whole.checked_add(numerator.checked_div(denominator)?)
    }

    /// Approximates as an `f64`.
    ///
    /// Returns `None` unless the integer part and both halves of the
    /// remainder are exactly representable.
    #[must_use]
    pub fn try_to_f64(&self) -> Option<f64> {
        let (quotient, remainder) = self.divide_remainder();
        let whole = quotient.try_to_f64()?;
        let numerator = remainder.numerator.try_to_f64()?;
        let denominator = remainder.denominator.try_to_f64()?;
        Some(whole + numerator / denominator)
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            f.pad(&self.numerator.to_string())
        } else {
            f.pad(&format!("{}/{}", self.numerator, self.denominator))
        }
    }
}

/// Error parsing a [`Fraction`] from `"N"` or `"N/D"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseFractionError {
    /// A numerator or denominator was not an integer.
    #[error("invalid integer in fraction: {0:?}")]
    InvalidInteger(String),
    /// The denominator was zero.
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<Integer>()
                .map_err(|_| ParseFractionError::InvalidInteger(part.to_string()))
        };
        match s.split_once('/') {
            Some((numerator, denominator)) => {
                Ok(Self::try_new(parse(numerator)?, parse(denominator)?)?)
            }
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}

// Arithmetic operations
impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Self::Output {
        Fraction::reduce(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Fraction> for Fraction {
    type Output = Self;

    fn add(self, rhs: &Fraction) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Self) -> Self::Output {
        Fraction::reduce(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Fraction> for Fraction {
    type Output = Self;

    fn sub(self, rhs: &Fraction) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Self::Output {
        Fraction::reduce(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Fraction> for Fraction {
    type Output = Self;

    fn mul(self, rhs: &Fraction) -> Self::Output {
        &self * rhs
    }
}

/// Multiplication by the reciprocal.
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl Div for &Fraction {
    type Output = Fraction;

    fn div(self, rhs: Self) -> Self::Output {
        self * &rhs.recip()
    }
}

impl Div for Fraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Fraction> for Fraction {
    type Output = Self;

    fn div(self, rhs: &Fraction) -> Self::Output {
        &self / rhs
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        Fraction {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl From<Integer> for Fraction {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_integer(Integer::from(n))
    }
}

impl TryFrom<Fraction> for Integer {
    type Error = NumericError;

    fn try_from(value: Fraction) -> Result<Self> {
        if value.is_integer() {
            Ok(value.numerator)
        } else {
            Err(NumericError::invalid_cast(
                "Fraction",
                "Integer",
                "denominator is not 1",
            ))
        }
    }
}
