//! Real n-th roots of rationals.
//!
//! A [`Root`] stands for `radicand^(1/degree)` with a positive degree. The
//! constructor pulls exact prime-power roots out of the radicand, once for
//! each prime factor of the degree it was given. That pass is best-effort:
//! a radicand that only becomes a perfect power after an earlier reduction
//! is left alone, so two equal roots may be stored differently. Equality and
//! ordering therefore compare values, never the stored pair.
//!
//! Ordering compares signs first, then raises each radicand's magnitude to
//! the other's degree and compares those, reversed when both are negative.
//! A negative radicand counts as a negative value, which is the real root
//! for odd degrees (degree 1 included). Even roots of negative radicands
//! are not real and have no meaningful place in the order.

use num_traits::{One, Zero};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul};
use tracing::debug;

use crate::error::{NumericError, Result};
use crate::{Fraction, Integer};

/// The real root `radicand^(1/degree)`.
#[derive(Clone)]
pub struct Root {
    degree: Integer,
    radicand: Fraction,
}

impl Root {
    /// Creates `radicand^(1/degree)` and simplifies it.
    ///
    /// A negative degree is normalized by negating it and inverting the
    /// radicand.
    ///
    /// # Panics
    ///
    /// Panics if `degree` is zero, or if it is negative and `radicand` is zero.
    #[must_use]
    pub fn new(degree: Integer, radicand: Fraction) -> Self {
        match Self::try_new(degree, radicand) {
            Ok(root) => root,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates `radicand^(1/degree)`, reporting undefined roots as errors.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivideByZero`] for a zero degree, or for a
    /// negative degree over a zero radicand.
    pub fn try_new(degree: Integer, radicand: Fraction) -> Result<Self> {
        if degree.is_zero() {
            return Err(NumericError::divide_by_zero("zeroth root does not exist"));
        }
        let (degree, radicand) = if degree.is_negative() {
            debug!(%degree, %radicand, "normalizing negative root degree");
            (-degree, radicand.try_recip()?)
        } else {
            (degree, radicand)
        };
        Ok(Self::simplify(degree, radicand))
    }

    /// Extracts exact roots for each prime factor of the incoming degree.
    fn simplify(mut degree: Integer, radicand: Fraction) -> Self {
        let mut numerator = radicand.numerator().clone();
        let mut denominator = radicand.denominator().clone();

        let primes: Vec<Integer> = degree.prime_divisors().collect();
        for prime in primes {
            let Some(p) = prime.to_usize() else {
                continue;
            };
            let (Some(num_root), Some(den_root)) =
                (numerator.exact_root(p), denominator.exact_root(p))
            else {
                continue;
            };
            numerator = num_root;
            denominator = den_root;
            degree = degree.div_trunc(&prime);
            debug!(prime = p, %degree, "extracted exact root from radicand");
        }

        Self {
            degree,
            // Roots of a coprime pair stay coprime, and the denominator stays positive.
            radicand: Fraction::from_coprime(numerator, denominator),
        }
    }

    /// Returns the degree, always positive.
    #[must_use]
    pub fn degree(&self) -> &Integer {
        &self.degree
    }

    /// Returns the radicand.
    #[must_use]
    pub fn radicand(&self) -> &Fraction {
        &self.radicand
    }

    /// Returns `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if the radicand is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        Self::new(-&self.degree, self.radicand.clone())
    }

    /// Narrows to a fraction when the value is rational by shape.
    ///
    /// Succeeds for degree 1, radicands 0 and 1, and radicand -1 under an
    /// odd degree.
    #[must_use]
    pub fn try_to_fraction(&self) -> Option<Fraction> {
        let negative_one = -Fraction::one();
        if self.degree.is_one() || self.radicand.is_zero() || self.radicand.is_one() {
            Some(self.radicand.clone())
        } else if self.radicand == negative_one && self.degree.is_odd() {
            Some(negative_one)
        } else {
            None
        }
    }

    /// Narrows to an integer through [`Root::try_to_fraction`].
    #[must_use]
    pub fn try_to_integer(&self) -> Option<Integer> {
        self.try_to_fraction()?.try_to_integer()
    }

    /// Approximates the root as an `f64`.
    ///
    /// Even degrees give the positive root.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::TooBig`] if the degree or the radicand is not
    /// exactly representable as `f64`, and [`NumericError::NotReal`] for an
    /// even root of a negative radicand.
    pub fn to_f64(&self) -> Result<f64> {
        let too_big = NumericError::TooBig {
            operation: "floating-point root approximation",
        };
        let degree = self.degree.try_to_f64().ok_or_else(|| too_big.clone())?;
        let radicand = self.radicand.try_to_f64().ok_or(too_big)?;

        if radicand >= 0.0 {
            Ok(radicand.powf(degree.recip()))
        } else if self.degree.is_odd() {
            Ok(-(-radicand).powf(degree.recip()))
        } else {
            Err(NumericError::NotReal)
        }
    }

    /// Truncates the approximated root toward zero.
    ///
    /// # Errors
    ///
    /// Fails in the same cases as [`Root::to_f64`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncate_to_integer(&self) -> Result<Integer> {
        // |root| <= max(1, |radicand|) <= 2^53, so the cast cannot overflow.
        // Rounding in powf can still land on the next integer.
        Ok(Integer::new(self.to_f64()?.trunc() as i64))
    }

    /// Approximates the root as a `Decimal`.
    ///
    /// # Errors
    ///
    /// Fails in the same cases as [`Root::to_f64`].
    pub fn to_decimal_approximation(&self) -> Result<Decimal> {
        Decimal::from_f64(self.to_f64()?).ok_or(NumericError::TooBig {
            operation: "decimal root approximation",
        })
    }
}

impl PartialEq for Root {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Root {}

impl PartialOrd for Root {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Root {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.radicand.signum();
        match sign.cmp(&other.radicand.signum()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        // Both magnitudes raised to degree_a * degree_b.
        let lhs = self.radicand.abs().raise_to_integer(&other.degree);
        let rhs = other.radicand.abs().raise_to_integer(&self.degree);
        if sign < 0 {
            rhs.cmp(&lhs)
        } else {
            lhs.cmp(&rhs)
        }
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Root({}, {})", self.degree, self.radicand)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_to_fraction() {
            Some(value) => fmt::Display::fmt(&value, f),
            None => f.pad(&format!("({})^(1/{})", self.radicand, self.degree)),
        }
    }
}

/// Common-index product: `a^(1/m) * b^(1/n) = (a^n * b^m)^(1/(m*n))`.
impl Mul for &Root {
    type Output = Root;

    fn mul(self, rhs: Self) -> Self::Output {
        let radicand = self.radicand.raise_to_integer(&rhs.degree)
            * rhs.radicand.raise_to_integer(&self.degree);
        Root::new(&self.degree * &rhs.degree, radicand)
    }
}

impl Mul for Root {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

/// Multiplication by the reciprocal root.
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl Div for &Root {
    type Output = Root;

    fn div(self, rhs: Self) -> Self::Output {
        self * &rhs.recip()
    }
}

impl Div for Root {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl From<Fraction> for Root {
    fn from(radicand: Fraction) -> Self {
        Self {
            degree: Integer::one(),
            radicand,
        }
    }
}

impl From<Integer> for Root {
    fn from(n: Integer) -> Self {
        Self::from(Fraction::from_integer(n))
    }
}

impl TryFrom<Root> for Fraction {
    type Error = NumericError;

    fn try_from(value: Root) -> Result<Self> {
        value.try_to_fraction().ok_or(NumericError::invalid_cast(
            "Root",
            "Fraction",
            "degree is not 1 and the radicand is not 0, 1, or -1 under an odd degree",
        ))
    }
}

impl TryFrom<Root> for Integer {
    type Error = NumericError;

    fn try_from(value: Root) -> Result<Self> {
        Integer::try_from(Fraction::try_from(value)?)
    }
}
