//! Prime factorization by trial division.
//!
//! Candidates are 2, 3 and 5, then every number coprime to 30 starting at 7,
//! generated by the wheel increments below.

use num_traits::{One, Zero};

use crate::Integer;

/// Steps between successive candidates coprime to 2, 3 and 5, starting at 7.
const WHEEL: [i64; 8] = [4, 2, 4, 2, 4, 6, 2, 6];

/// Lazy iterator over the prime factors of an integer, with multiplicity.
///
/// Created by [`Integer::prime_divisors`]. Factors come out in ascending
/// order and their product is the original value. Clone it to replay the
/// sequence from the current position.
#[derive(Clone, Debug)]
pub struct PrimeDivisors {
    remaining: Integer,
    candidate: Integer,
    /// Next wheel step, or `None` while still trying 2, 3 and 5.
    wheel: Option<usize>,
}

impl PrimeDivisors {
    pub(crate) fn new(value: Integer) -> Self {
        Self {
            remaining: value,
            candidate: Integer::new(2),
            wheel: None,
        }
    }

    fn advance(&mut self) {
        match self.wheel {
            None => {
                self.candidate = match self.candidate.to_i64() {
                    Some(2) => Integer::new(3),
                    Some(3) => Integer::new(5),
                    _ => {
                        self.wheel = Some(0);
                        Integer::new(7)
                    }
                };
            }
            Some(step) => {
                self.candidate = &self.candidate + &Integer::new(WHEEL[step]);
                self.wheel = Some((step + 1) % WHEEL.len());
            }
        }
    }
}

impl Iterator for PrimeDivisors {
    type Item = Integer;

    fn next(&mut self) -> Option<Integer> {
        if self.remaining <= Integer::one() {
            return None;
        }

        while &self.candidate * &self.candidate <= self.remaining {
            if (&self.remaining % &self.candidate).is_zero() {
                self.remaining = self.remaining.div_trunc(&self.candidate);
                return Some(self.candidate.clone());
            }
            self.advance();
        }

        // What is left has no divisor up to its square root.
        Some(std::mem::replace(&mut self.remaining, Integer::one()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(n: i64) -> Vec<i64> {
        Integer::new(n)
            .prime_divisors()
            .map(|p| p.to_i64().unwrap())
            .collect()
    }

    #[test]
    fn test_small_factorizations() {
        assert_eq!(factors(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(factors(97), vec![97]);
        assert_eq!(factors(49), vec![7, 7]);
        assert_eq!(factors(2 * 11 * 13 * 13), vec![2, 11, 13, 13]);
        assert_eq!(factors(1), Vec::<i64>::new());
    }

    #[test]
    fn test_wheel_reaches_large_primes() {
        // 1_000_003 and 999_983 are both prime.
        assert_eq!(factors(1_000_003 * 999_983), vec![999_983, 1_000_003]);
        assert_eq!(factors(221), vec![13, 17]);
        assert_eq!(factors(31 * 37 * 41), vec![31, 37, 41]);
    }

    #[test]
    fn test_non_positive_yields_nothing() {
        assert!(factors(0).is_empty());
        assert!(factors(-12).is_empty());
    }

    #[test]
    fn test_restartable() {
        let n = Integer::new(84);
        let first: Vec<_> = n.prime_divisors().collect();
        let second: Vec<_> = n.prime_divisors().collect();
        assert_eq!(first, second);

        let mut iter = n.prime_divisors();
        iter.next();
        let replay = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }
}
