//! Property-based tests for the numeric tower.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Fraction, Integer, Root};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::from_i64(n, d))
    }

    fn positive_fraction() -> impl Strategy<Value = Fraction> {
        (1i64..200i64, 1i64..200i64).prop_map(|(n, d)| Fraction::from_i64(n, d))
    }

    fn is_canonical(f: &Fraction) -> bool {
        if f.numerator().is_zero() {
            return f.denominator().is_one();
        }
        f.denominator().is_positive() && f.numerator().gcd(f.denominator()).is_one()
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn integer_truncating_division(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.div_trunc(&b);
            let r = &a % &b;
            prop_assert_eq!(&q * &b + r.clone(), a.clone());
            prop_assert!(r.is_zero() || r.signum() == a.signum());
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            // g should divide both a and b
            prop_assert!((a.clone() % g.clone()).is_zero());
            prop_assert!((b.clone() % g.clone()).is_zero());
        }

        #[test]
        fn gcd_lcm_product(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let lcm = a.lcm(&b).unwrap();
            prop_assert_eq!((&a * &b).abs(), a.gcd(&b) * lcm);
        }

        #[test]
        fn prime_divisors_multiply_back(n in 1i64..100_000i64) {
            let n = Integer::new(n);
            let factors: Vec<Integer> = n.prime_divisors().collect();
            prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
            let product = factors.into_iter().fold(Integer::one(), |acc, p| acc * p);
            prop_assert_eq!(product, n);
        }

        #[test]
        fn exact_root_inverts_pow(base in -500i64..500i64, n in 1usize..6usize) {
            let base = Integer::new(base);
            let power = base.pow(n);
            let root = power.exact_root(n).unwrap();
            // Even roots come back positive.
            prop_assert_eq!(root.abs(), base.abs());
            prop_assert_eq!(root.pow(n), power);
        }

        // Fraction invariants and field axioms

        #[test]
        fn fraction_always_canonical(a in fraction(), b in fraction()) {
            prop_assert!(is_canonical(&a));
            prop_assert!(is_canonical(&(&a + &b)));
            prop_assert!(is_canonical(&(&a - &b)));
            prop_assert!(is_canonical(&(&a * &b)));
            if !b.is_zero() {
                prop_assert!(is_canonical(&(&a / &b)));
                prop_assert!(is_canonical(&b.recip()));
            }
        }

        #[test]
        fn fraction_recanonicalize_is_noop(a in fraction()) {
            let again = Fraction::new(a.numerator().clone(), a.denominator().clone());
            prop_assert_eq!(again, a);
        }

        #[test]
        fn fraction_distributive(a in fraction(), b in fraction(), c in fraction()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn fraction_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Fraction::from_i64(num, den);
            prop_assert!((a.clone() * a.recip()).is_one());
        }

        #[test]
        fn fraction_order_matches_difference(a in fraction(), b in fraction()) {
            let diff = &a - &b;
            prop_assert_eq!(a.cmp(&b), diff.signum().cmp(&0));
        }

        #[test]
        fn divide_remainder_recombines(a in fraction()) {
            let (quotient, remainder) = a.divide_remainder();
            prop_assert_eq!(Fraction::from_integer(quotient) + remainder.clone(), a.clone());
            prop_assert!(remainder.abs() < Fraction::one());
            prop_assert!(remainder.is_zero() || remainder.signum() == a.signum());
        }

        #[test]
        fn fraction_pow_adds_exponents(a in fraction(), m in -4i64..4i64, n in -4i64..4i64) {
            prop_assume!(!a.is_zero());
            let m = Integer::new(m);
            let n = Integer::new(n);
            prop_assert_eq!(
                a.raise_to_integer(&m) * a.raise_to_integer(&n),
                a.raise_to_integer(&(&m + &n))
            );
        }

        // Root properties

        #[test]
        fn root_of_power_collapses(base in positive_fraction(), degree in 1i64..7i64) {
            let degree = Integer::new(degree);
            let root = Root::new(degree.clone(), base.raise_to_integer(&degree));
            prop_assert_eq!(root.try_to_fraction(), Some(base));
        }

        #[test]
        fn root_recanonicalize_is_noop(radicand in positive_fraction(), degree in 1i64..13i64) {
            let root = Root::new(Integer::new(degree), radicand);
            let again = Root::new(root.degree().clone(), root.radicand().clone());
            prop_assert_eq!(again.degree(), root.degree());
            prop_assert_eq!(again.radicand(), root.radicand());
        }

        #[test]
        fn root_order_agrees_with_floats(
            a in positive_fraction(),
            b in positive_fraction(),
            m in 1i64..5i64,
            n in 1i64..5i64
        ) {
            let x = Root::new(Integer::new(m), a);
            let y = Root::new(Integer::new(n), b);
            let (fx, fy) = (x.to_f64().unwrap(), y.to_f64().unwrap());
            if (fx - fy).abs() > 1e-9 {
                prop_assert_eq!(x < y, fx < fy);
            }
        }

        #[test]
        fn root_division_undoes_multiplication(
            a in positive_fraction(),
            b in positive_fraction(),
            m in 1i64..4i64,
            n in 1i64..4i64
        ) {
            let x = Root::new(Integer::new(m), a);
            let y = Root::new(Integer::new(n), b);
            prop_assert_eq!(&(&x * &y) / &y, x);
        }
    }
}
