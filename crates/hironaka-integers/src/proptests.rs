//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn gcd_divides_both(a in small_int(), b in small_int()) {
            let (a, b) = (Integer::new(a), Integer::new(b));
            let g = a.gcd(&b);
            prop_assume!(!g.is_zero());
            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn gcd_times_lcm_is_product(a in non_zero_int(), b in non_zero_int()) {
            let (a, b) = (Integer::new(a), Integer::new(b));
            prop_assert_eq!(a.gcd(&b) * a.lcm(&b), (a * b).abs());
        }

        #[test]
        fn rational_lowest_terms(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(r.numerator().gcd(&r.denominator()).is_one() || r.is_zero());
        }

        #[test]
        fn rational_mul_inverse(n in non_zero_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            prop_assert!((r.clone() * r.recip()).is_one());
        }

        #[test]
        fn rational_order_matches_difference_sign(
            a in small_int(), b in non_zero_int(), c in small_int(), d in non_zero_int()
        ) {
            let lhs = Rational::from_i64(a, b);
            let rhs = Rational::from_i64(c, d);
            let diff = lhs.clone() - rhs.clone();
            prop_assert_eq!(lhs < rhs, diff.is_negative());
        }
    }
}
