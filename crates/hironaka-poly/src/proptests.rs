//! Property-based tests for sparse polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::{div_exact, gcd};
    use crate::monomial::Monomial;
    use crate::ordering::MonomialOrder;
    use crate::sparse::SparsePoly;
    use hironaka_rings::rationals::Q;

    const VARS: usize = 3;

    // Small integer coefficients keep the intermediate expressions tame.
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-9i64..=9i64).prop_map(Q::from_integer)
    }

    fn small_term() -> impl Strategy<Value = (Monomial, Q)> {
        (proptest::collection::vec(0u32..=2, VARS), small_coeff())
            .prop_map(|(exps, c)| (Monomial::from_exponents(&exps), c))
    }

    // Up to four terms in three variables, each exponent at most 2.
    fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec(small_term(), 0..=4)
            .prop_map(|terms| SparsePoly::new(terms, VARS, MonomialOrder::Grevlex))
    }

    fn nonzero_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Affine images keep compositions small.
    fn affine_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec(small_coeff(), VARS + 1).prop_map(|c| {
            (0..VARS).fold(SparsePoly::constant(c[VARS].clone(), VARS, MonomialOrder::Grevlex), |acc, i| {
                acc.add(&var(i).scale(&c[i]))
            })
        })
    }

    fn var(i: usize) -> SparsePoly<Q> {
        SparsePoly::var(i, VARS, MonomialOrder::Grevlex)
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn derivative_product_rule(a in small_poly(), b in small_poly(), i in 0..VARS) {
            let left = a.mul(&b).derivative(i);
            let right = a.derivative(i).mul(&b).add(&a.mul(&b.derivative(i)));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn compose_with_identity(a in small_poly()) {
            let identity: Vec<_> = (0..VARS).map(var).collect();
            prop_assert_eq!(a.compose(&identity), a);
        }

        #[test]
        fn compose_is_a_ring_map(a in small_poly(), b in small_poly(), images in proptest::collection::vec(affine_poly(), VARS)) {
            prop_assert_eq!(
                a.mul(&b).compose(&images),
                a.compose(&images).mul(&b.compose(&images))
            );
            prop_assert_eq!(
                a.add(&b).compose(&images),
                a.compose(&images).add(&b.compose(&images))
            );
        }

        #[test]
        fn blowup_pullback_has_monomial_factor(a in nonzero_poly(), i in 0..VARS) {
            // Under x_j -> x_i * x_j (j != i), a term of degree d picks up x_i^d,
            // so the pullback is divisible by x_i^(lowest total degree).
            let images: Vec<_> = (0..VARS)
                .map(|j| if j == i { var(i) } else { var(i).mul(&var(j)) })
                .collect();
            let pulled = a.compose(&images);
            let order = a.terms().iter().map(|(m, _)| m.total_degree()).min().unwrap_or(0);
            prop_assert!(pulled.monomial_content().exponent(i) >= order);
        }

        #[test]
        fn div_exact_recovers_factor(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!(div_exact(&a.mul(&b), &b), Some(a));
        }

        #[test]
        fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly(), c in nonzero_poly()) {
            let (ac, bc) = (a.mul(&c), b.mul(&c));
            let g = gcd(&ac, &bc);
            prop_assert!(div_exact(&ac, &g).is_some());
            prop_assert!(div_exact(&bc, &g).is_some());
            // The common factor c survives in the gcd.
            prop_assert!(div_exact(&g, &gcd(&c, &c)).is_some());
        }
    }
}
