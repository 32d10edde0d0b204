//! Property-based tests for factorization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::multivariate::factor;
    use crate::squarefree::squarefree_factorization;
    use hironaka_poly::{Monomial, MonomialOrder, SparsePoly};
    use hironaka_rings::rationals::Q;

    const VARS: usize = 3;

    fn small_coeff() -> impl Strategy<Value = Q> {
        prop_oneof![(-5i64..=-1i64), (1i64..=5i64)].prop_map(Q::from_integer)
    }

    // Up to three terms, each exponent at most 2.
    fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        let term = (proptest::collection::vec(0u32..=2, VARS), small_coeff())
            .prop_map(|(exps, c)| (Monomial::from_exponents(&exps), c));
        proptest::collection::vec(term, 1..=3)
            .prop_map(|terms| SparsePoly::new(terms, VARS, MonomialOrder::Grevlex))
            .prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // c_0*x + c_1*y + c_2*z + c_3 with some variable present.
    fn linear_form() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec(-3i64..=3, VARS + 1)
            .prop_filter("form must involve a variable", |c| c[..VARS].iter().any(|&x| x != 0))
            .prop_map(|c| {
                let mut terms: Vec<(Monomial, Q)> = (0..VARS)
                    .map(|i| (Monomial::var(i, VARS), Q::from_integer(c[i])))
                    .collect();
                terms.push((Monomial::one(VARS), Q::from_integer(c[VARS])));
                SparsePoly::new(terms, VARS, MonomialOrder::Grevlex)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn factor_expands_to_input(a in small_poly(), b in small_poly()) {
            let f = a.mul(&b);
            prop_assert_eq!(factor(&f).expand(), f);
        }

        #[test]
        fn squarefree_expands_to_input(a in small_poly(), b in small_poly()) {
            let f = a.mul(&b.pow(2));
            prop_assert_eq!(squarefree_factorization(&f).to_polynomial(VARS), f);
        }

        #[test]
        fn squared_factor_has_multiplicity_two(a in small_poly()) {
            prop_assume!(!a.is_constant());
            let fac = factor(&a.pow(2));
            prop_assert!(fac.factors.iter().all(|f| f.multiplicity % 2 == 0));
        }

        #[test]
        fn products_of_linear_forms_split_completely(
            forms in proptest::collection::vec(linear_form(), 2..=3),
        ) {
            let f = forms.iter().fold(
                SparsePoly::one(VARS, MonomialOrder::Grevlex),
                |acc, l| acc.mul(l),
            );
            let fac = factor(&f);
            prop_assert!(fac.factors.iter().all(|g| g.poly.total_degree() == 1 && g.irreducible));
            let degree: u32 = fac.factors.iter().map(|g| g.multiplicity).sum();
            prop_assert_eq!(degree, f.total_degree());
            prop_assert_eq!(fac.expand(), f);
        }

        #[test]
        fn coordinate_factors_match_monomial_content(a in small_poly()) {
            let fac = factor(&a);
            let content = a.monomial_content();
            for (i, e) in fac.coordinate_factors() {
                prop_assert_eq!(content.exponent(i), e);
            }
            prop_assert_eq!(
                fac.coordinate_factors().count(),
                content.support().count()
            );
        }
    }
}
