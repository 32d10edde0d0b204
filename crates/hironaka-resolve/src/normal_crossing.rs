//! Normal crossing classification.
//!
//! A factor is *exceptional* if it is a single term in a single variable,
//! such as `x^3`. An expression is in normal crossing form at the origin of
//! its chart if none of its other factors vanishes there.

use hironaka_factor::{Factor, Factorization};
use hironaka_poly::SparsePoly;
use hironaka_rings::rationals::Q;
use hironaka_rings::traits::Ring;

/// Returns true if `p` is a single term in exactly one variable.
#[must_use]
pub fn is_exceptional(p: &SparsePoly<Q>) -> bool {
    p.is_term() && p.variables().len() == 1
}

/// Returns true if a non-exceptional factor vanishes at the origin.
#[must_use]
pub fn vanishes_at_origin(factor: &Factor) -> bool {
    factor.poly.constant_coeff().is_zero()
}

/// Classifies a factored expression.
///
/// The zero expression is never in normal crossing form; a nonzero
/// constant always is.
#[must_use]
pub fn is_normal_crossing(factorization: &Factorization) -> bool {
    if factorization.is_zero() {
        return false;
    }
    factorization
        .factors
        .iter()
        .filter(|f| !is_exceptional(&f.poly))
        .all(|f| !vanishes_at_origin(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hironaka_factor::factor;
    use hironaka_poly::MonomialOrder;

    const ORDER: MonomialOrder = MonomialOrder::Grevlex;

    fn var(i: usize, n: usize) -> SparsePoly<Q> {
        SparsePoly::var(i, n, ORDER)
    }

    fn constant(c: i64, n: usize) -> SparsePoly<Q> {
        SparsePoly::constant(Q::from_integer(c), n, ORDER)
    }

    fn classify(p: &SparsePoly<Q>) -> bool {
        is_normal_crossing(&factor(p))
    }

    #[test]
    fn test_monomial_times_unit() {
        // x^2 * y^3 * (2 + z)
        let n = 3;
        let (x, y, z) = (var(0, n), var(1, n), var(2, n));
        let p = x.pow(2).mul(&y.pow(3)).mul(&constant(2, n).add(&z));
        assert!(classify(&p));
    }

    #[test]
    fn test_unit_vanishing_away_from_origin() {
        // x * (1 + y) vanishes at y = -1, not at the origin.
        let n = 2;
        let (x, y) = (var(0, n), var(1, n));
        assert!(classify(&x.mul(&constant(1, n).add(&y))));
    }

    #[test]
    fn test_strict_transform_through_origin() {
        // x * (y + z)
        let n = 3;
        let (x, y, z) = (var(0, n), var(1, n), var(2, n));
        assert!(!classify(&x.mul(&y.add(&z))));
    }

    #[test]
    fn test_constant_and_zero() {
        assert!(classify(&constant(-4, 2)));
        assert!(!classify(&SparsePoly::zero(2, ORDER)));
    }

    #[test]
    fn test_exceptional() {
        let n = 2;
        let (x, y) = (var(0, n), var(1, n));
        assert!(is_exceptional(&x.pow(3)));
        assert!(!is_exceptional(&x.mul(&y)));
        assert!(!is_exceptional(&x.add(&constant(1, n))));
        assert!(!is_exceptional(&constant(2, n)));
    }
}
