//! Multivariate division.

use hironaka_rings::traits::{Field, Ring};

use crate::monomial::Monomial;
use crate::sparse::SparsePoly;

/// Divides `a` by `b` when the division is exact.
///
/// Returns `None` if `b` does not divide `a`. Because the leading term of a
/// product is the product of leading terms, repeatedly cancelling the
/// leading term of the running remainder decides divisibility.
///
/// # Panics
///
/// Panics if `b` is zero.
#[must_use]
pub fn div_exact<F: Field>(a: &SparsePoly<F>, b: &SparsePoly<F>) -> Option<SparsePoly<F>> {
    let Some((lead_m, lead_c)) = b.leading_term() else {
        panic!("division by zero polynomial");
    };

    let mut remainder = a.clone();
    let mut quotient = Vec::new();

    while let Some((m, c)) = remainder.leading_term() {
        let t = m.div(lead_m)?;
        let coeff = c.field_div(lead_c);
        remainder = remainder.sub(&b.mul_monomial(&t, &coeff));
        quotient.push((t, coeff));
    }

    Some(SparsePoly::new(quotient, a.num_vars(), a.order()))
}

/// Pseudo-remainder of `a` by `b` with respect to variable `var`.
///
/// With `m = deg_var(a)`, `n = deg_var(b)` and `l` the leading coefficient
/// of `b` in `var`, returns `r` with `l^(m-n+1) * a = q * b + r` and
/// `deg_var(r) < n`. Only ring operations are used, so the coefficients in
/// the other variables never need to be inverted.
///
/// # Panics
///
/// Panics if `b` is zero.
#[must_use]
pub fn pseudo_remainder<R: Ring>(a: &SparsePoly<R>, b: &SparsePoly<R>, var: usize) -> SparsePoly<R> {
    assert!(!b.is_zero(), "division by zero polynomial");

    let m = a.degree_in(var);
    let n = b.degree_in(var);
    if a.is_zero() || m < n {
        return a.clone();
    }

    let lead = b.leading_coeff_in(var);
    let num_vars = a.num_vars();
    let one = R::one();

    let mut r = a.clone();
    let mut steps = 0;
    while !r.is_zero() && r.degree_in(var) >= n {
        let d = r.degree_in(var);
        let shift = Monomial::var(var, num_vars).pow(d - n);
        let t = r.leading_coeff_in(var).mul_monomial(&shift, &one);
        r = r.mul(&lead).sub(&t.mul(b));
        steps += 1;
    }

    r.mul(&lead.pow(m - n + 1 - steps))
}
