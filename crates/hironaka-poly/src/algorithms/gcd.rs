//! Multivariate GCD over Q.
//!
//! The GCD is computed recursively on the variables: a polynomial is viewed
//! as univariate in its lowest-index variable with coefficients in the
//! remaining ones, contents are split off (recursing on fewer variables) and
//! the primitive parts are combined with a primitive pseudo-remainder
//! sequence.
//!
//! All results are normalised with [`primitive_normalization`], so the GCD
//! is unique: integer coprime coefficients and a positive leading
//! coefficient.

use hironaka_integers::{Integer, Rational};
use hironaka_rings::rationals::Q;
use hironaka_rings::traits::Ring;
use num_traits::{One, Zero};

use super::division::{div_exact, pseudo_remainder};
use crate::sparse::SparsePoly;

/// Splits `p` as `unit * primitive`.
///
/// The primitive polynomial has integer coefficients with no common factor
/// and a positive leading coefficient. The zero polynomial gives
/// `(0, 0)`.
#[must_use]
pub fn primitive_normalization(p: &SparsePoly<Q>) -> (Q, SparsePoly<Q>) {
    let Some(lead) = p.leading_coeff() else {
        return (Q::zero(), p.clone());
    };

    let (denominators, numerators) = p.terms().iter().fold(
        (Integer::one(), Integer::zero()),
        |(l, g), (_, c)| (l.lcm(&c.0.denominator()), g.gcd(&c.0.numerator())),
    );

    let mut unit = Rational::new(numerators, denominators);
    if lead.is_negative() {
        unit = -unit;
    }

    let unit = Q(unit);
    let primitive = p.scale(&Q(unit.0.recip()));
    (unit, primitive)
}

/// Normalises a polynomial to its primitive associate.
fn normalized(p: &SparsePoly<Q>) -> SparsePoly<Q> {
    primitive_normalization(p).1
}

fn one_like(p: &SparsePoly<Q>) -> SparsePoly<Q> {
    SparsePoly::one(p.num_vars(), p.order())
}

/// `a / b` for a divisor known to be exact.
fn exact_quotient(a: &SparsePoly<Q>, b: &SparsePoly<Q>) -> SparsePoly<Q> {
    match div_exact(a, b) {
        Some(q) => q,
        None => panic!("gcd factor must divide exactly"),
    }
}

/// Content of `p` with respect to variable `var`.
///
/// The GCD of the coefficients of `p` viewed as a polynomial in `var`; it
/// does not depend on `var`. If `p` does not involve `var` at all, its
/// content is (the normalisation of) `p` itself.
#[must_use]
pub fn content_in(p: &SparsePoly<Q>, var: usize) -> SparsePoly<Q> {
    let mut content = SparsePoly::zero(p.num_vars(), p.order());
    for coeff in p.coefficients_in(var).iter().filter(|c| !c.is_zero()) {
        content = gcd(&content, coeff);
        if content.is_constant() {
            break;
        }
    }
    content
}

/// Primitive part of `p` with respect to variable `var`.
///
/// # Panics
///
/// Panics if the computed content does not divide `p`, which would mean the
/// GCD is wrong.
#[must_use]
pub fn primitive_part_in(p: &SparsePoly<Q>, var: usize) -> SparsePoly<Q> {
    if p.is_zero() {
        return p.clone();
    }
    normalized(&exact_quotient(p, &content_in(p, var)))
}

/// Greatest common divisor of two polynomials over Q.
///
/// `gcd(0, 0) = 0`; otherwise the result is normalised (see module docs)
/// and is the constant 1 when the inputs are coprime.
///
/// # Panics
///
/// Panics if the inputs live in different rings.
#[must_use]
pub fn gcd(a: &SparsePoly<Q>, b: &SparsePoly<Q>) -> SparsePoly<Q> {
    assert_eq!(a.num_vars(), b.num_vars());

    if a.is_zero() {
        return normalized(b);
    }
    if b.is_zero() {
        return normalized(a);
    }
    if a.is_constant() || b.is_constant() {
        return one_like(a);
    }

    let var = match (a.variables().first(), b.variables().first()) {
        (Some(&i), Some(&j)) => i.min(j),
        (Some(&i), None) | (None, Some(&i)) => i,
        (None, None) => return one_like(a),
    };

    match (a.depends_on(var), b.depends_on(var)) {
        // Any common divisor of a polynomial free of `var` and `a` divides
        // every coefficient of `a` in `var`.
        (true, false) => gcd(&content_in(a, var), b),
        (false, true) => gcd(a, &content_in(b, var)),
        _ => {
            let ca = content_in(a, var);
            let cb = content_in(b, var);
            let pa = exact_quotient(a, &ca);
            let pb = exact_quotient(b, &cb);

            let c = gcd(&ca, &cb);
            let g = primitive_prs(pa, pb, var);
            normalized(&c.mul(&g))
        }
    }
}

/// GCD of two polynomials primitive in `var`, both of positive degree in it.
fn primitive_prs(a: SparsePoly<Q>, b: SparsePoly<Q>, var: usize) -> SparsePoly<Q> {
    let (mut a, mut b) = if a.degree_in(var) >= b.degree_in(var) {
        (a, b)
    } else {
        (b, a)
    };

    loop {
        let r = pseudo_remainder(&a, &b, var);
        if r.is_zero() {
            return normalized(&b);
        }
        if r.degree_in(var) == 0 {
            return one_like(&b);
        }
        a = b;
        b = primitive_part_in(&r, var);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::MonomialOrder;

    const ORDER: MonomialOrder = MonomialOrder::Grevlex;

    fn var(i: usize, n: usize) -> SparsePoly<Q> {
        SparsePoly::var(i, n, ORDER)
    }

    fn constant(c: i64, n: usize) -> SparsePoly<Q> {
        SparsePoly::constant(Q::from_integer(c), n, ORDER)
    }

    #[test]
    fn test_primitive_normalization() {
        // -(2/3)*x + 4/9  =  (-2/9) * (3x - 2)
        let x = var(0, 1);
        let p = x.scale(&Q::new(-2, 3)).add(&SparsePoly::constant(Q::new(4, 9), 1, ORDER));
        let (unit, prim) = primitive_normalization(&p);

        assert_eq!(unit, Q::new(-2, 9));
        assert_eq!(prim, x.scale(&Q::from_integer(3)).sub(&constant(2, 1)));
        assert_eq!(prim.scale(&unit), p);
    }

    #[test]
    fn test_gcd_univariate() {
        // gcd((x-1)(x+2), (x-1)(x-3)) = x - 1
        let x = var(0, 1);
        let a = x.sub(&constant(1, 1)).mul(&x.add(&constant(2, 1)));
        let b = x.sub(&constant(1, 1)).mul(&x.sub(&constant(3, 1)));
        assert_eq!(gcd(&a, &b), x.sub(&constant(1, 1)));
    }

    #[test]
    fn test_gcd_multivariate() {
        // gcd((x + y*z)^2 * x, (x + y*z) * (y - 1))
        let n = 3;
        let x = var(0, n);
        let y = var(1, n);
        let z = var(2, n);
        let common = x.add(&y.mul(&z));
        let a = common.pow(2).mul(&x);
        let b = common.mul(&y.sub(&constant(1, n)));

        assert_eq!(gcd(&a, &b), common);
    }

    #[test]
    fn test_gcd_with_monomials() {
        // gcd(x^2*y, x*y^3) = x*y
        let x = var(0, 2);
        let y = var(1, 2);
        let a = x.pow(2).mul(&y);
        let b = x.mul(&y.pow(3)).scale(&Q::from_integer(-4));
        assert_eq!(gcd(&a, &b), x.mul(&y));
    }

    #[test]
    fn test_gcd_coprime() {
        let x = var(0, 2);
        let y = var(1, 2);
        let a = x.add(&y);
        let b = x.sub(&y);
        assert_eq!(gcd(&a, &b), constant(1, 2));
    }

    #[test]
    fn test_gcd_zero() {
        let x = var(0, 1);
        let zero = SparsePoly::<Q>::zero(1, ORDER);
        assert_eq!(gcd(&zero, &x.scale(&Q::from_integer(-3))), x);
        assert!(gcd(&zero, &zero).is_zero());
    }

    #[test]
    fn test_content_and_primitive_part() {
        // p = (y + 1) * x^2 + (y^2 - 1) * x  =  (y + 1) * (x^2 + (y - 1) * x)
        let x = var(0, 2);
        let y = var(1, 2);
        let one = constant(1, 2);
        let p = y.add(&one).mul(&x.pow(2)).add(&y.pow(2).sub(&one).mul(&x));

        assert_eq!(content_in(&p, 0), y.add(&one));
        assert_eq!(
            primitive_part_in(&p, 0),
            x.pow(2).add(&y.sub(&one).mul(&x))
        );
    }
}
