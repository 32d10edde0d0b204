//! Squarefree factorization of multivariate polynomials.
//!
//! Produces a factorization where each factor is squarefree and the
//! factors are pairwise coprime.

use hironaka_poly::algorithms::{content_in, div_exact, gcd, primitive_normalization};
use hironaka_poly::SparsePoly;
use hironaka_rings::rationals::Q;
use hironaka_rings::traits::{Field, Ring};

/// A squarefree factor with its multiplicity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor {
    /// The squarefree polynomial (primitive, positive leading coefficient).
    pub factor: SparsePoly<Q>,
    /// The multiplicity (power) of this factor.
    pub multiplicity: u32,
}

/// Result of squarefree factorization.
#[derive(Clone, Debug)]
pub struct SquarefreeFactorization {
    /// Numeric factor, so that the input is `unit * prod factor^multiplicity`.
    pub unit: Q,
    /// List of squarefree factors with multiplicities.
    pub factors: Vec<SquarefreeFactor>,
}

impl SquarefreeFactorization {
    /// Reconstructs the original polynomial from factorization.
    #[must_use]
    pub fn to_polynomial(&self, num_vars: usize) -> SparsePoly<Q> {
        let order = self
            .factors
            .first()
            .map(|sf| sf.factor.order())
            .unwrap_or_default();

        self.factors.iter().fold(
            SparsePoly::constant(self.unit.clone(), num_vars, order),
            |acc, sf| acc.mul(&sf.factor.pow(sf.multiplicity)),
        )
    }
}

/// Computes the squarefree factorization of a polynomial over Q.
///
/// The zero polynomial gives unit 0 and no factors; a constant gives itself
/// as the unit.
#[must_use]
pub fn squarefree_factorization(f: &SparsePoly<Q>) -> SquarefreeFactorization {
    if f.is_zero() {
        return SquarefreeFactorization {
            unit: Q::zero(),
            factors: vec![],
        };
    }

    let (_, primitive) = primitive_normalization(f);
    let mut factors = Vec::new();
    squarefree_parts(&primitive, &mut factors);

    let result = SquarefreeFactorization {
        unit: Q::one(),
        factors,
    };
    let unit = unit_between(f, &result.to_polynomial(f.num_vars()));

    SquarefreeFactorization { unit, ..result }
}

/// `f / g` for polynomials known to differ by a nonzero constant.
pub(crate) fn unit_between(f: &SparsePoly<Q>, g: &SparsePoly<Q>) -> Q {
    match (f.leading_coeff(), g.leading_coeff()) {
        (Some(a), Some(b)) => a.field_div(b),
        _ => Q::zero(),
    }
}

pub(crate) fn exact(a: &SparsePoly<Q>, b: &SparsePoly<Q>) -> SparsePoly<Q> {
    match div_exact(a, b) {
        Some(q) => q,
        None => panic!("squarefree factor must divide exactly"),
    }
}

/// Splits off the content in the lowest variable, recurses into it, and
/// runs Yun's algorithm on the primitive part.
fn squarefree_parts(f: &SparsePoly<Q>, out: &mut Vec<SquarefreeFactor>) {
    let Some(&var) = f.variables().first() else {
        return;
    };

    let content = content_in(f, var);
    let primitive = exact(f, &content);

    squarefree_parts(&content, out);
    out.extend(yun_algorithm(&primitive, var));
}

/// Yun's algorithm with respect to `var` for `f` primitive in `var`.
///
/// Every irreducible factor of such an `f` involves `var`, so its derivative
/// in `var` is nonzero and coprime to it; this is all Yun needs.
fn yun_algorithm(f: &SparsePoly<Q>, var: usize) -> Vec<SquarefreeFactor> {
    let mut factors = Vec::new();

    let f_prime = f.derivative(var);
    if f_prime.is_zero() {
        return factors;
    }

    let a0 = gcd(f, &f_prime);
    let mut b = exact(f, &a0);
    let c = exact(&f_prime, &a0);
    let mut d = c.sub(&b.derivative(var));
    let mut i = 1;

    while b.degree_in(var) > 0 {
        let a = gcd(&b, &d);

        if !a.is_constant() {
            factors.push(SquarefreeFactor {
                factor: a.clone(),
                multiplicity: i,
            });
        }

        b = exact(&b, &a);
        let c = exact(&d, &a);
        d = c.sub(&b.derivative(var));
        i += 1;
    }

    factors
}
