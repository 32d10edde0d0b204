//! Factorization of multivariate polynomials over Q.
//!
//! A polynomial is split into a numeric unit, coordinate monomial factors
//! `x_i^e`, and pairwise coprime non-monomial factors with multiplicities:
//!
//! 1. the monomial content is divided out, one factor per variable;
//! 2. the rest is decomposed into squarefree parts;
//! 3. every squarefree part is split further by its content in each variable;
//! 4. each piece primitive in all its variables is split into irreducible
//!    factors by specialisation and lifting.
//!
//! A factor is flagged irreducible unless step 4 found no usable
//! evaluation point, in which case the piece is kept whole.

use std::cmp::Ordering;
use std::fmt;

use hironaka_poly::algorithms::{content_in, primitive_normalization};
use hironaka_poly::{Monomial, MonomialOrder, SparsePoly};
use hironaka_rings::rationals::Q;
use hironaka_rings::traits::Ring;

use crate::multivariate_hensel::irreducible_factors;
use crate::squarefree::{exact, squarefree_factorization, unit_between};

/// One factor of a [`Factorization`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factor {
    /// The factor, primitive with a positive leading coefficient.
    pub poly: SparsePoly<Q>,
    /// Its power in the factorization.
    pub multiplicity: u32,
    /// Whether the factor is known to be irreducible.
    pub irreducible: bool,
}

impl Factor {
    /// The coordinate index if this factor is a single variable `x_i`.
    #[must_use]
    pub fn coordinate(&self) -> Option<usize> {
        let (m, c) = self.poly.leading_term()?;
        if !self.poly.is_term() || !c.is_one() || m.total_degree() != 1 {
            return None;
        }
        m.support().next()
    }

    /// Returns true for a coordinate monomial factor.
    #[must_use]
    pub fn is_coordinate(&self) -> bool {
        self.coordinate().is_some()
    }
}

/// A polynomial written as `unit * prod poly_i^multiplicity_i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization {
    /// Numeric factor (zero exactly for the zero polynomial).
    pub unit: Q,
    /// Factors: coordinate monomials by variable index first, then the rest.
    pub factors: Vec<Factor>,
    num_vars: usize,
    order: MonomialOrder,
}

impl Factorization {
    /// Number of variables of the factored polynomial.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns true if this factors the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unit.is_zero()
    }

    /// Multiplies the factorization back out.
    #[must_use]
    pub fn expand(&self) -> SparsePoly<Q> {
        self.factors.iter().fold(
            SparsePoly::constant(self.unit.clone(), self.num_vars, self.order),
            |acc, f| acc.mul(&f.poly.pow(f.multiplicity)),
        )
    }

    /// The factors that are coordinate monomials, as `(index, multiplicity)`.
    pub fn coordinate_factors(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.factors
            .iter()
            .filter_map(|f| f.coordinate().map(|i| (i, f.multiplicity)))
    }

    /// The factors that are not coordinate monomials.
    pub fn other_factors(&self) -> impl Iterator<Item = &Factor> + '_ {
        self.factors.iter().filter(|f| !f.is_coordinate())
    }

    /// Formats the factorization with the given variable names, e.g.
    /// `2*a_1^2*(b_1 + c_1)^3`.
    #[must_use]
    pub fn format_with<S: AsRef<str>>(&self, names: &[S]) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut parts: Vec<String> = self
            .factors
            .iter()
            .map(|f| {
                let body = f.poly.format_with(names);
                let body = if f.poly.is_term() { body } else { format!("({body})") };
                match f.multiplicity {
                    1 => body,
                    m => format!("{body}^{m}"),
                }
            })
            .collect();

        let unit = self.unit.to_string();
        if parts.is_empty() {
            return unit;
        }
        if self.unit == -Q::one() {
            parts[0] = format!("-{}", parts[0]);
        } else if !self.unit.is_one() {
            parts.insert(0, if unit.contains('/') { format!("({unit})") } else { unit });
        }
        parts.join("*")
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: [&str; 0] = [];
        write!(f, "{}", self.format_with(&names))
    }
}

/// Factors a polynomial over Q.
///
/// The result satisfies `factor(f).expand() == f`. The zero polynomial
/// gives unit 0 and no factors.
#[must_use]
pub fn factor(f: &SparsePoly<Q>) -> Factorization {
    let num_vars = f.num_vars();
    let order = f.order();

    if f.is_zero() {
        return Factorization {
            unit: Q::zero(),
            factors: vec![],
            num_vars,
            order,
        };
    }

    let monomial = f.monomial_content();
    let Some(rest) = f.div_monomial(&monomial) else {
        unreachable!("the monomial content divides every term");
    };

    let mut factors: Vec<Factor> = monomial
        .support()
        .map(|i| Factor {
            poly: SparsePoly::var(i, num_vars, order),
            multiplicity: monomial.exponent(i),
            irreducible: true,
        })
        .collect();

    let mut others = Vec::new();
    for sf in squarefree_factorization(&rest).factors {
        for piece in split_by_content(&sf.factor) {
            for (poly, irreducible) in irreducible_factors(&piece) {
                others.push(Factor {
                    poly,
                    multiplicity: sf.multiplicity,
                    irreducible,
                });
            }
        }
    }
    others.sort_by(|a, b| compare_polys(&a.poly, &b.poly));
    factors.extend(others);

    let mut result = Factorization {
        unit: Q::one(),
        factors,
        num_vars,
        order,
    };
    result.unit = unit_between(f, &result.expand());
    result
}

/// Splits a squarefree factor into pieces that are primitive in every
/// variable they involve.
fn split_by_content(f: &SparsePoly<Q>) -> Vec<SparsePoly<Q>> {
    for var in f.variables() {
        let content = content_in(f, var);
        if !content.is_constant() {
            let mut pieces = split_by_content(&content);
            pieces.extend(split_by_content(&exact(f, &content)));
            return pieces;
        }
    }

    if f.is_constant() {
        return vec![];
    }
    vec![primitive_normalization(f).1]
}

/// Deterministic order on factors: by total degree, then number of terms,
/// then term by term.
fn compare_polys(a: &SparsePoly<Q>, b: &SparsePoly<Q>) -> Ordering {
    a.total_degree()
        .cmp(&b.total_degree())
        .then(a.len().cmp(&b.len()))
        .then_with(|| {
            for ((ma, ca), (mb, cb)) in a.terms().iter().zip(b.terms()) {
                let ord = compare_monomials(ma, mb).then_with(|| ca.cmp(cb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        })
}

fn compare_monomials(a: &Monomial, b: &Monomial) -> Ordering {
    // Factors involving lower-index variables first.
    b.exponents().cmp(a.exponents())
}
