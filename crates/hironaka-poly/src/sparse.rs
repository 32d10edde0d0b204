//! Sparse multivariate polynomials.
//!
//! Polynomials are kept in canonical expanded form: terms sorted by the
//! monomial order (leading term first), like terms combined, zero
//! coefficients dropped. Structural equality of two `SparsePoly` values is
//! therefore equality of the expanded polynomials.

use std::fmt::Display;

use hironaka_rings::traits::Ring;

use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;

/// A sparse multivariate polynomial.
///
/// Terms are stored as (monomial, coefficient) pairs, sorted by
/// the monomial ordering.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparsePoly<R: Ring> {
    /// Terms in sorted order (by monomial ordering).
    terms: Vec<(Monomial, R)>,
    /// Number of variables.
    num_vars: usize,
    /// Monomial ordering used for sorting.
    order: MonomialOrder,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a new polynomial from terms.
    ///
    /// Terms are automatically sorted and combined.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, R)>, num_vars: usize, order: MonomialOrder) -> Self {
        debug_assert!(terms.iter().all(|(m, _)| m.num_vars() == num_vars));
        let mut poly = Self {
            terms,
            num_vars,
            order,
        };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
            order,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(num_vars: usize, order: MonomialOrder) -> Self {
        Self::constant(R::one(), num_vars, order)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R, num_vars: usize, order: MonomialOrder) -> Self {
        Self::term(Monomial::one(num_vars), c, order)
    }

    /// Creates a single term `c * m`.
    #[must_use]
    pub fn term(m: Monomial, c: R, order: MonomialOrder) -> Self {
        let num_vars = m.num_vars();
        if c.is_zero() {
            Self::zero(num_vars, order)
        } else {
            Self {
                terms: vec![(m, c)],
                num_vars,
                order,
            }
        }
    }

    /// Creates a single variable x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize, order: MonomialOrder) -> Self {
        Self::term(Monomial::var(i, num_vars), R::one(), order)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, R)] {
        &self.terms
    }

    /// Returns the leading monomial.
    #[must_use]
    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.terms.first().map(|(m, _)| m)
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.terms.first().map(|(_, c)| c)
    }

    /// Returns the leading term (monomial, coefficient).
    #[must_use]
    pub fn leading_term(&self) -> Option<&(Monomial, R)> {
        self.terms.first()
    }

    /// Returns true if the polynomial is zero or a nonzero constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self.terms.as_slice() {
            [] => true,
            [(m, _)] => m.is_one(),
            _ => false,
        }
    }

    /// Returns true if the polynomial is a single term `c * m`.
    #[must_use]
    pub fn is_term(&self) -> bool {
        self.terms.len() == 1
    }

    /// The value at the origin, i.e. the coefficient of the monomial 1.
    #[must_use]
    pub fn constant_coeff(&self) -> R {
        // 1 is the smallest monomial in every admissible order.
        match self.terms.last() {
            Some((m, c)) if m.is_one() => c.clone(),
            _ => R::zero(),
        }
    }

    /// Sorted indices of the variables that occur in some term.
    #[must_use]
    pub fn variables(&self) -> Vec<usize> {
        let mut present = vec![false; self.num_vars];
        for (m, _) in &self.terms {
            for i in m.support() {
                present[i] = true;
            }
        }
        present
            .iter()
            .enumerate()
            .filter(|(_, p)| **p)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns true if variable i occurs in some term.
    #[must_use]
    pub fn depends_on(&self, i: usize) -> bool {
        self.terms.iter().any(|(m, _)| m.exponent(i) > 0)
    }

    /// Degree in variable i (0 for the zero polynomial).
    #[must_use]
    pub fn degree_in(&self, i: usize) -> u32 {
        self.terms.iter().map(|(m, _)| m.exponent(i)).max().unwrap_or(0)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Coefficients with respect to variable i.
    ///
    /// Entry `d` is the coefficient of `x_i^d`, a polynomial in the same ring
    /// that no longer depends on `x_i`. The result has `degree_in(i) + 1`
    /// entries (one zero polynomial entry for the zero polynomial).
    #[must_use]
    pub fn coefficients_in(&self, i: usize) -> Vec<Self> {
        let degree = self.degree_in(i) as usize;
        let mut buckets: Vec<Vec<(Monomial, R)>> = vec![Vec::new(); degree + 1];
        for (m, c) in &self.terms {
            buckets[m.exponent(i) as usize].push((m.with_exponent(i, 0), c.clone()));
        }
        buckets
            .into_iter()
            .map(|terms| Self::new(terms, self.num_vars, self.order))
            .collect()
    }

    /// The coefficient of the highest power of variable i.
    #[must_use]
    pub fn leading_coeff_in(&self, i: usize) -> Self {
        let degree = self.degree_in(i);
        let terms = self
            .terms
            .iter()
            .filter(|(m, _)| m.exponent(i) == degree)
            .map(|(m, c)| (m.with_exponent(i, 0), c.clone()))
            .collect();
        Self::new(terms, self.num_vars, self.order)
    }

    /// The largest monomial dividing every term (1 for the zero polynomial).
    #[must_use]
    pub fn monomial_content(&self) -> Monomial {
        let mut terms = self.terms.iter();
        match terms.next() {
            None => Monomial::one(self.num_vars),
            Some((first, _)) => terms.fold(first.clone(), |acc, (m, _)| acc.gcd(m)),
        }
    }

    /// Divides every term by a monomial, if it divides all of them.
    #[must_use]
    pub fn div_monomial(&self, m: &Monomial) -> Option<Self> {
        let terms = self
            .terms
            .iter()
            .map(|(t, c)| t.div(m).map(|q| (q, c.clone())))
            .collect::<Option<Vec<_>>>()?;
        // Dividing by a monomial preserves the relative order of terms.
        Some(Self {
            terms,
            num_vars: self.num_vars,
            order: self.order,
        })
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        let order = self.order;
        self.terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        let mut combined: Vec<(Monomial, R)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            match combined.last_mut() {
                Some((last, acc)) if *last == m => *acc = acc.clone() + c,
                _ => combined.push((m, c)),
            }
        }
        combined.retain(|(_, c)| !c.is_zero());
        self.terms = combined;
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars);
        assert!(self.order == other.order);

        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());

        Self::new(terms, self.num_vars, self.order)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c.clone())).collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars);
        assert!(self.order == other.order);

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        let mut terms = Vec::with_capacity(self.len() * other.len());
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                terms.push((m1.mul(m2), c1.clone() * c2.clone()));
            }
        }

        Self::new(terms, self.num_vars, self.order)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, x)| (m.clone(), x.clone() * c.clone()))
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Multiplies by the term `c * m`.
    #[must_use]
    pub fn mul_monomial(&self, m: &Monomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars, self.order);
        }

        // Monomial orders are compatible with multiplication.
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone()))
                .collect(),
            num_vars: self.num_vars,
            order: self.order,
        }
    }

    /// Raises the polynomial to a non-negative power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one(self.num_vars, self.order);
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Partial derivative with respect to variable i.
    #[must_use]
    pub fn derivative(&self, i: usize) -> Self {
        let terms = self
            .terms
            .iter()
            .filter(|(m, _)| m.exponent(i) > 0)
            .map(|(m, c)| {
                let e = m.exponent(i);
                (m.with_exponent(i, e - 1), c.mul_by_scalar(i64::from(e)))
            })
            .collect();
        Self::new(terms, self.num_vars, self.order)
    }

    /// Evaluates at a point.
    ///
    /// # Panics
    ///
    /// Panics if `point` has fewer entries than there are variables.
    #[must_use]
    pub fn evaluate(&self, point: &[R]) -> R {
        assert!(point.len() >= self.num_vars);
        self.terms.iter().fold(R::zero(), |acc, (m, c)| {
            let value = m
                .support()
                .fold(c.clone(), |v, i| v * point[i].pow(m.exponent(i)));
            acc + value
        })
    }

    /// Substitutes `x_i -> images[i]` for every variable and expands.
    ///
    /// All images must live in the same ring; the result lives there too.
    /// This is how a chart's map pulls a polynomial back: composing with the
    /// images of the original variables.
    ///
    /// # Panics
    ///
    /// Panics if the number of images differs from the number of variables.
    #[must_use]
    pub fn compose(&self, images: &[Self]) -> Self {
        assert_eq!(images.len(), self.num_vars, "one image per variable is required");
        let (target_vars, target_order) = images
            .first()
            .map_or((self.num_vars, self.order), |g| (g.num_vars, g.order));

        let mut powers: Vec<Vec<Self>> = vec![Vec::new(); self.num_vars];
        let mut terms = Vec::new();

        for (m, c) in &self.terms {
            let mut product = Self::constant(c.clone(), target_vars, target_order);
            for i in m.support() {
                let e = m.exponent(i) as usize;
                let cache = &mut powers[i];
                if cache.is_empty() {
                    cache.push(Self::one(target_vars, target_order));
                }
                while cache.len() <= e {
                    let next = cache[cache.len() - 1].mul(&images[i]);
                    cache.push(next);
                }
                product = product.mul(&cache[e]);
            }
            terms.extend(product.terms);
        }

        Self::new(terms, target_vars, target_order)
    }

    /// Substitutes `x_i -> image`, leaving the other variables alone.
    #[must_use]
    pub fn substitute(&self, i: usize, image: &Self) -> Self {
        let images: Vec<Self> = (0..self.num_vars)
            .map(|j| {
                if j == i {
                    image.clone()
                } else {
                    Self::var(j, self.num_vars, self.order)
                }
            })
            .collect();
        self.compose(&images)
    }
}

impl<R: Ring + Display> SparsePoly<R> {
    /// Formats the polynomial with the given variable names.
    ///
    /// Non-integer coefficients are parenthesised, e.g. `(3/2)*a_1 - b_1 + 2`.
    #[must_use]
    pub fn format_with<S: AsRef<str>>(&self, names: &[S]) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (k, (m, c)) in self.terms.iter().enumerate() {
            let negative = c.to_string().starts_with('-');
            let magnitude = if negative { -c.clone() } else { c.clone() };
            let coeff = magnitude.to_string();
            let coeff = if coeff.contains('/') {
                format!("({coeff})")
            } else {
                coeff
            };

            let body = if m.is_one() {
                coeff
            } else if magnitude.is_one() {
                m.format_with(names)
            } else {
                format!("{coeff}*{}", m.format_with(names))
            };

            match (k, negative) {
                (0, true) => out.push_str(&format!("-{body}")),
                (0, false) => out.push_str(&body),
                (_, true) => out.push_str(&format!(" - {body}")),
                (_, false) => out.push_str(&format!(" + {body}")),
            }
        }
        out
    }
}

impl<R: Ring + Display> Display for SparsePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: [&str; 0] = [];
        write!(f, "{}", self.format_with(&names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hironaka_rings::rationals::Q;

    const ORDER: MonomialOrder = MonomialOrder::Grevlex;

    fn var(i: usize, n: usize) -> SparsePoly<Q> {
        SparsePoly::var(i, n, ORDER)
    }

    fn constant(c: i64, n: usize) -> SparsePoly<Q> {
        SparsePoly::constant(Q::from_integer(c), n, ORDER)
    }

    #[test]
    fn test_sparse_basic() {
        let x = var(0, 2);
        let y = var(1, 2);

        let sum = x.add(&y);
        assert_eq!(sum.len(), 2);
        assert!(sum.sub(&x).sub(&y).is_zero());
    }

    #[test]
    fn test_sparse_mul_and_pow() {
        let x = var(0, 2);
        let xp1 = x.add(&constant(1, 2));

        let sq = xp1.mul(&xp1);
        assert_eq!(sq.len(), 3);
        assert_eq!(xp1.pow(2), sq);
        assert_eq!(xp1.pow(0), constant(1, 2));
    }

    #[test]
    fn test_constant_coeff() {
        let x = var(0, 2);
        let p = x.add(&constant(5, 2));
        assert_eq!(p.constant_coeff(), Q::from_integer(5));
        assert!(x.constant_coeff().is_zero());
        assert!(constant(3, 2).is_constant());
    }

    #[test]
    fn test_variables_and_degree() {
        // x0^2 * x2 + x2
        let p = var(0, 3).pow(2).mul(&var(2, 3)).add(&var(2, 3));
        assert_eq!(p.variables(), vec![0, 2]);
        assert!(!p.depends_on(1));
        assert_eq!(p.degree_in(0), 2);
        assert_eq!(p.total_degree(), 3);
    }

    #[test]
    fn test_coefficients_in() {
        // x*y^2 + 3*y + x
        let x = var(0, 2);
        let y = var(1, 2);
        let p = x.mul(&y.pow(2)).add(&y.scale(&Q::from_integer(3))).add(&x);

        let coeffs = p.coefficients_in(1);
        assert_eq!(coeffs.len(), 3);
        assert_eq!(coeffs[0], x);
        assert_eq!(coeffs[1], constant(3, 2));
        assert_eq!(coeffs[2], x);
        assert_eq!(p.leading_coeff_in(1), x);
    }

    #[test]
    fn test_monomial_content() {
        // x^2*y + x^3*y^2
        let x = var(0, 2);
        let y = var(1, 2);
        let p = x.pow(2).mul(&y).add(&x.pow(3).mul(&y.pow(2)));

        let m = p.monomial_content();
        assert_eq!(m, Monomial::from_exponents(&[2, 1]));
        let q = p.div_monomial(&m).unwrap();
        assert_eq!(q, constant(1, 2).add(&x.mul(&y)));
    }

    #[test]
    fn test_derivative() {
        // d/dx (x^3 * y + 2x) = 3x^2 * y + 2
        let x = var(0, 2);
        let y = var(1, 2);
        let p = x.pow(3).mul(&y).add(&x.scale(&Q::from_integer(2)));
        let expected = x.pow(2).mul(&y).scale(&Q::from_integer(3)).add(&constant(2, 2));
        assert_eq!(p.derivative(0), expected);
        assert_eq!(p.derivative(1), x.pow(3));
    }

    #[test]
    fn test_compose_blowup_chart() {
        // a*b + c*d pulled back through a -> a, b -> a*b, c -> a*c, d -> a*d
        let n = 4;
        let v: Vec<_> = (0..n).map(|i| var(i, n)).collect();
        let f = v[0].mul(&v[1]).add(&v[2].mul(&v[3]));
        let images = vec![
            v[0].clone(),
            v[0].mul(&v[1]),
            v[0].mul(&v[2]),
            v[0].mul(&v[3]),
        ];

        let pulled = f.compose(&images);
        let expected = v[0].pow(2).mul(&v[1].add(&v[2].mul(&v[3])));
        assert_eq!(pulled, expected);
    }

    #[test]
    fn test_substitute() {
        // (x + y)[y := x^2] = x + x^2
        let x = var(0, 2);
        let y = var(1, 2);
        let p = x.add(&y);
        assert_eq!(p.substitute(1, &x.pow(2)), x.add(&x.pow(2)));
    }

    #[test]
    fn test_evaluate() {
        let x = var(0, 2);
        let y = var(1, 2);
        let p = x.mul(&y).add(&constant(1, 2));
        let value = p.evaluate(&[Q::from_integer(2), Q::from_integer(3)]);
        assert_eq!(value, Q::from_integer(7));
    }

    #[test]
    fn test_format_with() {
        let x = var(0, 2);
        let y = var(1, 2);
        let p = x
            .pow(2)
            .scale(&Q::new(3, 2))
            .sub(&y)
            .add(&constant(2, 2));
        assert_eq!(p.format_with(&["a_1", "b_1"]), "(3/2)*a_1^2 - b_1 + 2");
        assert_eq!(y.neg().format_with(&["a_1", "b_1"]), "-b_1");
    }
}
