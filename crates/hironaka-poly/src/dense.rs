//! Dense univariate polynomials.
//!
//! Factorization reduces to one variable at a time: specialised
//! polynomials, Bezout coefficients and p-adic lifts all live here, and
//! convert to and from [`SparsePoly`] in a chosen variable.

use std::fmt::Display;

use hironaka_rings::traits::{Field, Ring};

use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;
use crate::sparse::SparsePoly;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order with no trailing
/// zeros, except that the zero polynomial is the single coefficient 0.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Returns the degree (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns true if the leading coefficient is 1.
    #[must_use]
    pub fn is_monic(&self) -> bool {
        self.leading_coeff().is_one()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.degree()]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| self.coeff(i) + other.coeff(i)).collect())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut result = vec![R::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }
        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Applies `f` to every coefficient.
    #[must_use]
    pub fn map_coeffs<S: Ring>(&self, f: impl FnMut(&R) -> S) -> DensePoly<S> {
        DensePoly::new(self.coeffs.iter().map(f).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c.mul_by_scalar(i64::try_from(i).unwrap_or(i64::MAX)))
                .collect(),
        )
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        result
    }

    /// Reads `p` as a polynomial in variable `var`.
    ///
    /// Returns `None` if `p` involves any other variable.
    #[must_use]
    pub fn from_sparse(p: &SparsePoly<R>, var: usize) -> Option<Self> {
        let mut coeffs = vec![R::zero(); p.degree_in(var) as usize + 1];
        for (m, c) in p.terms() {
            if m.support().any(|i| i != var) {
                return None;
            }
            coeffs[m.exponent(var) as usize] = c.clone();
        }
        Some(Self::new(coeffs))
    }

    /// Writes the polynomial in variable `var` of a ring with `num_vars`
    /// variables.
    #[must_use]
    pub fn to_sparse(&self, var: usize, num_vars: usize, order: MonomialOrder) -> SparsePoly<R> {
        let one = Monomial::one(num_vars);
        let terms = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(e, c)| (one.with_exponent(var, e as u32), c.clone()))
            .collect();
        SparsePoly::new(terms, num_vars, order)
    }
}

impl<F: Field> DensePoly<F> {
    /// Division with remainder: `self = q * divisor + r` with
    /// `deg r < deg divisor`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by zero polynomial");

        let d = divisor.degree();
        if self.degree() < d || self.is_zero() {
            return (Self::zero(), self.clone());
        }

        let lead = divisor.leading_coeff();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![F::zero(); self.degree() - d + 1];

        for i in (0..quot.len()).rev() {
            let c = rem[i + d].field_div(lead);
            if c.is_zero() {
                continue;
            }
            for (j, b) in divisor.coeffs.iter().enumerate() {
                rem[i + j] = rem[i + j].clone() - c.clone() * b.clone();
            }
            quot[i] = c;
        }

        rem.truncate(d);
        (Self::new(quot), Self::new(rem))
    }

    /// Remainder of division by `divisor`.
    #[must_use]
    pub fn rem(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }

    /// Scales to leading coefficient 1 (zero stays zero).
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.leading_coeff().inv() {
            Some(inv) => self.scale(&inv),
            None => self.clone(),
        }
    }

    /// Monic greatest common divisor; `gcd(0, 0) = 0`.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let (mut a, mut b) = (self.clone(), other.clone());
        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }
        a.monic()
    }

    /// Extended Euclid: `(g, s, t)` with `s * self + t * other = g` and `g`
    /// the monic gcd.
    #[must_use]
    pub fn xgcd(&self, other: &Self) -> (Self, Self, Self) {
        let (mut r0, mut r1) = (self.clone(), other.clone());
        let (mut s0, mut s1) = (Self::one(), Self::zero());
        let (mut t0, mut t1) = (Self::zero(), Self::one());

        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1);
            let s = s0.sub(&q.mul(&s1));
            let t = t0.sub(&q.mul(&t1));
            r0 = std::mem::replace(&mut r1, r);
            s0 = std::mem::replace(&mut s1, s);
            t0 = std::mem::replace(&mut t1, t);
        }

        match r0.leading_coeff().inv() {
            Some(inv) => (r0.scale(&inv), s0.scale(&inv), t0.scale(&inv)),
            None => (r0, s0, t0),
        }
    }

    /// Returns true if the polynomial has no repeated factor.
    #[must_use]
    pub fn is_squarefree(&self) -> bool {
        !self.is_zero() && self.gcd(&self.derivative()).degree() == 0
    }
}

impl<R: Ring + Display> Display for DensePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| match i {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{i}"),
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}
