//! Exponent-vector monomials.
//!
//! A chart of the resolution tree has as many coordinates as the original
//! model (two per hidden unit), so monomials are stored as a small inline
//! vector of exponents that only spills to the heap for wide models.

use smallvec::SmallVec;
use std::cmp::Ordering;

/// A monomial `x_0^e_0 * ... * x_{n-1}^e_{n-1}`.
///
/// The length of the exponent vector is the number of variables of the
/// polynomial ring the monomial lives in.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial(SmallVec<[u32; 8]>);

impl Monomial {
    /// Creates the monomial 1 (all exponents zero).
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self(SmallVec::from_elem(0, num_vars))
    }

    /// Creates the monomial x_i.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index {i} out of range for {num_vars} variables");
        let mut m = Self::one(num_vars);
        m.0[i] = 1;
        m
    }

    /// Creates a monomial from exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        Self(SmallVec::from_slice(exps))
    }

    /// Returns the exponent of variable i.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// Returns all exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Returns a copy with the exponent of variable i replaced.
    #[must_use]
    pub fn with_exponent(&self, i: usize, e: u32) -> Self {
        let mut m = self.clone();
        m.0[i] = e;
        m
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Returns true for the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Indices of the variables with a positive exponent.
    pub fn support(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, e)| **e > 0)
            .map(|(i, _)| i)
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars(), other.num_vars());
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// Raises the monomial to a power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        Self(self.0.iter().map(|e| e * n).collect())
    }

    /// Divides by another monomial if possible.
    ///
    /// Returns `Some(quotient)` if self is divisible by other.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if !other.divides(self) {
            return None;
        }
        Some(Self(self.0.iter().zip(&other.0).map(|(a, b)| a - b).collect()))
    }

    /// Returns true if self divides other.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a <= b)
    }

    /// Computes the greatest common divisor of two monomials.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| *a.min(b)).collect())
    }

    /// Computes the least common multiple of two monomials.
    #[must_use]
    pub fn lcm(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| *a.max(b)).collect())
    }

    /// Formats the monomial with the given variable names, e.g. `a_1^2*b_1`.
    ///
    /// Returns `"1"` for the unit monomial.
    #[must_use]
    pub fn format_with<S: AsRef<str>>(&self, names: &[S]) -> String {
        let parts: Vec<String> = self
            .support()
            .map(|i| {
                let name = names.get(i).map_or_else(|| format!("x_{i}"), |s| s.as_ref().to_string());
                match self.0[i] {
                    1 => name,
                    e => format!("{name}^{e}"),
                }
            })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }
}

impl std::fmt::Display for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: [&str; 0] = [];
        write!(f, "{}", self.format_with(&names))
    }
}

/// Compares two monomials lexicographically.
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    a.exponents().cmp(b.exponents())
}

/// Compares two monomials by graded reverse lexicographic order.
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Smaller exponent in the last variable wins.
    for i in (0..a.num_vars().max(b.num_vars())).rev() {
        match b.exponent(i).cmp(&a.exponent(i)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares two monomials by graded lexicographic order.
pub fn cmp_grlex(a: &Monomial, b: &Monomial) -> Ordering {
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => cmp_lex(a, b),
        ord => ord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let x = Monomial::var(0, 3);
        let y = Monomial::var(1, 3);

        assert_eq!(x.exponent(0), 1);
        assert_eq!(x.exponent(1), 0);
        assert_eq!(y.exponent(1), 1);
        assert!(Monomial::one(3).is_one());
    }

    #[test]
    fn test_mul_div() {
        let x2y = Monomial::from_exponents(&[2, 1, 0]);
        let xy = Monomial::from_exponents(&[1, 1, 0]);
        let x = Monomial::var(0, 3);

        assert_eq!(x.mul(&xy), x2y);
        assert_eq!(x2y.div(&xy), Some(x.clone()));
        assert_eq!(xy.div(&x2y), None);
        assert!(x.divides(&x2y));
    }

    #[test]
    fn test_gcd_lcm() {
        let a = Monomial::from_exponents(&[3, 0, 1]);
        let b = Monomial::from_exponents(&[1, 2, 1]);
        assert_eq!(a.gcd(&b), Monomial::from_exponents(&[1, 0, 1]));
        assert_eq!(a.lcm(&b), Monomial::from_exponents(&[3, 2, 1]));
    }

    #[test]
    fn test_support() {
        let m = Monomial::from_exponents(&[0, 2, 0, 1]);
        assert_eq!(m.support().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_grevlex_order() {
        let x2 = Monomial::from_exponents(&[2, 0]);
        let xy = Monomial::from_exponents(&[1, 1]);
        let y2 = Monomial::from_exponents(&[0, 2]);

        assert_eq!(cmp_grevlex(&x2, &xy), Ordering::Greater);
        assert_eq!(cmp_grevlex(&xy, &y2), Ordering::Greater);
    }

    #[test]
    fn test_format() {
        let m = Monomial::from_exponents(&[2, 1]);
        assert_eq!(m.format_with(&["a_1", "b_1"]), "a_1^2*b_1");
        assert_eq!(Monomial::one(2).format_with(&["a_1", "b_1"]), "1");
    }
}
