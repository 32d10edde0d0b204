//! The reduced rank regression model.

use hironaka_poly::{MonomialOrder, SparsePoly};
use hironaka_rings::rationals::Q;

/// Reduced rank regression with `H` hidden units: `f = a_1*b_1 + ... + a_H*b_H`
/// over the coordinates `a_1, b_1, ..., a_H, b_H`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReducedRankModel {
    hidden: usize,
}

impl ReducedRankModel {
    /// A model with `hidden` hidden units.
    #[must_use]
    pub fn new(hidden: usize) -> Self {
        Self { hidden }
    }

    /// Number of hidden units.
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.hidden
    }

    /// Number of coordinates, `2H`.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        2 * self.hidden
    }

    /// Coordinate names in variable order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        (1..=self.hidden)
            .flat_map(|i| [format!("a_{i}"), format!("b_{i}")])
            .collect()
    }

    /// The polynomial `f`.
    #[must_use]
    pub fn f(&self) -> SparsePoly<Q> {
        let n = self.num_vars();
        let var = |k: usize| SparsePoly::<Q>::var(k, n, MonomialOrder::Grevlex);
        (0..self.hidden).fold(SparsePoly::zero(n, MonomialOrder::Grevlex), |acc, i| {
            acc.add(&var(2 * i).mul(&var(2 * i + 1)))
        })
    }

    /// The Kullback-Leibler polynomial `K = f^2`.
    #[must_use]
    pub fn k(&self) -> SparsePoly<Q> {
        self.f().pow(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let model = ReducedRankModel::new(2);
        assert_eq!(model.names(), vec!["a_1", "b_1", "a_2", "b_2"]);
        assert_eq!(model.num_vars(), 4);
    }

    #[test]
    fn test_polynomials() {
        let model = ReducedRankModel::new(2);
        let names = model.names();
        assert_eq!(model.f().format_with(&names), "a_1*b_1 + a_2*b_2");
        assert_eq!(model.k().len(), 3);
        assert_eq!(model.k().total_degree(), 4);
    }

    #[test]
    fn test_no_hidden_units() {
        let model = ReducedRankModel::new(0);
        assert!(model.names().is_empty());
        assert!(model.f().is_zero());
    }
}
