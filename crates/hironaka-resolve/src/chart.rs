//! Chart nodes of the resolution tree.

use hironaka_factor::{factor, Factorization};
use hironaka_linalg::{jacobian, DenseMatrix};
use hironaka_poly::SparsePoly;
use hironaka_rings::rationals::Q;

use crate::blowup::Center;
use crate::config::UnmatchedFactor;
use crate::error::Result;
use crate::label::ChartLabel;
use crate::normal_crossing::is_normal_crossing;
use crate::rlct::{extract_rlct, Rlct, RlctPair};

/// One local coordinate chart.
///
/// Everything except `children` and `center` is fixed when the chart is
/// created.
#[derive(Clone, Debug)]
pub struct Chart {
    pub(crate) label: ChartLabel,
    pub(crate) parent: Option<ChartLabel>,
    pub(crate) children: Vec<ChartLabel>,
    pub(crate) variables: Vec<String>,
    pub(crate) substitution: Vec<SparsePoly<Q>>,
    pub(crate) map: Vec<SparsePoly<Q>>,
    pub(crate) expression: SparsePoly<Q>,
    pub(crate) factorization: Factorization,
    pub(crate) center: Option<Center>,
    pub(crate) is_normal_crossing: bool,
    pub(crate) jacobian: DenseMatrix<SparsePoly<Q>>,
    pub(crate) jacobian_determinant: SparsePoly<Q>,
    pub(crate) jacobian_factorization: Factorization,
    pub(crate) rlct: Option<Rlct>,
}

impl Chart {
    /// Builds and classifies a chart.
    ///
    /// `substitution` writes the parent's coordinates in this chart's,
    /// `map` writes the original coordinates in this chart's, and
    /// `expression` is the pullback of the original polynomial.
    pub(crate) fn build(
        label: ChartLabel,
        base_names: &[String],
        substitution: Vec<SparsePoly<Q>>,
        map: Vec<SparsePoly<Q>>,
        expression: SparsePoly<Q>,
        policy: UnmatchedFactor,
    ) -> Result<Self> {
        let variables = base_names.iter().map(|b| label.variable_name(b)).collect();
        let factorization = factor(&expression);
        let is_normal_crossing = is_normal_crossing(&factorization);

        let jacobian = jacobian(&map, expression.num_vars());
        let jacobian_determinant = jacobian.det()?;
        let jacobian_factorization = factor(&jacobian_determinant);
        let rlct = is_normal_crossing
            .then(|| extract_rlct(&factorization, &jacobian_factorization, policy));

        Ok(Self {
            parent: label.parent(),
            label,
            children: Vec::new(),
            variables,
            substitution,
            map,
            expression,
            factorization,
            center: None,
            is_normal_crossing,
            jacobian,
            jacobian_determinant,
            jacobian_factorization,
            rlct,
        })
    }

    /// The chart's label.
    #[must_use]
    pub fn label(&self) -> &ChartLabel {
        &self.label
    }

    /// Label of the parent chart, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&ChartLabel> {
        self.parent.as_ref()
    }

    /// Labels of the child charts, empty until the chart is blown up.
    #[must_use]
    pub fn children(&self) -> &[ChartLabel] {
        &self.children
    }

    /// Returns true if the chart has not been blown up.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.variables.len()
    }

    /// Names of the chart's coordinates.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The single blow-up step from the parent: parent coordinate `k` is
    /// `substitution()[k]`. The identity for the root.
    #[must_use]
    pub fn substitution(&self) -> &[SparsePoly<Q>] {
        &self.substitution
    }

    /// Original coordinate `k` written in this chart's coordinates.
    #[must_use]
    pub fn map(&self) -> &[SparsePoly<Q>] {
        &self.map
    }

    /// Pullback of the original polynomial to this chart.
    #[must_use]
    pub fn expression(&self) -> &SparsePoly<Q> {
        &self.expression
    }

    /// Factorization of [`Chart::expression`].
    #[must_use]
    pub fn factorization(&self) -> &Factorization {
        &self.factorization
    }

    /// The center used to blow this chart up, if it was.
    #[must_use]
    pub fn center(&self) -> Option<&Center> {
        self.center.as_ref()
    }

    /// Whether the pullback is in normal crossing form.
    #[must_use]
    pub fn is_normal_crossing(&self) -> bool {
        self.is_normal_crossing
    }

    /// Jacobian of [`Chart::map`].
    #[must_use]
    pub fn jacobian(&self) -> &DenseMatrix<SparsePoly<Q>> {
        &self.jacobian
    }

    /// Determinant of [`Chart::jacobian`].
    #[must_use]
    pub fn jacobian_determinant(&self) -> &SparsePoly<Q> {
        &self.jacobian_determinant
    }

    /// Factorization of [`Chart::jacobian_determinant`].
    #[must_use]
    pub fn jacobian_factorization(&self) -> &Factorization {
        &self.jacobian_factorization
    }

    /// RLCT data, present exactly for normal crossing charts.
    #[must_use]
    pub fn rlct(&self) -> Option<&Rlct> {
        self.rlct.as_ref()
    }

    /// The RLCT pairs (empty unless normal crossing).
    #[must_use]
    pub fn rlct_pairs(&self) -> &[RlctPair] {
        self.rlct.as_ref().map_or(&[], |r| r.pairs.as_slice())
    }

    /// Minimal threshold of the chart.
    #[must_use]
    pub fn rlct_min(&self) -> Option<&Q> {
        self.rlct.as_ref()?.minimum.as_ref().map(|t| &t.value)
    }

    /// Number of pairs attaining [`Chart::rlct_min`].
    #[must_use]
    pub fn multiplicity(&self) -> Option<usize> {
        self.rlct.as_ref()?.minimum.as_ref().map(|t| t.multiplicity)
    }

    /// Formats a polynomial in this chart's coordinate names.
    #[must_use]
    pub fn format(&self, p: &SparsePoly<Q>) -> String {
        p.format_with(&self.variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hironaka_poly::MonomialOrder;

    const ORDER: MonomialOrder = MonomialOrder::Grevlex;

    fn var(i: usize, n: usize) -> SparsePoly<Q> {
        SparsePoly::var(i, n, ORDER)
    }

    fn names() -> Vec<String> {
        vec!["a_1".to_string(), "b_1".to_string()]
    }

    #[test]
    fn test_root_of_monomial_is_resolved() {
        let n = 2;
        let identity: Vec<_> = (0..n).map(|i| var(i, n)).collect();
        let f = var(0, n).mul(&var(1, n));
        let chart = Chart::build(
            ChartLabel::root(),
            &names(),
            identity.clone(),
            identity,
            f,
            UnmatchedFactor::CountAsZero,
        )
        .unwrap();

        assert!(chart.is_normal_crossing());
        assert_eq!(chart.jacobian_determinant(), &SparsePoly::one(n, ORDER));
        assert_eq!(chart.rlct_min(), Some(&Q::from_integer(1)));
        assert_eq!(chart.multiplicity(), Some(2));
        assert_eq!(chart.format(chart.expression()), "a_1*b_1");
    }

    #[test]
    fn test_child_chart_after_point_blowup() {
        // Chart "1" of the blow-up of the origin for a_1 + b_1^2.
        let n = 2;
        let (a, b) = (var(0, n), var(1, n));
        let images = vec![a.clone(), a.mul(&b)];
        let f = var(0, n).add(&var(1, n).pow(2)).compose(&images);
        let label = ChartLabel::root().child(0);
        let chart = Chart::build(
            label,
            &names(),
            images.clone(),
            images,
            f,
            UnmatchedFactor::CountAsZero,
        )
        .unwrap();

        assert_eq!(chart.variables(), &["a_1^(1)", "b_1^(1)"]);
        assert_eq!(chart.parent(), Some(&ChartLabel::root()));
        assert_eq!(chart.jacobian_determinant(), &a);
        // a * (1 + a*b^2) is normal crossing.
        assert!(chart.is_normal_crossing());
        assert!(chart.rlct().is_some());
    }
}
