//! Serializable chart summaries for external viewers.

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::label::ChartLabel;

/// A chart rendered with its own coordinate names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartReport {
    /// The chart's label.
    pub label: ChartLabel,
    /// Label of the parent, `None` for the root.
    pub parent: Option<ChartLabel>,
    /// Labels of the children.
    pub children: Vec<ChartLabel>,
    /// Coordinate names of the chart.
    pub variables: Vec<String>,
    /// The pullback of the original polynomial.
    pub expression: String,
    /// The pullback in factored form.
    pub factored: String,
    /// Pairs of original coordinate name and its image in this chart.
    pub map: Vec<(String, String)>,
    /// Coordinate indices of the center used on this chart, if any.
    pub center: Option<Vec<usize>>,
    /// Rows of the Jacobian matrix.
    pub jacobian: Vec<Vec<String>>,
    /// Determinant of the Jacobian matrix.
    pub jacobian_determinant: String,
    /// Whether the pullback is in normal crossing form.
    pub is_normal_crossing: bool,
    /// Pairs of exceptional factor and threshold.
    pub rlct_pairs: Vec<(String, String)>,
    /// Minimal threshold.
    pub rlct_min: Option<String>,
    /// Number of pairs attaining the minimal threshold.
    pub multiplicity: Option<usize>,
}

impl ChartReport {
    /// Summarizes `chart`; `original_names` name the root coordinates.
    #[must_use]
    pub fn from_chart(chart: &Chart, original_names: &[String]) -> Self {
        Self {
            label: chart.label().clone(),
            parent: chart.parent().cloned(),
            children: chart.children().to_vec(),
            variables: chart.variables().to_vec(),
            expression: chart.format(chart.expression()),
            factored: chart.factorization().format_with(chart.variables()),
            map: original_names
                .iter()
                .cloned()
                .zip(chart.map().iter().map(|g| chart.format(g)))
                .collect(),
            center: chart.center().map(|c| c.indices().to_vec()),
            jacobian: chart
                .jacobian()
                .rows()
                .map(|row| row.iter().map(|g| chart.format(g)).collect::<Vec<_>>())
                .collect(),
            jacobian_determinant: chart.format(chart.jacobian_determinant()),
            is_normal_crossing: chart.is_normal_crossing(),
            rlct_pairs: chart
                .rlct_pairs()
                .iter()
                .map(|p| (chart.format(&p.factor), p.threshold.to_string()))
                .collect(),
            rlct_min: chart.rlct_min().map(ToString::to_string),
            multiplicity: chart.multiplicity(),
        }
    }
}
