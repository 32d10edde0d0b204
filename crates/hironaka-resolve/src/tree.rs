//! The resolution tree and its driver.

use hironaka_factor::factor;
use hironaka_poly::SparsePoly;
use hironaka_rings::rationals::Q;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, warn};

use crate::blowup::{embedded_blowup, Center};
use crate::center::{select_center, CenterChoice};
use crate::chart::Chart;
use crate::config::{ResolveConfig, Verification};
use crate::error::{ResolveError, Result};
use crate::label::ChartLabel;
use crate::model::ReducedRankModel;
use crate::normal_crossing::is_normal_crossing;
use crate::report::ChartReport;
use crate::rlct::Threshold;
use crate::worklist::Worklist;

/// Outcome of a single [`ResolutionTree::advance`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A pending chart was blown up.
    Expanded {
        /// The chart that was blown up.
        parent: ChartLabel,
        /// Its new children, in increasing order of exceptional coordinate.
        children: Vec<ChartLabel>,
    },
    /// Nothing is pending.
    Idle,
}

/// A tree of charts produced by iterated blow-ups of `f`.
///
/// Charts are owned by the tree and addressed by label. Every chart except
/// the root names its parent, and every parent lists its children, so both
/// directions of the tree are available without shared ownership.
///
/// A failed consistency or shape check halts the tree: every later
/// mutating call returns [`ResolveError::Halted`], while inspection keeps
/// working.
#[derive(Clone, Debug)]
pub struct ResolutionTree {
    f: SparsePoly<Q>,
    names: Vec<String>,
    config: ResolveConfig,
    pub(crate) charts: FxHashMap<ChartLabel, Chart>,
    worklist: Worklist,
    halted: Option<String>,
}

impl ResolutionTree {
    /// Creates a tree whose root chart is `f` in the coordinates `names`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::DimensionMismatch`] if `names` does not match the
    /// number of variables of `f`, [`ResolveError::ZeroPolynomial`] if `f`
    /// is zero.
    pub fn new(f: SparsePoly<Q>, names: Vec<String>, config: ResolveConfig) -> Result<Self> {
        if names.len() != f.num_vars() {
            return Err(ResolveError::DimensionMismatch {
                expected: f.num_vars(),
                actual: names.len(),
            });
        }
        if f.is_zero() {
            return Err(ResolveError::ZeroPolynomial);
        }

        let n = f.num_vars();
        let identity: Vec<_> = (0..n).map(|k| SparsePoly::var(k, n, f.order())).collect();
        let root = Chart::build(
            ChartLabel::root(),
            &names,
            identity.clone(),
            identity,
            f.clone(),
            config.unmatched_factor,
        )?;

        let mut tree = Self {
            f,
            names,
            worklist: Worklist::new(config.traversal),
            config,
            charts: FxHashMap::default(),
            halted: None,
        };
        if tree.should_verify(&root) {
            check_consistency(&tree.f, &root)?;
        }
        tree.insert(root);
        Ok(tree)
    }

    /// Creates the tree of the reduced rank regression model with `hidden`
    /// hidden units.
    ///
    /// # Errors
    ///
    /// [`ResolveError::ZeroPolynomial`] for zero hidden units.
    pub fn reduced_rank(hidden: usize, config: ResolveConfig) -> Result<Self> {
        let model = ReducedRankModel::new(hidden);
        Self::new(model.f(), model.names(), config)
    }

    /// Blows up the next pending chart.
    ///
    /// With `Some(indices)` the caller supplies the center, otherwise it is
    /// chosen automatically. Nothing changes unless every child is built and
    /// passes verification.
    ///
    /// Only charts that are not in normal crossing form enter the worklist,
    /// and a chart's factorization never changes once built.
    ///
    /// # Errors
    ///
    /// Center validation errors and [`ResolveError::Stalled`] leave the tree
    /// as it was. The selector declining to blow up a pending chart is also
    /// `Stalled`. A consistency or determinant failure halts the tree.
    pub fn advance(&mut self, center: Option<&[usize]>) -> Result<Step> {
        self.ensure_live()?;
        let Some(label) = self.worklist.peek().cloned() else {
            return Ok(Step::Idle);
        };
        let chart = self.chart(&label)?;

        let center = match center {
            Some(indices) => Center::new(indices, chart.dimension())?,
            None => match select_center(&label, &chart.factorization)? {
                CenterChoice::Blowup(indices) => Center::new(&indices, chart.dimension())?,
                CenterChoice::NotNeeded => {
                    warn!(%label, "pending chart is already in normal crossing form");
                    return Err(ResolveError::Stalled { label });
                }
            },
        };

        debug!(%label, %center, "blowing up");
        let children = match self.expand(&label, &center) {
            Ok(children) => children,
            Err(err) => return Err(self.halt(err)),
        };

        self.worklist.pop();
        let child_labels: Vec<ChartLabel> = children.iter().map(|c| c.label.clone()).collect();
        if let Some(parent) = self.charts.get_mut(&label) {
            parent.center = Some(center);
            parent.children.clone_from(&child_labels);
        }
        for child in children {
            self.insert(child);
        }

        Ok(Step::Expanded {
            parent: label,
            children: child_labels,
        })
    }

    /// Blows up pending charts with automatic centers until none remain.
    ///
    /// Returns the number of blow-ups performed.
    ///
    /// # Errors
    ///
    /// [`ResolveError::StepLimit`] once `max_auto_steps` blow-ups have been
    /// performed with charts still pending, or any error of
    /// [`ResolutionTree::advance`].
    pub fn resolve(&mut self) -> Result<usize> {
        let limit = self.config.max_auto_steps;
        let mut steps = 0;
        loop {
            if steps == limit && !self.worklist.is_empty() {
                warn!(limit, pending = self.worklist.len(), "step limit reached");
                return Err(ResolveError::StepLimit { limit });
            }
            match self.advance(None) {
                Ok(Step::Expanded { .. }) => steps += 1,
                Ok(Step::Idle) => break,
                Err(err) => {
                    warn!(%err, "automatic resolution failed");
                    return Err(err);
                }
            }
        }

        info!(steps, charts = self.charts.len(), "resolution complete");
        Ok(steps)
    }

    /// Returns true if the tree is well formed and every leaf, refactored
    /// from scratch, is in normal crossing form.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotATree`] (which halts the tree) if the chart graph
    /// is malformed.
    pub fn check_resolved(&mut self) -> Result<bool> {
        if let Err(err) = self.validate_shape() {
            return Err(self.halt(err));
        }
        Ok(self
            .leaves()
            .iter()
            .all(|c| is_normal_crossing(&factor(&c.expression))))
    }

    /// Checks that the charts form a single tree rooted at the root label
    /// with matching parent and child links.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotATree`] describing the first problem found.
    pub fn validate_shape(&self) -> Result<()> {
        let not_a_tree = |reason: String| Err(ResolveError::NotATree { reason });

        let roots: Vec<&ChartLabel> = self
            .charts
            .values()
            .filter(|c| c.parent.is_none())
            .map(|c| &c.label)
            .collect();
        match roots.as_slice() {
            [root] if root.is_root() => {}
            [other] => return not_a_tree(format!("parentless chart '{other}' is not the root")),
            _ => return not_a_tree(format!("{} charts have no parent", roots.len())),
        }

        for chart in self.charts.values() {
            if let Some(parent) = &chart.parent {
                let Some(p) = self.charts.get(parent) else {
                    return not_a_tree(format!("parent '{parent}' of '{}' is missing", chart.label));
                };
                if !p.children.contains(&chart.label) {
                    return not_a_tree(format!(
                        "'{parent}' does not list '{}' as a child",
                        chart.label
                    ));
                }
            }
            for child in &chart.children {
                match self.charts.get(child) {
                    None => {
                        return not_a_tree(format!("child '{child}' of '{}' is missing", chart.label))
                    }
                    Some(c) if c.parent.as_ref() != Some(&chart.label) => {
                        return not_a_tree(format!(
                            "child '{child}' does not name '{}' as its parent",
                            chart.label
                        ))
                    }
                    Some(_) => {}
                }
            }
        }

        let mut seen = FxHashSet::default();
        let mut stack = vec![ChartLabel::root()];
        while let Some(label) = stack.pop() {
            if !seen.insert(label.clone()) {
                return not_a_tree(format!("chart '{label}' is reached twice"));
            }
            if let Some(chart) = self.charts.get(&label) {
                stack.extend(chart.children.iter().cloned());
            }
        }
        if seen.len() != self.charts.len() {
            return not_a_tree(format!(
                "{} charts are unreachable from the root",
                self.charts.len() - seen.len()
            ));
        }
        Ok(())
    }

    /// Recomputes the pullback of `f` through the chart's map and compares
    /// it with the tracked expression and its factorization.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownChart`], or [`ResolveError::InconsistentChart`]
    /// which halts the tree.
    pub fn verify_chart(&mut self, label: &ChartLabel) -> Result<()> {
        let result = check_consistency(&self.f, self.chart(label)?);
        result.map_err(|err| self.halt(err))
    }

    /// Verifies every chart in preorder.
    ///
    /// # Errors
    ///
    /// The first failure of [`ResolutionTree::verify_chart`].
    pub fn verify_all(&mut self) -> Result<()> {
        let labels: Vec<ChartLabel> = self.charts().into_iter().map(|c| c.label.clone()).collect();
        labels.iter().try_for_each(|label| self.verify_chart(label))
    }

    /// Minimum threshold over all resolved leaves, with the largest number
    /// of pairs attaining it in any single leaf.
    ///
    /// `None` while charts are pending, since an unexpanded leaf may still
    /// lower the minimum.
    #[must_use]
    pub fn learning_coefficient(&self) -> Option<Threshold> {
        if !self.worklist.is_empty() {
            return None;
        }
        let minima: Vec<&Threshold> = self
            .leaves()
            .into_iter()
            .filter_map(|c| c.rlct.as_ref()?.minimum.as_ref())
            .collect();
        let value = minima.iter().map(|t| &t.value).min()?.clone();
        let multiplicity = minima
            .iter()
            .filter(|t| t.value == value)
            .map(|t| t.multiplicity)
            .max()
            .unwrap_or(0);
        Some(Threshold { value, multiplicity })
    }

    /// One report per chart, in preorder.
    #[must_use]
    pub fn report(&self) -> Vec<ChartReport> {
        self.charts()
            .into_iter()
            .map(|c| ChartReport::from_chart(c, &self.names))
            .collect()
    }

    /// The polynomial being resolved.
    #[must_use]
    pub fn polynomial(&self) -> &SparsePoly<Q> {
        &self.f
    }

    /// Names of the original coordinates.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The configuration the tree was built with.
    #[must_use]
    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// The root chart.
    #[must_use]
    pub fn root(&self) -> &Chart {
        &self.charts[&ChartLabel::root()]
    }

    /// Looks up a chart.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownChart`] if no chart has this label.
    pub fn chart(&self, label: &ChartLabel) -> Result<&Chart> {
        self.charts
            .get(label)
            .ok_or_else(|| ResolveError::UnknownChart { label: label.clone() })
    }

    /// All charts in preorder, children in creation order.
    #[must_use]
    pub fn charts(&self) -> Vec<&Chart> {
        let mut out = Vec::with_capacity(self.charts.len());
        let mut stack = vec![ChartLabel::root()];
        while let Some(label) = stack.pop() {
            if let Some(chart) = self.charts.get(&label) {
                stack.extend(chart.children.iter().rev().cloned());
                out.push(chart);
            }
        }
        out
    }

    /// Charts without children, in preorder.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Chart> {
        self.charts().into_iter().filter(|c| c.is_leaf()).collect()
    }

    /// The children of a chart.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownChart`] if no chart has this label.
    pub fn children(&self, label: &ChartLabel) -> Result<Vec<&Chart>> {
        self.chart(label)?
            .children
            .iter()
            .map(|child| self.chart(child))
            .collect()
    }

    /// The parent of a chart, `None` for the root.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownChart`] if no chart has this label.
    pub fn parent(&self, label: &ChartLabel) -> Result<Option<&Chart>> {
        match &self.chart(label)?.parent {
            Some(parent) => self.chart(parent).map(Some),
            None => Ok(None),
        }
    }

    /// Labels of pending charts.
    pub fn pending(&self) -> impl Iterator<Item = &ChartLabel> + '_ {
        self.worklist.iter()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.worklist.is_empty()
    }

    /// Number of charts.
    #[must_use]
    pub fn num_charts(&self) -> usize {
        self.charts.len()
    }

    /// Why the tree halted, if it did.
    #[must_use]
    pub fn halt_reason(&self) -> Option<&str> {
        self.halted.as_deref()
    }

    fn ensure_live(&self) -> Result<()> {
        match &self.halted {
            Some(reason) => Err(ResolveError::Halted {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    fn halt(&mut self, err: ResolveError) -> ResolveError {
        if !err.is_recoverable() && self.halted.is_none() {
            warn!(%err, "halting resolution tree");
            self.halted = Some(err.to_string());
        }
        err
    }

    fn should_verify(&self, chart: &Chart) -> bool {
        match self.config.verification {
            Verification::Off => false,
            Verification::Leaves => chart.is_normal_crossing,
            Verification::EveryChart => true,
        }
    }

    /// Builds and verifies the children of `label` without touching the tree.
    fn expand(&self, label: &ChartLabel, center: &Center) -> Result<Vec<Chart>> {
        let parent = self.chart(label)?;
        let n = parent.dimension();

        embedded_blowup(n, center, self.f.order())
            .into_iter()
            .map(|sub| -> Result<Chart> {
                let map = parent.map.iter().map(|g| g.compose(&sub.images)).collect();
                let expression = parent.expression.compose(&sub.images);
                let child = Chart::build(
                    label.child(sub.exceptional),
                    &self.names,
                    sub.images,
                    map,
                    expression,
                    self.config.unmatched_factor,
                )?;
                if self.should_verify(&child) {
                    check_consistency(&self.f, &child)?;
                }
                Ok(child)
            })
            .collect()
    }

    fn insert(&mut self, chart: Chart) {
        debug!(
            label = %chart.label,
            normal_crossing = chart.is_normal_crossing,
            expression = %chart.format(&chart.expression),
            "created chart"
        );
        if !chart.is_normal_crossing {
            self.worklist.push(chart.label.clone());
        }
        self.charts.insert(chart.label.clone(), chart);
    }
}

fn check_consistency(f: &SparsePoly<Q>, chart: &Chart) -> Result<()> {
    let inconsistent = |reason: &str| {
        Err(ResolveError::InconsistentChart {
            label: chart.label.clone(),
            reason: reason.to_string(),
        })
    };

    if chart.map.len() != f.num_vars() {
        return inconsistent("map has the wrong number of components");
    }
    if f.compose(&chart.map) != chart.expression {
        return inconsistent("pullback through the map differs from the tracked expression");
    }
    if chart.factorization.expand() != chart.expression {
        return inconsistent("factorization does not expand to the expression");
    }
    Ok(())
}
