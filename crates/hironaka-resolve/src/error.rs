//! Errors raised by the resolution engine.

use hironaka_linalg::LinalgError;
use thiserror::Error;

use crate::label::ChartLabel;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur while growing or inspecting a resolution tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A blow-up center with no coordinates.
    #[error("blow-up center is empty")]
    EmptyCenter,

    /// A blow-up center naming a coordinate the chart does not have.
    #[error("coordinate index {index} out of range for a chart with {dimension} coordinates")]
    CenterOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of coordinates of the chart.
        dimension: usize,
    },

    /// The pullback recomputed from a chart's map disagrees with its
    /// tracked expression.
    #[error("chart '{label}' is inconsistent: {reason}")]
    InconsistentChart {
        /// The offending chart.
        label: ChartLabel,
        /// What disagreed.
        reason: String,
    },

    /// The center heuristic found nothing to blow up on a chart that is
    /// not in normal crossing form.
    #[error("automatic center selection stalled at chart '{label}'")]
    Stalled {
        /// The chart the heuristic gave up on.
        label: ChartLabel,
    },

    /// Automatic resolution did not finish within the configured number of
    /// blow-up steps.
    #[error("automatic resolution exceeded {limit} steps")]
    StepLimit {
        /// The configured limit.
        limit: usize,
    },

    /// The chart graph is not a rooted tree.
    #[error("chart graph is not a tree: {reason}")]
    NotATree {
        /// What is wrong with the graph.
        reason: String,
    },

    /// An earlier unrecoverable failure froze the tree.
    #[error("resolution tree is halted after an earlier failure: {reason}")]
    Halted {
        /// Description of the failure that halted the tree.
        reason: String,
    },

    /// No chart carries the requested label.
    #[error("no chart labelled '{label}'")]
    UnknownChart {
        /// The requested label.
        label: ChartLabel,
    },

    /// The zero polynomial has no singularities to resolve.
    #[error("cannot resolve the zero polynomial")]
    ZeroPolynomial,

    /// Variable names do not match the number of variables.
    #[error("expected {expected} variable names, got {actual}")]
    DimensionMismatch {
        /// Number of variables of the polynomial.
        expected: usize,
        /// Number of names supplied.
        actual: usize,
    },

    /// Jacobian determinant computation failed.
    #[error("jacobian determinant: {0}")]
    Linalg(#[from] LinalgError),
}

impl ResolveError {
    /// Whether a driver may carry on with the same tree after this error.
    ///
    /// Malformed input and stalled or exhausted automatic resolution leave
    /// the tree untouched. Consistency and tree-shape failures do not.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            ResolveError::EmptyCenter
            | ResolveError::CenterOutOfRange { .. }
            | ResolveError::Stalled { .. }
            | ResolveError::StepLimit { .. }
            | ResolveError::UnknownChart { .. }
            | ResolveError::ZeroPolynomial
            | ResolveError::DimensionMismatch { .. } => true,
            ResolveError::InconsistentChart { .. }
            | ResolveError::NotATree { .. }
            | ResolveError::Halted { .. }
            | ResolveError::Linalg(_) => false,
        }
    }
}
