//! Embedded blow-ups of coordinate subspaces.
//!
//! Blowing up the subspace `{x_j = 0 : j in C}` is covered by one affine
//! chart per `i in C`. In the chart of `i` the new coordinate `x'_i` defines
//! the exceptional divisor and
//!
//! ```text
//! x_i -> x'_i
//! x_j -> x'_i * x'_j     (j in C, j != i)
//! x_k -> x'_k            (k not in C)
//! ```
//!
//! Coordinates keep their positions, so coordinate `k` of a child chart is
//! the descendant of coordinate `k` of its parent.

use std::fmt;

use hironaka_poly::{MonomialOrder, SparsePoly};
use hironaka_rings::rationals::Q;

use crate::error::{ResolveError, Result};

/// A blow-up center: a nonempty set of coordinate indices of one chart.
///
/// Repeated indices collapse; the indices are kept sorted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Center(Vec<usize>);

impl Center {
    /// Validates `indices` against a chart with `dimension` coordinates.
    ///
    /// # Errors
    ///
    /// [`ResolveError::EmptyCenter`] for no indices and
    /// [`ResolveError::CenterOutOfRange`] for an index `>= dimension`.
    pub fn new(indices: &[usize], dimension: usize) -> Result<Self> {
        if indices.is_empty() {
            return Err(ResolveError::EmptyCenter);
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= dimension) {
            return Err(ResolveError::CenterOutOfRange { index, dimension });
        }

        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();
        Ok(Self(indices))
    }

    /// The center containing every coordinate: the blow-up of the origin.
    ///
    /// # Errors
    ///
    /// [`ResolveError::EmptyCenter`] when `dimension` is zero.
    pub fn full(dimension: usize) -> Result<Self> {
        let all: Vec<usize> = (0..dimension).collect();
        Self::new(&all, dimension)
    }

    /// The sorted coordinate indices.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of coordinates, which is also the number of charts produced.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: centers are nonempty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if coordinate `i` belongs to the center.
    #[must_use]
    pub fn contains(&self, i: usize) -> bool {
        self.0.binary_search(&i).is_ok()
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// The substitution defining one chart of a blow-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartSubstitution {
    /// Index of the exceptional coordinate of this chart.
    pub exceptional: usize,
    /// `images[k]` is the parent coordinate `k` written in the child's
    /// coordinates.
    pub images: Vec<SparsePoly<Q>>,
}

/// Produces one chart substitution per coordinate of `center`, in
/// increasing order of the exceptional coordinate.
#[must_use]
pub fn embedded_blowup(num_vars: usize, center: &Center, order: MonomialOrder) -> Vec<ChartSubstitution> {
    let var = |k: usize| SparsePoly::var(k, num_vars, order);

    center
        .indices()
        .iter()
        .map(|&i| {
            let images = (0..num_vars)
                .map(|k| {
                    if k != i && center.contains(k) {
                        var(i).mul(&var(k))
                    } else {
                        var(k)
                    }
                })
                .collect();
            ChartSubstitution { exceptional: i, images }
        })
        .collect()
}
