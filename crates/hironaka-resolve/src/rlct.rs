//! Real log-canonical thresholds of normal crossing charts.
//!
//! In a chart where the pullback of `f` is `x_1^a_1 * ... * x_r^a_r * unit`
//! and the Jacobian determinant of the change of coordinates is
//! `x_1^b_1 * ... * x_r^b_r * unit'`, each exceptional coordinate contributes
//! the threshold `(b_i + 1) / a_i`. The minimum over a chart, and the number
//! of coordinates attaining it, are the chart's contribution to the learning
//! coefficient and its multiplicity.

use hironaka_factor::Factorization;
use hironaka_poly::SparsePoly;
use hironaka_rings::rationals::Q;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::UnmatchedFactor;

/// The threshold contributed by one exceptional coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RlctPair {
    /// Index of the exceptional coordinate.
    pub coordinate: usize,
    /// The exceptional factor `x_i^a` of the pullback.
    pub factor: SparsePoly<Q>,
    /// `a`: power of the coordinate in the pullback.
    pub pullback_multiplicity: u32,
    /// `b`: power of the coordinate in the Jacobian determinant.
    pub jacobian_multiplicity: u32,
    /// `(b + 1) / a`.
    pub threshold: Q,
}

/// A minimal threshold together with the number of times it is attained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Threshold {
    /// The threshold value.
    pub value: Q,
    /// How many pairs (or charts) attain it.
    pub multiplicity: usize,
}

/// RLCT data of one normal crossing chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rlct {
    /// One pair per matched exceptional factor, by coordinate index.
    pub pairs: Vec<RlctPair>,
    /// Minimum threshold over `pairs`, `None` when there are no pairs.
    pub minimum: Option<Threshold>,
}

impl Rlct {
    /// Collects pairs and computes their minimum.
    #[must_use]
    pub fn from_pairs(pairs: Vec<RlctPair>) -> Self {
        let minimum = pairs
            .iter()
            .map(|p| &p.threshold)
            .min()
            .map(|value| Threshold {
                value: value.clone(),
                multiplicity: pairs.iter().filter(|p| p.threshold == *value).count(),
            });
        Self { pairs, minimum }
    }
}

/// Pairs every exceptional factor of the pullback with its power in the
/// Jacobian determinant.
///
/// Factors are matched through a map from coordinate index to multiplicity
/// built once from the determinant. A zero determinant matches nothing.
#[must_use]
pub fn extract_rlct(
    pullback: &Factorization,
    jacobian_determinant: &Factorization,
    policy: UnmatchedFactor,
) -> Rlct {
    let jacobian: FxHashMap<usize, u32> = jacobian_determinant.coordinate_factors().collect();

    let pairs = pullback
        .factors
        .iter()
        .filter_map(|f| f.coordinate().map(|coordinate| (coordinate, f)))
        .filter_map(|(coordinate, f)| {
            let a = f.multiplicity;
            let b = match (jacobian.get(&coordinate), policy) {
                (Some(&b), _) => b,
                (None, UnmatchedFactor::CountAsZero) if !jacobian_determinant.is_zero() => 0,
                _ => {
                    debug!(coordinate, "exceptional factor has no Jacobian counterpart");
                    return None;
                }
            };
            Some(RlctPair {
                coordinate,
                factor: f.poly.pow(a),
                pullback_multiplicity: a,
                jacobian_multiplicity: b,
                threshold: Q::new(i64::from(b) + 1, i64::from(a)),
            })
        })
        .collect();

    Rlct::from_pairs(pairs)
}
