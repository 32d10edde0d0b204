//! Automatic choice of blow-up centers.
//!
//! The heuristic takes the first non-exceptional factor that vanishes at
//! the origin and picks one variable from each of its terms. Blowing up
//! the span of those coordinates makes the factor a unit in at least one of
//! the resulting charts. It is not minimal and nothing bounds the number of
//! steps it needs.

use hironaka_factor::Factorization;

use crate::error::{ResolveError, Result};
use crate::label::ChartLabel;
use crate::normal_crossing::{is_exceptional, is_normal_crossing, vanishes_at_origin};

/// Outcome of automatic center selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CenterChoice {
    /// The expression is already in normal crossing form.
    NotNeeded,
    /// One coordinate per term of the offending factor. Indices may repeat;
    /// the generator treats the center as a set.
    Blowup(Vec<usize>),
}

/// Proposes a center for the chart `label` with factored expression
/// `factorization`.
///
/// # Errors
///
/// [`ResolveError::Stalled`] if the expression is not in normal crossing
/// form yet has no non-exceptional factor through the origin.
pub fn select_center(label: &ChartLabel, factorization: &Factorization) -> Result<CenterChoice> {
    if is_normal_crossing(factorization) {
        return Ok(CenterChoice::NotNeeded);
    }

    let offending = factorization
        .factors
        .iter()
        .find(|f| !is_exceptional(&f.poly) && vanishes_at_origin(f))
        .ok_or_else(|| ResolveError::Stalled { label: label.clone() })?;

    let indices = offending
        .poly
        .terms()
        .iter()
        .filter_map(|(m, _)| m.support().next())
        .collect::<Vec<_>>();

    if indices.is_empty() {
        return Err(ResolveError::Stalled { label: label.clone() });
    }
    Ok(CenterChoice::Blowup(indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hironaka_factor::factor;
    use hironaka_poly::{MonomialOrder, SparsePoly};
    use hironaka_rings::rationals::Q;

    const ORDER: MonomialOrder = MonomialOrder::Grevlex;

    fn var(i: usize, n: usize) -> SparsePoly<Q> {
        SparsePoly::var(i, n, ORDER)
    }

    #[test]
    fn test_not_needed() {
        let f = var(0, 2).pow(2).mul(&var(1, 2));
        let choice = select_center(&ChartLabel::root(), &factor(&f));
        assert_eq!(choice, Ok(CenterChoice::NotNeeded));
    }

    #[test]
    fn test_one_variable_per_term() {
        // a_1*b_1 + a_2*b_2: terms a_1*b_1 and a_2*b_2 give {0, 2}.
        let n = 4;
        let v: Vec<_> = (0..n).map(|i| var(i, n)).collect();
        let f = v[0].mul(&v[1]).add(&v[2].mul(&v[3]));

        let choice = select_center(&ChartLabel::root(), &factor(&f));
        assert_eq!(choice, Ok(CenterChoice::Blowup(vec![0, 2])));
    }

    #[test]
    fn test_skips_exceptional_and_unit_factors() {
        // x^2 * (1 + y) * (y + z*x)
        let n = 3;
        let (x, y, z) = (var(0, n), var(1, n), var(2, n));
        let one = SparsePoly::one(n, ORDER);
        let f = x.pow(2).mul(&one.add(&y)).mul(&y.add(&z.mul(&x)));

        let Ok(CenterChoice::Blowup(indices)) = select_center(&ChartLabel::root(), &factor(&f)) else {
            panic!("expected a center");
        };
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1]);
    }

    #[test]
    fn test_zero_expression_stalls() {
        let zero = SparsePoly::<Q>::zero(2, ORDER);
        let label = ChartLabel::root().child(0);
        assert_eq!(
            select_center(&label, &factor(&zero)),
            Err(ResolveError::Stalled { label: label.clone() })
        );
    }
}
