//! Jacobian matrices and their determinants.

use hironaka_poly::algorithms::div_exact;
use hironaka_poly::{MonomialOrder, SparsePoly};
use hironaka_rings::rationals::Q;
use thiserror::Error;

use crate::dense_matrix::DenseMatrix;

/// Errors from polynomial matrix computations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// The determinant was requested for a non-square matrix.
    #[error("determinant of a non-square {rows}x{cols} matrix")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// The determinant of a matrix without entries has no ambient ring.
    #[error("determinant of an empty matrix")]
    Empty,

    /// A Bareiss step produced a non-exact division.
    #[error("inexact division in elimination step {step}")]
    InexactDivision {
        /// Zero-based elimination step.
        step: usize,
    },
}

/// Builds the Jacobian of the map `x -> (images[0](x), ..., images[m-1](x))`.
///
/// Entry `(r, c)` is the partial derivative of `images[r]` with respect to
/// variable `c`, for `c < num_vars`.
#[must_use]
pub fn jacobian(images: &[SparsePoly<Q>], num_vars: usize) -> DenseMatrix<SparsePoly<Q>> {
    DenseMatrix::from_fn(images.len(), num_vars, |r, c| images[r].derivative(c))
}

impl DenseMatrix<SparsePoly<Q>> {
    /// Determinant by fraction-free (Bareiss) elimination.
    ///
    /// Every intermediate entry is a minor of the input, so the divisions by
    /// the previous pivot are exact; a failure to divide is reported as
    /// [`LinalgError::InexactDivision`].
    ///
    /// # Errors
    ///
    /// Returns an error for a non-square or empty matrix, or an inexact
    /// division.
    pub fn det(&self) -> Result<SparsePoly<Q>, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.num_rows(),
                cols: self.num_cols(),
            });
        }
        let n = self.num_rows();
        if n == 0 {
            return Err(LinalgError::Empty);
        }

        let zero = SparsePoly::zero(self[(0, 0)].num_vars(), self[(0, 0)].order());
        let mut m = self.clone();
        let mut previous: Option<SparsePoly<Q>> = None;
        let mut negate = false;

        for k in 0..n - 1 {
            // Find pivot
            let Some(pivot_row) = (k..n).find(|&r| !m[(r, k)].is_zero()) else {
                return Ok(zero);
            };
            if pivot_row != k {
                m.swap_rows(k, pivot_row);
                negate = !negate;
            }

            let pivot = m[(k, k)].clone();
            for i in k + 1..n {
                for j in k + 1..n {
                    let cross = m[(i, j)].mul(&pivot).sub(&m[(i, k)].mul(&m[(k, j)]));
                    m[(i, j)] = match &previous {
                        None => cross,
                        Some(p) => div_exact(&cross, p).ok_or(LinalgError::InexactDivision { step: k })?,
                    };
                }
                m[(i, k)] = zero.clone();
            }
            previous = Some(pivot);
        }

        let det = m[(n - 1, n - 1)].clone();
        Ok(if negate { det.neg() } else { det })
    }

    /// The identity matrix over polynomials in `num_vars` variables.
    #[must_use]
    pub fn identity(n: usize, num_vars: usize, order: MonomialOrder) -> Self {
        Self::from_fn(n, n, |r, c| {
            if r == c {
                SparsePoly::one(num_vars, order)
            } else {
                SparsePoly::zero(num_vars, order)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: MonomialOrder = MonomialOrder::Grevlex;

    fn var(i: usize, n: usize) -> SparsePoly<Q> {
        SparsePoly::var(i, n, ORDER)
    }

    fn constant(c: i64, n: usize) -> SparsePoly<Q> {
        SparsePoly::constant(Q::from_integer(c), n, ORDER)
    }

    #[test]
    fn test_identity_det() {
        let id = DenseMatrix::identity(3, 3, ORDER);
        assert_eq!(id.det(), Ok(constant(1, 3)));
    }

    #[test]
    fn test_jacobian_of_blowup_chart() {
        // (a, b) -> (a, a*b): the Jacobian determinant is a.
        let n = 2;
        let (a, b) = (var(0, n), var(1, n));
        let images = vec![a.clone(), a.mul(&b)];
        let jac = jacobian(&images, n);

        assert_eq!(jac[(0, 0)], constant(1, n));
        assert!(jac[(0, 1)].is_zero());
        assert_eq!(jac[(1, 0)], b);
        assert_eq!(jac[(1, 1)], a);
        assert_eq!(jac.det(), Ok(a));
    }

    #[test]
    fn test_det_full_blowup_four_vars() {
        // Chart exceptional in x0 of the blow-up of the origin in A^4:
        // the Jacobian determinant is x0^3.
        let n = 4;
        let v: Vec<_> = (0..n).map(|i| var(i, n)).collect();
        let images: Vec<_> = (0..n)
            .map(|j| if j == 0 { v[0].clone() } else { v[0].mul(&v[j]) })
            .collect();
        assert_eq!(jacobian(&images, n).det(), Ok(v[0].pow(3)));
    }

    #[test]
    fn test_det_needs_pivoting() {
        // [[0, x], [y, 1]] has determinant -x*y.
        let n = 2;
        let (x, y) = (var(0, n), var(1, n));
        let m = DenseMatrix::from_rows(vec![
            vec![SparsePoly::zero(n, ORDER), x.clone()],
            vec![y.clone(), constant(1, n)],
        ]);
        assert_eq!(m.det(), Ok(x.mul(&y).neg()));
    }

    #[test]
    fn test_det_three_by_three() {
        // Cofactor expansion of [[x, 1, 0], [1, y, 1], [0, 1, x]]
        // gives x*(x*y - 1) - x = x^2*y - 2x.
        let n = 2;
        let (x, y) = (var(0, n), var(1, n));
        let (zero, one) = (SparsePoly::zero(n, ORDER), constant(1, n));
        let m = DenseMatrix::from_rows(vec![
            vec![x.clone(), one.clone(), zero.clone()],
            vec![one.clone(), y.clone(), one.clone()],
            vec![zero, one, x.clone()],
        ]);
        let expected = x.pow(2).mul(&y).sub(&x.scale(&Q::from_integer(2)));
        assert_eq!(m.det(), Ok(expected));
    }

    #[test]
    fn test_det_singular_and_errors() {
        let n = 1;
        let x = var(0, n);
        let zero = SparsePoly::zero(n, ORDER);
        let m = DenseMatrix::from_rows(vec![vec![zero.clone(), x.clone()], vec![zero.clone(), x]]);
        assert_eq!(m.det(), Ok(zero));

        let wide = DenseMatrix::from_rows(vec![vec![constant(1, n), constant(2, n)]]);
        assert_eq!(wide.det(), Err(LinalgError::NotSquare { rows: 1, cols: 2 }));

        let empty: DenseMatrix<SparsePoly<Q>> = DenseMatrix::from_rows(vec![]);
        assert_eq!(empty.det(), Err(LinalgError::Empty));
    }
}
