//! # hironaka-poly
//!
//! Sparse multivariate polynomial arithmetic for the blow-up engine.
//!
//! This crate provides:
//! - Exponent-vector monomials and the usual monomial orders
//! - Sparse multivariate polynomials in canonical (expanded) form
//! - Dense univariate polynomials with Euclidean division and Bezout
//!   coefficients over a field
//! - Partial derivatives and substitution of variables by polynomials
//! - Exact division, pseudo-remainders and multivariate GCD over Q
//!
//! Polynomials carry no variable names: a polynomial in `n` variables is a
//! function of the indices `0..n`, and callers that need names (the chart
//! bookkeeping) supply them when formatting.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod dense;
pub mod monomial;
pub mod ordering;
pub mod sparse;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use sparse::SparsePoly;
