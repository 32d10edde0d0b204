//! # hironaka-linalg
//!
//! Dense matrices with polynomial entries, as needed for the volume-form
//! correction of a change of coordinates.
//!
//! This crate provides:
//! - A row-major dense matrix container
//! - Jacobian matrices of polynomial maps
//! - Fraction-free (Bareiss) determinants with exact polynomial division

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod jacobian;

pub use dense_matrix::DenseMatrix;
pub use jacobian::{jacobian, LinalgError};
