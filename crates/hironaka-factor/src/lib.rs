//! Polynomial factorization for the blow-up engine.
//!
//! This crate provides:
//! - **Squarefree decomposition**: Yun's algorithm in a main variable,
//!   recursing into the content
//! - **Factorization**: numeric unit, coordinate monomial factors and
//!   irreducible factors over Q with multiplicities
//! - **Univariate factorization**: Zassenhaus over a prime field with
//!   Hensel lifting and recombination
//! - **Multivariate lifting**: specialisation to one variable and
//!   `(y - a)`-adic lifting of the image factors
//!
//! Coordinate monomials `x_i` are always split off exactly. Every other
//! factor is irreducible over Q and flagged so, unless no evaluation point
//! keeping it squarefree was found, in which case it stays whole and
//! uncertified.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod modular;
pub mod multivariate;
mod multivariate_hensel;
pub mod squarefree;
mod univariate;

#[cfg(test)]
mod proptests;

// Re-exports
pub use multivariate::{factor, Factor, Factorization};
pub use squarefree::{squarefree_factorization, SquarefreeFactor, SquarefreeFactorization};
