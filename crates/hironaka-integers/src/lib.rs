//! # hironaka-integers
//!
//! Exact integer and rational arithmetic for the resolution engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//!
//! Every quantity the engine reports (polynomial coefficients, log-canonical
//! thresholds) is exact; nothing in the workspace touches floating point.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
