//! Polynomial algorithms.
//!
//! - `division`: exact multivariate division and pseudo-remainders
//! - `gcd`: primitive normalisation, content and multivariate GCD over Q

pub mod division;
pub mod gcd;

pub use division::{div_exact, pseudo_remainder};
pub use gcd::{content_in, gcd, primitive_normalization, primitive_part_in};
