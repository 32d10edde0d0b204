//! # hironaka-rings
//!
//! Algebraic structures for the blow-up engine.
//!
//! This crate provides:
//! - Abstract traits: `Ring` and `Field`
//! - The rational field `Q`, the only coefficient field the engine uses
//! - The integers `Z`, for coefficient lifting during factorization
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

pub use integers::Z;
pub use rationals::Q;
pub use traits::{Field, Ring};
