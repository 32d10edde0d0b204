//! # Hironaka
//!
//! Resolution of singularities of polynomials over Q by iterated blow-ups
//! of coordinate subspaces, with the real log-canonical threshold (RLCT)
//! read off every resolved chart.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: Big integers and rationals throughout
//! - **Sparse Polynomials**: Multivariate arithmetic, substitution and derivatives
//! - **Factorization**: Monomial content, squarefree parts and content splitting
//! - **Jacobians**: Fraction-free determinants of polynomial matrices
//! - **Resolution Trees**: Manual or automatic blow-ups with consistency checks
//!
//! ## Quick Start
//!
//! ```rust
//! use hironaka::prelude::*;
//!
//! let mut tree = ResolutionTree::reduced_rank(2, ResolveConfig::default()).unwrap();
//! tree.resolve().unwrap();
//! let lc = tree.learning_coefficient().unwrap();
//! assert_eq!(lc.value, Q::from_integer(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use hironaka_factor as factor;
pub use hironaka_integers as integers;
pub use hironaka_linalg as linalg;
pub use hironaka_poly as poly;
pub use hironaka_resolve as resolve;
pub use hironaka_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use hironaka_factor::{factor, Factorization};
    pub use hironaka_integers::{Integer, Rational};
    pub use hironaka_poly::{Monomial, MonomialOrder, SparsePoly};
    pub use hironaka_resolve::{
        Chart, ChartLabel, ChartReport, ReducedRankModel, ResolutionTree, ResolveConfig,
        ResolveError, Step, Threshold, Traversal,
    };
    pub use hironaka_rings::{Field, Ring, Q};
}
