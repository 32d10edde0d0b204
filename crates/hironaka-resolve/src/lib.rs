//! # hironaka-resolve
//!
//! Resolution of the singularities of a polynomial by iterated blow-ups of
//! coordinate subspaces, and extraction of the real log-canonical threshold
//! (RLCT) at every resolved chart.
//!
//! The engine grows a tree of charts. Every chart records the accumulated
//! change of coordinates back to the original space, the pullback of the
//! polynomial, and the Jacobian determinant of the change of coordinates.
//! Charts whose pullback is not yet in normal crossing form sit on a
//! worklist until a driver (or the automatic center heuristic) blows them
//! up further.
//!
//! ```
//! use hironaka_resolve::{ResolutionTree, ResolveConfig};
//!
//! let mut tree = ResolutionTree::reduced_rank(2, ResolveConfig::default()).unwrap();
//! tree.resolve().unwrap();
//! assert!(tree.is_resolved());
//! let lc = tree.learning_coefficient().unwrap();
//! assert!(lc.multiplicity >= 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod blowup;
pub mod center;
pub mod chart;
pub mod config;
pub mod error;
pub mod label;
pub mod model;
pub mod normal_crossing;
pub mod report;
pub mod rlct;
pub mod tree;
pub mod worklist;

#[cfg(test)]
mod proptests;

pub use blowup::{embedded_blowup, Center, ChartSubstitution};
pub use center::{select_center, CenterChoice};
pub use chart::Chart;
pub use config::{ResolveConfig, Traversal, UnmatchedFactor, Verification};
pub use error::{ResolveError, Result};
pub use label::{ChartLabel, ParseLabelError};
pub use model::ReducedRankModel;
pub use normal_crossing::{is_exceptional, is_normal_crossing};
pub use report::ChartReport;
pub use rlct::{extract_rlct, Rlct, RlctPair, Threshold};
pub use tree::{ResolutionTree, Step};
pub use worklist::Worklist;
