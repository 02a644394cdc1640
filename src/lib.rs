//----------------------------------------
// Root lib
//----------------------------------------
//! Power and sample size for two-arm, parallel, cluster-randomized trials
//! with a binary outcome. Given any seven of alpha, power, clusters per arm,
//! mean cluster size, CV of cluster sizes, the two arm proportions, and the
//! ICC, solves for the eighth.
//!
//! ```no_run
//! use cpa_binary::compute::{DesignParameters, SolveOptions, solve};
//!
//! let params = DesignParameters {
//!     power: Some(0.8),
//!     nsubjects: Some(10.),
//!     p1: Some(0.1),
//!     p2: Some(0.2),
//!     icc: Some(0.1),
//!     ..Default::default()
//! };
//! let solution = solve(&params, &SolveOptions::default())?;
//! println!("{solution}");
//! # Ok::<(), cpa_binary::error::CpaBinaryErr>(())
//! ```

/// This module houses the public API for evaluating power and solving for
/// an unknown design parameter
pub mod compute;
mod design;
/// This module contains error types
pub mod error;
mod power;
mod resolve;
mod root_find;

pub use design::defaults;
pub use power::noncentral_t::{NoncentralT, students_t_quantile};
pub use power::std_normal::{std_normal_cdf, std_normal_pdf, std_normal_quantile};
pub use root_find::root_find::{MAX_EXPANSIONS, find_root};
pub use root_find::types::{Bracket, Expansion, Root};
