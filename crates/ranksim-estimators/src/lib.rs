//! Rank-based estimators of the target functional
//!
//! Reference implementations behind the [`ranksim_core::RankEstimator`]
//! interface: the plug-in estimator built from empirical or smoothed rank
//! functions, together with its three standard-error methods. The simulation
//! engine depends only on the interface, so these can be swapped for any
//! other adapter.

mod ecdf;
mod kde;
mod unknown_ranks;

pub use ecdf::RankFunctions;
pub use kde::KernelDensity;
pub use unknown_ranks::UnknownRanks;
