//! # skyline: Pareto-optimal front computation
//!
//! Given a set of points in ℝᵈ and a per-dimension preference of minimize,
//! maximize or ignore, this library returns the subset of points that no
//! other point dominates. A point dominates another when it is no worse in
//! every considered dimension and strictly better in at least one.
//!
//! ## Engines
//!
//! Three interchangeable static algorithms compute the skyline of a fixed
//! dataset:
//!
//! - **BNL** ([`block_nested_loop`]): pairwise comparison against a result
//!   window. O(n²) worst case; the baseline and the merge primitive of the
//!   other engines.
//! - **D&C** ([`divide_and_conquer`]): median split along the
//!   widest-spread dimension, parallel recursion, symmetric merge. Points
//!   on the median are assigned to a side at random so adversarial inputs
//!   cannot force one-sided splits.
//! - **SkyTree** ([`sky_tree`]): recursive partitioning around a pivot
//!   using region bitmasks, pruning whole regions the pivot dominates,
//!   recursing on a bounded per-call worker pool and merging with a final
//!   BNL pass.
//!
//! All three agree as multisets on every input: duplicates of a
//! non-dominated point are always preserved, and output order is
//! unspecified.
//!
//! The dynamic engine ([`DynamicSkyline`]) owns a point multiset and keeps
//! its skyline current through single-point inserts, updates, deletes and
//! batch inserts, without recomputing from scratch on every read.
//!
//! ## Example
//!
//! ```
//! use skyline::{skyline, Order};
//!
//! // Products: price is minimized, battery life maximized.
//! let data = vec![
//!     vec![400.0, 10.0],
//!     vec![500.0, 12.0],
//!     vec![300.0, 9.0],
//!     vec![420.0, 15.0],
//! ];
//! let prefs = vec![Order::Min, Order::Max];
//!
//! let result = skyline(&data, &["price", "battery"], &prefs, "bnl").unwrap();
//! assert_eq!(result.len(), 3); // (500, 12) is dominated by (420, 15)
//! ```
//!
//! ## Tolerance
//!
//! Every engine accepts a non-negative ε that relaxes dominance: "no worse"
//! is widened by ε and "strictly better" must clear it. ε is a tolerance,
//! not an equivalence class; transitivity only holds at ε = 0.
//!
//! Coordinates are assumed NaN-free; dominance on NaN is undefined.

pub mod bnl;
pub mod cache;
pub mod dispatch;
pub mod dnc;
pub mod dominance;
pub mod dynamic;
pub mod error;
pub mod pivot;
pub mod skytree;
pub mod types;

pub use bnl::block_nested_loop;
pub use cache::DominanceCache;
pub use dispatch::skyline;
pub use dnc::divide_and_conquer;
pub use dominance::{dominates, dominates_eps};
pub use dynamic::DynamicSkyline;
pub use error::SkylineError;
pub use pivot::{median_centroid, PivotSelector};
pub use skytree::sky_tree;
pub use types::{
    BnlConfig, Dataset, DncConfig, Order, Point, Preference, SkyTreeConfig, DEFAULT_BNL_SWITCH_THRESHOLD,
    DEFAULT_DNC_BATCH_SIZE, DEFAULT_DNC_THRESHOLD, DEFAULT_EPSILON, DEFAULT_MAX_RECURSION_DEPTH,
    DEFAULT_PARALLEL_THRESHOLD, DEFAULT_WORKER_POOL_SIZE,
};
