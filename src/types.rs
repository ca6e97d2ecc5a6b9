//! Core data types shared by all skyline engines.
//!
//! Points are plain coordinate vectors; they carry no identity beyond their
//! coordinates, and two componentwise-equal points are interchangeable.
//! Coordinates are assumed NaN-free: dominance on NaN is undefined.

use crate::pivot::{median_centroid, PivotSelector};

/// A point in d-dimensional space.
pub type Point = Vec<f64>;

/// A collection of points sharing one dimensionality.
pub type Dataset = Vec<Point>;

/// Per-dimension optimization preference, one entry per coordinate.
pub type Preference = Vec<Order>;

/// Optimization direction for a single dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Smaller is better.
    Min,
    /// Larger is better.
    Max,
    /// Exclude this dimension from dominance comparisons.
    Ignore,
}

/// Default dominance tolerance for every engine.
pub const DEFAULT_EPSILON: f64 = 0.0;

/// Below this input size, divide & conquer degrades to BNL.
pub const DEFAULT_DNC_THRESHOLD: usize = 100;

/// Chunk size for the divide & conquer merge pass.
pub const DEFAULT_DNC_BATCH_SIZE: usize = 100;

/// SkyTree recursion depth beyond which BNL takes over.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 500;

/// Minimum non-empty SkyTree partitions required to recurse in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4;

/// Below this input size, SkyTree degrades to BNL.
pub const DEFAULT_BNL_SWITCH_THRESHOLD: usize = 1024;

/// SkyTree worker pool size; 0 means one worker per hardware execution unit.
pub const DEFAULT_WORKER_POOL_SIZE: usize = 0;

/// Configuration for the Block-Nested-Loop engine.
#[derive(Clone, Copy, Debug)]
pub struct BnlConfig {
    /// Relaxed dominance tolerance. Must be non-negative.
    pub epsilon: f64,
}

impl Default for BnlConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Configuration for the Divide & Conquer engine.
#[derive(Clone, Copy, Debug)]
pub struct DncConfig {
    /// Inputs of at most this size are handled by BNL directly.
    pub threshold: usize,
    /// Merge traversal chunk size. Locality tuning only.
    pub batch_size: usize,
    /// Relaxed dominance tolerance. Must be non-negative.
    pub epsilon: f64,
}

impl Default for DncConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DNC_THRESHOLD,
            batch_size: DEFAULT_DNC_BATCH_SIZE,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Configuration for the SkyTree engine.
#[derive(Clone, Copy, Debug)]
pub struct SkyTreeConfig {
    /// Strategy used to pick the partitioning pivot of each recursion step.
    pub pivot_selector: PivotSelector,
    /// Recursion depth cap; deeper subproblems fall back to BNL.
    pub max_recursion_depth: usize,
    /// Minimum number of non-empty partitions to recurse in parallel.
    pub parallel_threshold: usize,
    /// Inputs of at most this size are handled by BNL directly.
    pub bnl_switch_threshold: usize,
    /// Worker pool size for one top-level call; 0 uses all hardware units.
    pub worker_pool_size: usize,
    /// Relaxed dominance tolerance. Must be non-negative.
    pub epsilon: f64,
}

impl Default for SkyTreeConfig {
    fn default() -> Self {
        Self {
            pivot_selector: median_centroid,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            bnl_switch_threshold: DEFAULT_BNL_SWITCH_THRESHOLD,
            worker_pool_size: DEFAULT_WORKER_POOL_SIZE,
            epsilon: DEFAULT_EPSILON,
        }
    }
}
