//! Block-Nested-Loop skyline computation.
//!
//! The window variant: every incoming point is compared against a result
//! window. Points dominated by a window member are discarded; window members
//! dominated by the incoming point are evicted. Whatever survives the full
//! scan is the skyline. O(n · |window|), which is quadratic in the worst case
//! but fast for small inputs or small skylines, and the merge primitive the
//! other engines are built on.

use crate::dominance::dominates_eps;
use crate::types::{BnlConfig, Dataset, Order, Point};

/// Compute the skyline of `data` with a block-nested loop.
///
/// The output preserves duplicates (coordinate-equal points never dominate
/// one another) and is ordered by first insertion of each survivor.
///
/// # Panics
/// Panics if point lengths disagree with `prefs` or if the configured
/// epsilon is negative.
pub fn block_nested_loop(data: &[Point], prefs: &[Order], cfg: &BnlConfig) -> Dataset {
    let mut window: Dataset = Vec::new();
    for p in data {
        let mut dominated = false;
        let mut i = 0;
        while i < window.len() {
            if dominates_eps(&window[i], p, prefs, cfg.epsilon) {
                dominated = true;
                break;
            }
            if dominates_eps(p, &window[i], prefs, cfg.epsilon) {
                // Eviction shifts the tail down; the cursor stays put.
                window.remove(i);
            } else {
                i += 1;
            }
        }
        if !dominated {
            window.push(p.clone());
        }
    }
    window
}
