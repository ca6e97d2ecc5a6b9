//! SkyTree skyline computation: recursive space partitioning around a pivot.
//!
//! ## Algorithm
//!
//! Each recursion step picks a pivot point, splits off the points that are
//! coordinatewise equal to it, discards the points it dominates, and groups
//! the rest by region mask. The mask has bit `i` set when the point is
//! strictly better than the pivot in dimension `i`, so `2^d` regions bound
//! the branching factor:
//!
//! - mask 0: nowhere better, dominated by or equal to the pivot;
//! - all non-Ignore bits set: better everywhere, dominates the pivot;
//! - anything else: incomparable with the pivot along some dimensions.
//!
//! Every surviving group recurses independently. Group skylines cannot be
//! concatenated blindly though: points of different regions may still
//! dominate one another, and the equal-to-pivot members interact with every
//! region. A final BNL pass over the union removes that residue.
//!
//! ## Pruning and Ignore dimensions
//!
//! Mask-0 points are pruned through the dominance predicate, not by mask
//! value: a point equal to the pivot on every non-Ignore dimension but
//! different in an Ignore dimension also lands on mask 0, yet nothing
//! dominates it and it must survive into the recursion.
//!
//! ## Parallelism
//!
//! One bounded work-stealing pool is built per top-level call
//! (`worker_pool_size` threads, 0 meaning one per hardware unit). Child
//! partitions recurse on the pool whenever a step produces at least
//! `parallel_threshold` non-empty groups. Work stealing lets child tasks
//! progress without waiting on a permit held by an ancestor frame, so the
//! recursive blocking discipline needs no extra care. Dominance verdicts
//! against pivots and during merges are memoized in a per-call
//! [`DominanceCache`].

use std::collections::HashMap;

use log::warn;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::bnl::block_nested_loop;
use crate::cache::DominanceCache;
use crate::dominance::dominates_eps;
use crate::types::{BnlConfig, Dataset, Order, Point, SkyTreeConfig};

/// Compute the skyline of `data` with the SkyTree algorithm.
///
/// Inputs of at most `cfg.bnl_switch_threshold` points are handed to BNL
/// directly; larger inputs recurse on a per-call worker pool. The traversal
/// order of partitions is unspecified, so output order may vary between
/// runs; the returned multiset does not.
///
/// # Panics
/// Panics if point lengths disagree with `prefs`, if the configured epsilon
/// is negative, or if `prefs` has more than 64 dimensions (region masks are
/// 64-bit).
pub fn sky_tree(data: &[Point], prefs: &[Order], cfg: &SkyTreeConfig) -> Dataset {
    let bnl_cfg = BnlConfig {
        epsilon: cfg.epsilon,
    };
    if data.len() <= cfg.bnl_switch_threshold {
        return block_nested_loop(data, prefs, &bnl_cfg);
    }
    assert!(
        prefs.len() <= 64,
        "region masks support at most 64 dimensions"
    );

    let cache = DominanceCache::new(prefs.to_vec(), cfg.epsilon);
    let scratch = data.to_vec();
    match ThreadPoolBuilder::new()
        .num_threads(cfg.worker_pool_size)
        .build()
    {
        Ok(pool) => pool.install(|| recurse(scratch, prefs, cfg, &cache, 0)),
        Err(err) => {
            warn!("skytree worker pool unavailable ({err}), using the global pool");
            recurse(scratch, prefs, cfg, &cache, 0)
        }
    }
}

fn recurse(
    data: Dataset,
    prefs: &[Order],
    cfg: &SkyTreeConfig,
    cache: &DominanceCache,
    depth: usize,
) -> Dataset {
    if data.len() <= 1 {
        return data;
    }
    if data.len() <= cfg.bnl_switch_threshold || depth >= cfg.max_recursion_depth {
        let bnl_cfg = BnlConfig {
            epsilon: cfg.epsilon,
        };
        return block_nested_loop(&data, prefs, &bnl_cfg);
    }
    // Cheap enough just above the BNL threshold; larger inputs go straight
    // to partitioning instead of paying the quadratic scan.
    if data.len() <= 2 * cfg.bnl_switch_threshold && is_anti_chain(&data, prefs, cfg.epsilon) {
        return data;
    }

    let pivot = (cfg.pivot_selector)(&data, prefs);

    let mut equal: Dataset = Vec::new();
    let mut groups: HashMap<u64, Dataset> = HashMap::new();
    for p in data {
        if p == pivot {
            equal.push(p);
            continue;
        }
        if cache.dominates(&pivot, &p) {
            continue;
        }
        let mask = region_mask(&p, &pivot, prefs);
        groups.entry(mask).or_default().push(p);
    }

    let partitions: Vec<Dataset> = groups.into_values().collect();
    let children: Vec<Dataset> = if partitions.len() >= cfg.parallel_threshold {
        partitions
            .into_par_iter()
            .map(|group| recurse(group, prefs, cfg, cache, depth + 1))
            .collect()
    } else {
        partitions
            .into_iter()
            .map(|group| recurse(group, prefs, cfg, cache, depth + 1))
            .collect()
    };

    let mut combined: Dataset = children.into_iter().flatten().collect();
    combined.extend(equal);
    merge_bnl(combined, cache)
}

/// Region of `p` relative to `pivot`: bit `i` set iff `p` is strictly better
/// in dimension `i`. Ignore dimensions and equal coordinates contribute 0.
fn region_mask(p: &[f64], pivot: &[f64], prefs: &[Order]) -> u64 {
    let mut mask = 0u64;
    for (dim, order) in prefs.iter().enumerate() {
        let better = match order {
            Order::Min => p[dim] < pivot[dim],
            Order::Max => p[dim] > pivot[dim],
            Order::Ignore => false,
        };
        if better {
            mask |= 1 << dim;
        }
    }
    mask
}

/// True when no point of `data` dominates another.
fn is_anti_chain(data: &[Point], prefs: &[Order], epsilon: f64) -> bool {
    for (i, p) in data.iter().enumerate() {
        for (j, q) in data.iter().enumerate() {
            if i != j && dominates_eps(p, q, prefs, epsilon) {
                return false;
            }
        }
    }
    true
}

/// BNL over the concatenated child skylines, with dominance verdicts going
/// through the per-call cache so pairs recurring in ancestor merges are not
/// re-evaluated.
fn merge_bnl(data: Dataset, cache: &DominanceCache) -> Dataset {
    let mut window: Dataset = Vec::new();
    for p in data {
        let mut dominated = false;
        let mut i = 0;
        while i < window.len() {
            if cache.dominates(&window[i], &p) {
                dominated = true;
                break;
            }
            if cache.dominates(&p, &window[i]) {
                window.remove(i);
            } else {
                i += 1;
            }
        }
        if !dominated {
            window.push(p);
        }
    }
    window
}
