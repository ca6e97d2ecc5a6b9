//! Divide & Conquer skyline computation.
//!
//! The dataset is split at the median of its widest-spread dimension, the
//! two halves recurse concurrently, and a symmetric merge keeps the points
//! of each partial skyline that no point of the other side dominates.
//! Points sitting exactly on the median are assigned to a side uniformly at
//! random, which defends against inputs where most points share the median
//! coordinate and one side would otherwise absorb everything.

use rand::Rng;
use rayon::join;

use crate::bnl::block_nested_loop;
use crate::dominance::dominates_eps;
use crate::types::{BnlConfig, Dataset, DncConfig, Order, Point};

/// Compute the skyline of `data` by parallel divide & conquer.
///
/// Inputs of at most `cfg.threshold` points are handed to BNL directly.
/// The random median-tie assignment makes the internal partitioning
/// non-deterministic; the returned multiset is not.
///
/// # Panics
/// Panics if point lengths disagree with `prefs` or if the configured
/// epsilon is negative.
pub fn divide_and_conquer(data: &[Point], prefs: &[Order], cfg: &DncConfig) -> Dataset {
    let bnl_cfg = BnlConfig {
        epsilon: cfg.epsilon,
    };
    if data.len() <= cfg.threshold.max(1) {
        return block_nested_loop(data, prefs, &bnl_cfg);
    }

    let split_dim = widest_dimension(data);

    // Median of the split coordinate, taken from a sorted scratch copy so
    // the caller's ordering is left alone.
    let mut scratch: Dataset = data.to_vec();
    scratch.sort_by(|a, b| a[split_dim].total_cmp(&b[split_dim]));
    let median = scratch[scratch.len() / 2][split_dim];

    let mut rng = rand::thread_rng();
    let mut left: Dataset = Vec::new();
    let mut right: Dataset = Vec::new();
    for p in scratch {
        if p[split_dim] < median {
            left.push(p);
        } else if p[split_dim] > median {
            right.push(p);
        } else if rng.gen_bool(0.5) {
            left.push(p);
        } else {
            right.push(p);
        }
    }

    let (left_skyline, right_skyline) = join(
        || divide_and_conquer(&left, prefs, cfg),
        || divide_and_conquer(&right, prefs, cfg),
    );

    let mut merged = Vec::with_capacity(left_skyline.len() + right_skyline.len());
    append_non_dominated(&mut merged, &left_skyline, &right_skyline, prefs, cfg);
    append_non_dominated(&mut merged, &right_skyline, &left_skyline, prefs, cfg);
    merged
}

/// Index of the dimension with the largest `max - min` spread, lowest index
/// on ties.
fn widest_dimension(data: &[Point]) -> usize {
    let dims = data[0].len();
    let mut split_dim = 0;
    let mut widest = 0.0;
    for dim in 0..dims {
        let mut lo = data[0][dim];
        let mut hi = data[0][dim];
        for p in data {
            lo = lo.min(p[dim]);
            hi = hi.max(p[dim]);
        }
        if hi - lo > widest {
            widest = hi - lo;
            split_dim = dim;
        }
    }
    split_dim
}

/// Append the points of `src` that no point of `other` dominates, walking
/// `src` in `cfg.batch_size` chunks. A point merely equal to one on the
/// other side is kept, so duplicates spanning the split survive on both
/// sides.
fn append_non_dominated(
    merged: &mut Dataset,
    src: &[Point],
    other: &[Point],
    prefs: &[Order],
    cfg: &DncConfig,
) {
    let batch_size = cfg.batch_size.max(1);
    for batch in src.chunks(batch_size) {
        for p in batch {
            let dominated = other
                .iter()
                .any(|q| dominates_eps(q, p, prefs, cfg.epsilon));
            if !dominated {
                merged.push(p.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Order::{Max, Min};

    fn dnc(data: &[Point], prefs: &[Order]) -> Dataset {
        divide_and_conquer(data, prefs, &DncConfig::default())
    }

    fn sorted(mut data: Dataset) -> Dataset {
        data.sort_by(|a, b| {
            a.iter()
                .zip(b.iter())
                .map(|(x, y)| x.total_cmp(y))
                .find(|o| o.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        data
    }

    #[test]
    fn test_empty_input() {
        assert!(dnc(&[], &[Min, Max]).is_empty());
    }

    #[test]
    fn test_small_input_delegates_to_bnl() {
        let data = vec![vec![1.0, 10.0], vec![2.0, 9.0], vec![5.0, 6.0]];
        assert_eq!(dnc(&data, &[Min, Max]), vec![vec![1.0, 10.0]]);
    }

    #[test]
    fn test_widest_dimension_split() {
        assert_eq!(
            widest_dimension(&[vec![0.0, 0.0], vec![1.0, 100.0], vec![2.0, 50.0]]),
            1
        );
        // Ties go to the lowest index.
        assert_eq!(widest_dimension(&[vec![0.0, 0.0], vec![5.0, 5.0]]), 0);
    }

    #[test]
    fn test_recursion_one_dominating() {
        // Above the threshold so the recursive path actually runs.
        let mut data: Dataset = (0..500)
            .map(|i| vec![100.0 + i as f64, 100.0 - i as f64])
            .collect();
        data.push(vec![0.0, 1000.0]);
        assert_eq!(dnc(&data, &[Min, Max]), vec![vec![0.0, 1000.0]]);
    }

    #[test]
    fn test_all_same_survive_median_ties() {
        // Every point sits on the median; the random side assignment must
        // not lose or drop duplicates.
        let data = vec![vec![7.0, 7.0]; 500];
        let result = dnc(&data, &[Min, Min]);
        assert_eq!(result.len(), 500);
        assert!(result.iter().all(|p| *p == vec![7.0, 7.0]));
    }

    #[test]
    fn test_matches_bnl_on_anti_chain() {
        let data: Dataset = (0..400)
            .map(|i| vec![i as f64, 400.0 - i as f64])
            .collect();
        let expected = block_nested_loop(&data, &[Min, Min], &BnlConfig::default());
        assert_eq!(sorted(dnc(&data, &[Min, Min])), sorted(expected));
    }

    #[test]
    fn test_small_batch_size_is_correctness_neutral() {
        let data: Dataset = (0..300)
            .map(|i| vec![(i % 17) as f64, (i % 23) as f64, (i % 5) as f64])
            .collect();
        let prefs = [Min, Max, Min];
        let tuned = DncConfig {
            threshold: 10,
            batch_size: 3,
            epsilon: 0.0,
        };
        let expected = block_nested_loop(&data, &prefs, &BnlConfig::default());
        assert_eq!(
            sorted(divide_and_conquer(&data, &prefs, &tuned)),
            sorted(expected)
        );
    }
}
