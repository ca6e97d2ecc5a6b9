//! Algorithm dispatch by name.

use log::debug;

use crate::bnl::block_nested_loop;
use crate::dnc::divide_and_conquer;
use crate::error::SkylineError;
use crate::skytree::sky_tree;
use crate::types::{BnlConfig, Dataset, DncConfig, Order, Point, SkyTreeConfig};

/// Compute the skyline of `points` with the named algorithm and its default
/// configuration.
///
/// Recognized names are `"bnl"`, `"dnc"` and `"skytree"`; the empty string
/// defaults to `"bnl"`. `dimension_names` is informational only (it is
/// carried through to diagnostics and never validated against the
/// dimensionality). Per-call configuration goes through the algorithm
/// functions directly: [`block_nested_loop`], [`divide_and_conquer`],
/// [`sky_tree`].
///
/// # Errors
/// [`SkylineError::UnknownAlgorithm`] for an unrecognized name,
/// [`SkylineError::DimensionMismatch`] when point lengths are heterogeneous
/// or disagree with `prefs`.
pub fn skyline<S: AsRef<str>>(
    points: &[Point],
    dimension_names: &[S],
    prefs: &[Order],
    algo: &str,
) -> Result<Dataset, SkylineError> {
    validate_dimensions(points, prefs)?;

    let algo = if algo.is_empty() { "bnl" } else { algo };
    debug!(
        "computing skyline: algo={} points={} dims={:?}",
        algo,
        points.len(),
        dimension_names
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>(),
    );

    match algo {
        "bnl" => Ok(block_nested_loop(points, prefs, &BnlConfig::default())),
        "dnc" => Ok(divide_and_conquer(points, prefs, &DncConfig::default())),
        "skytree" => Ok(sky_tree(points, prefs, &SkyTreeConfig::default())),
        other => Err(SkylineError::UnknownAlgorithm(other.to_string())),
    }
}

/// Check that every point has exactly `prefs.len()` coordinates.
pub(crate) fn validate_dimensions(points: &[Point], prefs: &[Order]) -> Result<(), SkylineError> {
    let expected = prefs.len();
    for p in points {
        if p.len() != expected {
            return Err(SkylineError::DimensionMismatch {
                expected,
                found: p.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Order::{Ignore, Max, Min};

    const NO_DIMS: &[&str] = &[];

    #[test]
    fn test_empty_algo_defaults_to_bnl() {
        let data = vec![vec![1.0, 10.0], vec![2.0, 9.0]];
        let result = skyline(&data, NO_DIMS, &[Min, Max], "").unwrap();
        assert_eq!(result, vec![vec![1.0, 10.0]]);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let err = skyline(&[vec![1.0]], NO_DIMS, &[Min], "quicksort").unwrap_err();
        assert_eq!(err, SkylineError::UnknownAlgorithm("quicksort".to_string()));
    }

    #[test]
    fn test_all_engines_reachable() {
        let data = vec![vec![1.0, 10.0], vec![2.0, 9.0], vec![0.5, 11.0]];
        let prefs = [Min, Max];
        for algo in ["bnl", "dnc", "skytree"] {
            let result = skyline(&data, &["price", "battery"], &prefs, algo).unwrap();
            assert_eq!(result, vec![vec![0.5, 11.0]]);
        }
    }

    #[test]
    fn test_dimension_mismatch_between_points() {
        let data = vec![vec![1.0, 2.0], vec![1.0]];
        let err = skyline(&data, NO_DIMS, &[Min, Min], "bnl").unwrap_err();
        assert_eq!(
            err,
            SkylineError::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_dimension_mismatch_against_prefs() {
        let data = vec![vec![1.0, 2.0, 3.0]];
        let err = skyline(&data, NO_DIMS, &[Min, Min], "bnl").unwrap_err();
        assert_eq!(
            err,
            SkylineError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_empty_dataset_is_not_an_error() {
        let result = skyline(&[], NO_DIMS, &[Min, Max], "skytree").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_all_ignore_returns_full_input() {
        let data = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![1.0, 1.0]];
        let result = skyline(&data, NO_DIMS, &[Ignore, Ignore], "bnl").unwrap();
        assert_eq!(result, data);
    }

    #[test]
    fn test_dimension_names_length_not_enforced() {
        let data = vec![vec![1.0, 10.0]];
        // One name for two dimensions: informational only.
        let result = skyline(&data, &["price"], &[Min, Max], "bnl").unwrap();
        assert_eq!(result, data);
    }
}
