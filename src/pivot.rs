//! Pivot selection strategies for the SkyTree engine.

use crate::types::{Order, Point};

/// A pivot selection strategy: given a non-empty dataset and its
/// preferences, pick the point the recursion partitions around.
pub type PivotSelector = fn(&[Point], &[Order]) -> Point;

/// Median-centroid pivot: the dataset point closest to the vector of
/// per-dimension medians.
///
/// For each dimension the median of the coordinate column is computed (the
/// mean of the two central values for even cardinality); the point with the
/// smallest squared Euclidean distance to that centroid wins, first
/// occurrence on ties.
///
/// # Panics
/// Panics if `data` is empty.
pub fn median_centroid(data: &[Point], _prefs: &[Order]) -> Point {
    assert!(!data.is_empty(), "pivot selection requires a non-empty dataset");

    let dims = data[0].len();
    let mut centroid = Vec::with_capacity(dims);
    let mut column: Vec<f64> = Vec::with_capacity(data.len());
    for dim in 0..dims {
        column.clear();
        column.extend(data.iter().map(|p| p[dim]));
        column.sort_by(f64::total_cmp);
        let mid = column.len() / 2;
        let median = if column.len() % 2 == 0 {
            (column[mid - 1] + column[mid]) / 2.0
        } else {
            column[mid]
        };
        centroid.push(median);
    }

    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, p) in data.iter().enumerate() {
        let dist: f64 = p
            .iter()
            .zip(centroid.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    data[best].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Order::Min;

    #[test]
    fn test_single_point_is_its_own_pivot() {
        let data = vec![vec![3.0, 4.0]];
        assert_eq!(median_centroid(&data, &[Min, Min]), vec![3.0, 4.0]);
    }

    #[test]
    fn test_central_point_wins() {
        let data = vec![
            vec![0.0, 0.0],
            vec![10.0, 10.0],
            vec![5.0, 5.0],
            vec![9.0, 1.0],
            vec![1.0, 9.0],
        ];
        // Medians are (5, 5); the exact match is in the set.
        assert_eq!(median_centroid(&data, &[Min, Min]), vec![5.0, 5.0]);
    }

    #[test]
    fn test_even_cardinality_averages_central_values() {
        let data = vec![vec![0.0], vec![2.0], vec![4.0], vec![6.0]];
        // Median is (2 + 4) / 2 = 3; both 2.0 and 4.0 are equally close and
        // the first occurrence wins.
        assert_eq!(median_centroid(&data, &[Min]), vec![2.0]);
    }

    #[test]
    fn test_tie_breaks_by_first_occurrence() {
        let data = vec![vec![2.0, 3.0], vec![4.0, 3.0]];
        // Centroid is (3, 3), equidistant from both points.
        assert_eq!(median_centroid(&data, &[Min, Min]), vec![2.0, 3.0]);
    }
}
