//! Incremental skyline maintenance under point mutations.
//!
//! The engine owns the full point multiset and keeps its skyline current
//! after every insert, update, delete and batch insert, so reads never
//! trigger recomputation. Single-point inserts cost O(|skyline|) dominance
//! checks; deletes pay a recovery sweep over the whole multiset; batch
//! inserts run one static computation over the old skyline plus the batch.
//!
//! The engine is single-threaded. Concurrent callers must serialize
//! externally.

use log::warn;

use crate::bnl::block_nested_loop;
use crate::dispatch::{skyline, validate_dimensions};
use crate::dominance::dominates;
use crate::error::SkylineError;
use crate::types::{BnlConfig, Dataset, Point, Preference};

/// A dynamic skyline engine over an owned point multiset.
#[derive(Debug)]
pub struct DynamicSkyline {
    points: Dataset,
    dims: Vec<String>,
    prefs: Preference,
    algo: String,
    skyline: Dataset,
}

impl DynamicSkyline {
    /// Create an engine over `points` and compute its initial skyline with
    /// the named static algorithm (empty name defaults to `"bnl"`).
    ///
    /// # Errors
    /// Propagates [`SkylineError::UnknownAlgorithm`] and
    /// [`SkylineError::DimensionMismatch`] from the initial computation.
    pub fn new(
        points: Dataset,
        dims: Vec<String>,
        prefs: Preference,
        algo: &str,
    ) -> Result<Self, SkylineError> {
        let algo = if algo.is_empty() { "bnl" } else { algo };
        let initial = skyline(&points, &dims, &prefs, algo)?;
        Ok(Self {
            points,
            dims,
            prefs,
            algo: algo.to_string(),
            skyline: initial,
        })
    }

    /// Create an engine that adopts `points` as its skyline verbatim,
    /// skipping the initial computation. Useful when the caller knows the
    /// set is already a skyline, or intends to refine it with a following
    /// [`insert_batch`](Self::insert_batch). The named algorithm (default
    /// `"bnl"`) is kept for batch recomputation.
    ///
    /// # Errors
    /// [`SkylineError::DimensionMismatch`] when point lengths are
    /// heterogeneous or disagree with `prefs`.
    pub fn new_raw(
        points: Dataset,
        dims: Vec<String>,
        prefs: Preference,
        algo: &str,
    ) -> Result<Self, SkylineError> {
        validate_dimensions(&points, &prefs)?;
        let algo = if algo.is_empty() { "bnl" } else { algo };
        Ok(Self {
            skyline: points.clone(),
            points,
            dims,
            prefs,
            algo: algo.to_string(),
        })
    }

    /// Insert one point and restore the skyline invariant incrementally.
    ///
    /// If a skyline member dominates `p` the skyline is left untouched.
    /// Otherwise the members `p` dominates are evicted and `p` is appended;
    /// a coordinate-equal member and `p` both survive.
    pub fn insert(&mut self, p: Point) {
        self.points.push(p.clone());

        if self
            .skyline
            .iter()
            .any(|s| dominates(s, &p, &self.prefs))
        {
            return;
        }
        self.skyline.retain(|s| !dominates(&p, s, &self.prefs));
        self.skyline.push(p);
    }

    /// Insert a batch of points and recompute the skyline from the current
    /// skyline plus the batch, using the engine's static algorithm. If that
    /// computation fails the engine falls back to BNL; the original error is
    /// logged and swallowed.
    pub fn insert_batch(&mut self, batch: Dataset) {
        self.points.extend(batch.iter().cloned());

        let mut candidates = self.skyline.clone();
        candidates.extend(batch);
        match skyline(&candidates, &self.dims, &self.prefs, &self.algo) {
            Ok(result) => self.skyline = result,
            Err(err) => {
                warn!(
                    "batch skyline via {:?} failed ({err}), recomputing with bnl",
                    self.algo
                );
                self.skyline = block_nested_loop(&candidates, &self.prefs, &BnlConfig::default());
            }
        }
    }

    /// Replace one occurrence of `old` with `new`.
    ///
    /// Removing `old` is a silent no-op when no occurrence matches; `new`
    /// is inserted either way. The removal runs the same recovery sweep as
    /// [`delete`](Self::delete): points `old` alone was suppressing rejoin
    /// the skyline even when `new` does not re-cover them.
    pub fn update(&mut self, old: &[f64], new: Point) {
        self.delete(old);
        self.insert(new);
    }

    /// Delete one occurrence of `p`, then run the recovery sweep: every
    /// point occurrence not represented in the surviving skyline is
    /// re-examined, and the non-dominated ones re-enter through the same
    /// domination-removal step as [`insert`](Self::insert). The sweep order
    /// is unspecified; the resulting multiset is the true skyline either
    /// way.
    pub fn delete(&mut self, p: &[f64]) {
        remove_one(&mut self.points, p);
        remove_one(&mut self.skyline, p);

        // Match skyline occurrences 1:1 against the multiset; whatever is
        // left over is a candidate.
        let mut matched = vec![false; self.skyline.len()];
        let mut candidates: Dataset = Vec::new();
        for q in &self.points {
            let represented = self.skyline.iter().enumerate().any(|(i, s)| {
                if !matched[i] && s == q {
                    matched[i] = true;
                    true
                } else {
                    false
                }
            });
            if !represented {
                candidates.push(q.clone());
            }
        }

        for q in candidates {
            if self
                .skyline
                .iter()
                .any(|s| dominates(s, &q, &self.prefs))
            {
                continue;
            }
            self.skyline.retain(|s| !dominates(&q, s, &self.prefs));
            self.skyline.push(q);
        }
    }

    /// Read-only view of the current skyline.
    pub fn skyline(&self) -> &[Point] {
        &self.skyline
    }

    /// Read-only view of the full point multiset.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The dimension names this engine was created with.
    pub fn dimension_names(&self) -> &[String] {
        &self.dims
    }
}

/// Remove the first occurrence of `target`, if any.
fn remove_one(list: &mut Dataset, target: &[f64]) {
    if let Some(idx) = list.iter().position(|p| p.as_slice() == target) {
        list.remove(idx);
    }
}
