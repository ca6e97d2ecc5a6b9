//! Thread-safe dominance memoization for one SkyTree invocation.

use std::collections::HashMap;
use std::sync::RwLock;

use ordered_float::OrderedFloat;

use crate::dominance::dominates_eps;
use crate::types::{Order, Preference};

type CacheKey = (Vec<OrderedFloat<f64>>, Vec<OrderedFloat<f64>>);

/// Memoized dominance verdicts for a fixed preference vector and tolerance.
///
/// Keys hold the two coordinate vectors at full f64 precision (bitwise via
/// [`OrderedFloat`]), so distinct NaN payloads would key differently;
/// inputs are assumed NaN-free. Reads take a shared lock, misses compute the
/// verdict and take the exclusive lock. One cache lives for one top-level
/// SkyTree call and is dropped with it.
pub struct DominanceCache {
    prefs: Preference,
    epsilon: f64,
    verdicts: RwLock<HashMap<CacheKey, bool>>,
}

impl DominanceCache {
    pub fn new(prefs: Preference, epsilon: f64) -> Self {
        Self {
            prefs,
            epsilon,
            verdicts: RwLock::new(HashMap::new()),
        }
    }

    /// The preference vector this cache memoizes against.
    pub fn prefs(&self) -> &[Order] {
        &self.prefs
    }

    /// The dominance tolerance this cache memoizes against.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Memoized `dominates_eps(a, b)` under this cache's preferences and
    /// tolerance.
    pub fn dominates(&self, a: &[f64], b: &[f64]) -> bool {
        let key = (to_key(a), to_key(b));
        if let Some(&verdict) = self.verdicts.read().unwrap().get(&key) {
            return verdict;
        }
        let verdict = dominates_eps(a, b, &self.prefs, self.epsilon);
        self.verdicts.write().unwrap().insert(key, verdict);
        verdict
    }

    /// Number of memoized verdicts.
    pub fn len(&self) -> usize {
        self.verdicts.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn to_key(p: &[f64]) -> Vec<OrderedFloat<f64>> {
    p.iter().copied().map(OrderedFloat).collect()
}
