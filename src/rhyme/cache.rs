//! Memoization of rhyme verdicts per unordered clause pair.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::RhymeVerdict;

/// A symmetric pair of clauses for use as cache keys.
///
/// `(a, b)` and `(b, a)` are the same key; the verdict of a pair does not
/// depend on its order.
#[derive(Clone, Debug)]
pub(crate) struct SymmetricPair {
    first: Arc<str>,
    second: Arc<str>,
}

impl SymmetricPair {
    /// Create a new pair, ordering the clauses lexicographically.
    #[inline]
    pub(crate) fn new(a: &str, b: &str) -> Self {
        match a.cmp(b) {
            Ordering::Less | Ordering::Equal => Self {
                first: Arc::from(a),
                second: Arc::from(b),
            },
            Ordering::Greater => Self {
                first: Arc::from(b),
                second: Arc::from(a),
            },
        }
    }
}

impl PartialEq for SymmetricPair {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl Eq for SymmetricPair {}

impl Hash for SymmetricPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first.hash(state);
        self.second.hash(state);
    }
}

/// Thread-safe verdict cache shared by the workers of a verse analysis.
#[derive(Debug, Default)]
pub struct RhymeCache {
    verdicts: RwLock<FxHashMap<SymmetricPair, RhymeVerdict>>,
}

impl RhymeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, key: &SymmetricPair) -> Option<RhymeVerdict> {
        self.verdicts.read().get(key).copied()
    }

    pub(crate) fn insert(&self, key: SymmetricPair, verdict: RhymeVerdict) {
        self.verdicts.write().insert(key, verdict);
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.verdicts.read().len()
    }

    /// True if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.verdicts.read().is_empty()
    }

    /// Drop every cached verdict.
    pub fn clear(&self) {
        self.verdicts.write().clear();
    }
}
