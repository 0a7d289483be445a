//! Rhyme detection between clauses.
//!
//! Two clauses are alike when the similarity ratio of their letters reaches
//! the threshold, or failing that, when the ratio of their consonance forms
//! does. The pseudo-phonetic form is not part of the decision.
//!
//! ```rust
//! use versemeter::rhyme::alike;
//!
//! assert!(alike("о́ром", "о́ром"));
//! assert!(alike("ьи́", "ои́"));
//! assert!(!alike("о́ром", "и́"));
//! ```

mod cache;

use serde::{Deserialize, Serialize};

pub use cache::RhymeCache;
use cache::SymmetricPair;

use crate::distance::{str_ratio, symmetric_ratio};
use crate::error::{Result, VerseError};
use crate::phonetic::consonance_form;

/// Ratio at or above which two clauses count as alike.
pub const RHYME_THRESHOLD: f64 = 0.5;

/// Outcome of comparing two clauses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhymeVerdict {
    /// Similarity ratio of the clause letters
    pub ratio: f64,
    /// Similarity ratio of the consonance forms, computed only when the
    /// letter ratio falls short
    pub consonance_ratio: Option<f64>,
    /// Final decision
    pub alike: bool,
}

impl RhymeVerdict {
    const NONE: RhymeVerdict = RhymeVerdict {
        ratio: 0.0,
        consonance_ratio: None,
        alike: false,
    };
}

/// Clause comparator with a configurable threshold and optional cache.
#[derive(Debug)]
pub struct RhymeMatcher {
    threshold: f64,
    cache: Option<RhymeCache>,
}

impl Default for RhymeMatcher {
    fn default() -> Self {
        Self {
            threshold: RHYME_THRESHOLD,
            cache: None,
        }
    }
}

impl RhymeMatcher {
    /// Matcher with the default threshold and no cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher with a custom threshold in `[0, 1]`.
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(VerseError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            cache: None,
        })
    }

    /// Enable the per-pair verdict cache.
    pub fn cached(mut self) -> Self {
        self.cache = Some(RhymeCache::new());
        self
    }

    /// The threshold in use.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The verdict cache, if enabled.
    pub fn cache(&self) -> Option<&RhymeCache> {
        self.cache.as_ref()
    }

    /// Compare two clauses. An empty clause never rhymes.
    pub fn compare(&self, first: &str, second: &str) -> RhymeVerdict {
        if first.is_empty() || second.is_empty() {
            return RhymeVerdict::NONE;
        }
        let Some(cache) = &self.cache else {
            return self.evaluate(first, second);
        };
        let key = SymmetricPair::new(first, second);
        if let Some(verdict) = cache.get(&key) {
            tracing::trace!(first, second, "rhyme cache hit");
            return verdict;
        }
        let verdict = self.evaluate(first, second);
        cache.insert(key, verdict);
        verdict
    }

    /// Returns true if the two clauses are alike.
    pub fn alike(&self, first: &str, second: &str) -> bool {
        self.compare(first, second).alike
    }

    fn evaluate(&self, first: &str, second: &str) -> RhymeVerdict {
        let ratio = str_ratio(first, second);
        if ratio >= self.threshold {
            return RhymeVerdict {
                ratio,
                consonance_ratio: None,
                alike: true,
            };
        }
        let consonance = symmetric_ratio(&consonance_form(first), &consonance_form(second));
        RhymeVerdict {
            ratio,
            consonance_ratio: Some(consonance),
            alike: consonance >= self.threshold,
        }
    }
}

/// Returns true if two clauses are alike under the default threshold.
pub fn alike(first: &str, second: &str) -> bool {
    RhymeMatcher::default().alike(first, second)
}

/// Alias of [`alike`].
pub fn rhymes_with(first: &str, second: &str) -> bool {
    alike(first, second)
}
