//! Type definitions for the pseudo-phonetic form.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Kind of a maximal letter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// A run of consonant letters (hard and soft signs included)
    Consonants,
    /// A run of vowel letters and stress marks
    Vowels,
}

/// The substitution tables a group can be rewritten by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Consonant-cluster assimilation or simplification
    Cluster,
    /// Vowel letter standing for glide + vowel
    Iotation,
    /// Devoicing of the last group of a clause
    FinalDevoicing,
}

/// One normalized letter group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterGroup {
    /// Text of the group after substitution
    pub text: String,
    /// Kind of the run it was produced from
    pub kind: GroupKind,
    /// Tables that rewrote it, in application order
    pub applied: SmallVec<[RuleKind; 2]>,
}

impl LetterGroup {
    /// A group no table has touched yet.
    pub fn new(text: impl Into<String>, kind: GroupKind) -> Self {
        Self {
            text: text.into(),
            kind,
            applied: SmallVec::new(),
        }
    }

    /// Returns true if some table rewrote the group.
    pub fn is_rewritten(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Ordered letter groups of a clause after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PseudoPhonetic(pub Vec<LetterGroup>);

impl PseudoPhonetic {
    /// The group texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(|g| g.text.as_str()).collect()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a clause without letters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the groups.
    pub fn iter(&self) -> std::slice::Iter<'_, LetterGroup> {
        self.0.iter()
    }
}

impl fmt::Display for PseudoPhonetic {
    /// Groups joined with `·`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("·")?;
            }
            f.write_str(&group.text)?;
        }
        Ok(())
    }
}
