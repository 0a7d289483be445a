//! Applying the substitution tables to a clause.
//!
//! # Functions
//!
//! - [`letter_groups`] - split a clause into maximal consonant and vowel runs
//! - [`pseudo_phonetic`] - rewrite each run through the tables
//! - [`consonance_form`] - per-letter consonance classes of the consonants

use super::rules::{CONSONANCE, CONSONANT_CLUSTERS, FINAL_DEVOICING, VOWEL_IOTATION};
use super::types::{GroupKind, LetterGroup, PseudoPhonetic, RuleKind};
use crate::line::{is_consonant, is_vowel, ACUTE};

#[inline]
fn group_kind(c: char) -> Option<GroupKind> {
    if is_consonant(c) {
        Some(GroupKind::Consonants)
    } else if is_vowel(c) || c == ACUTE {
        Some(GroupKind::Vowels)
    } else {
        None
    }
}

/// Split `clause` into maximal runs of consonants or of vowels.
///
/// Stress marks belong to vowel runs. Any other character is dropped and
/// closes the current run.
pub fn letter_groups(clause: &str) -> Vec<LetterGroup> {
    let mut groups: Vec<LetterGroup> = Vec::new();
    let mut current: Option<LetterGroup> = None;

    for c in clause.chars() {
        let Some(kind) = group_kind(c) else {
            groups.extend(current.take());
            continue;
        };
        match current.as_mut() {
            Some(group) if group.kind == kind => group.text.push(c),
            _ => {
                groups.extend(current.take());
                current = Some(LetterGroup::new(c.to_string(), kind));
            }
        }
    }
    groups.extend(current);
    groups
}

/// Pseudo-phonetic form of a clause.
///
/// Each run is first looked up in the consonant-cluster table, then in the
/// vowel-iotation table. The last run is afterwards devoiced if its
/// (possibly rewritten) text is in the word-final table.
pub fn pseudo_phonetic(clause: &str) -> PseudoPhonetic {
    let mut groups = letter_groups(clause);
    let last = groups.len().saturating_sub(1);

    for (i, group) in groups.iter_mut().enumerate() {
        if let Some(&replacement) = CONSONANT_CLUSTERS.get(group.text.as_str()) {
            group.text = replacement.to_string();
            group.applied.push(RuleKind::Cluster);
        } else if let Some(&replacement) = VOWEL_IOTATION.get(group.text.as_str()) {
            group.text = replacement.to_string();
            group.applied.push(RuleKind::Iotation);
        }
        if i == last {
            if let Some(&replacement) = FINAL_DEVOICING.get(group.text.as_str()) {
                group.text = replacement.to_string();
                group.applied.push(RuleKind::FinalDevoicing);
            }
        }
    }
    PseudoPhonetic(groups)
}

/// Consonance form: every consonant mapped to its class, vowels dropped.
pub fn consonance_form(word: &str) -> Vec<char> {
    word.chars()
        .filter(|&c| is_consonant(c))
        .map(|c| CONSONANCE.get(&c).copied().unwrap_or(c))
        .collect()
}
