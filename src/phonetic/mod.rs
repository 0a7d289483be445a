//! Pseudo-phonetic normalization of clauses.
//!
//! Spelling hides a good part of what rhymes in Russian: `-тся` sounds like
//! `-ца`, a final `д` sounds like `т`, `ю` carries a glide. This module
//! rewrites a clause into a sequence of letter groups that approximate the
//! pronunciation, and offers a coarser per-letter consonance form.
//!
//! # Usage
//!
//! ```rust
//! use versemeter::phonetic::{consonance_form, pseudo_phonetic};
//!
//! let form = pseudo_phonetic("у́тся");
//! assert_eq!(form.texts(), vec!["у́", "ц", "йа"]);
//! assert_eq!(consonance_form("бо́ром"), vec!['п', 'л', 'н']);
//! ```
//!
//! # Rule Application Order
//!
//! 1. consonant-cluster table, else vowel-iotation table (whole-run keys);
//! 2. word-final devoicing, for the last run only, on the rewritten text.

pub mod application;
pub mod rules;
pub mod types;

mod properties;

pub use application::{consonance_form, letter_groups, pseudo_phonetic};
pub use rules::{
    CONSONANCE_RULES, CONSONANT_CLUSTER_RULES, FINAL_DEVOICING_RULES, VOWEL_IOTATION_RULES,
};
pub use types::{GroupKind, LetterGroup, PseudoPhonetic, RuleKind};
