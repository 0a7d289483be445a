//! Substitution tables for the phonetic normalizer.
//!
//! # Tables
//!
//! - [`CONSONANT_CLUSTER_RULES`] - assimilation (voicing before voiced
//!   obstruents, devoicing before voiceless ones), affrication (`тс` → `ц`)
//!   and simplification of doubled consonants. Keys are whole consonant runs.
//! - [`VOWEL_IOTATION_RULES`] - single vowel letters that stand for a glide
//!   plus vowel.
//! - [`FINAL_DEVOICING_RULES`] - terminal devoicing, only for the last group
//!   of a clause.
//! - [`CONSONANCE_RULES`] - per-letter voice/place classes for the coarse
//!   consonance comparison.
//!
//! The maps are built once on first use and shared by reference afterwards.
//! Runs without an entry pass through unchanged.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Consonant-cluster substitutions, keyed by the complete run.
///
/// Identity entries (`тв`, `жд`, `сч`, ...) pin clusters that would
/// otherwise look like candidates for assimilation.
pub const CONSONANT_CLUSTER_RULES: &[(&str, &str)] = &[
    ("дк", "тк"),
    ("сб", "зб"),
    ("тв", "тв"),
    ("вт", "фт"),
    ("вк", "фк"),
    ("бщ", "пш"),
    ("вс", "фс"),
    ("вч", "фч"),
    ("кд", "гд"),
    ("фг", "вг"),
    ("кз", "гз"),
    ("сг", "зг"),
    ("тб", "дб"),
    ("бб", "б"),
    ("пб", "б"),
    ("бп", "п"),
    ("вв", "в"),
    ("вф", "ф"),
    ("дд", "д"),
    ("дт", "д"),
    ("тт", "т"),
    ("тд", "т"),
    ("зз", "з"),
    ("сз", "з"),
    ("сс", "с"),
    ("зс", "с"),
    ("нн", "нм"),
    ("тс", "ц"),
    ("тьс", "ц"),
    ("мм", "м"),
    ("пп", "п"),
    ("кк", "к"),
    ("лл", "л"),
    ("сж", "ж"),
    ("зж", "ж"),
    ("сш", "ш"),
    ("зш", "ш"),
    ("жж", "ж"),
    ("ждь", "шть"),
    ("жд", "жд"),
    ("сч", "сч"),
    ("зч", "зч"),
    ("жч", "щ"),
    ("сщ", "щ"),
    ("зщ", "щ"),
    ("тц", "ц"),
    ("дц", "ц"),
    ("тск", "цк"),
    ("дск", "цк"),
    ("тч", "ч"),
    ("дч", "ч"),
    ("чн", "чн"),
    ("кт", "кт"),
    ("стн", "сн"),
    ("здн", "зн"),
    ("стл", "сл"),
    ("стк", "стк"),
    ("здк", "здк"),
    ("стск", "с"),
    ("нтк", "нтк"),
    ("ндк", "ндк"),
    ("нтск", "нцк"),
    ("ндск", "нцк"),
    ("вств", "фств"),
    ("рдц", "рц"),
    ("рдч", "рч"),
    ("лнц", "нц"),
    ("вск", "фск"),
    ("жск", "шск"),
];

/// Iotated vowel letters.
pub const VOWEL_IOTATION_RULES: &[(&str, &str)] = &[("ё", "йо"), ("ю", "йу"), ("я", "йа")];

/// Word-final devoicing of the last group.
pub const FINAL_DEVOICING_RULES: &[(&str, &str)] = &[
    ("б", "п"),
    ("в", "ф"),
    ("г", "к"),
    ("д", "т"),
    ("ж", "ш"),
    ("з", "с"),
    ("здь", "сть"),
];

/// Consonance classes: voiced to voiceless, plus м/н, р/л, х/к and щ/ш.
pub const CONSONANCE_RULES: &[(char, char)] = &[
    ('б', 'п'),
    ('в', 'ф'),
    ('г', 'к'),
    ('д', 'т'),
    ('ж', 'ш'),
    ('з', 'с'),
    ('м', 'н'),
    ('р', 'л'),
    ('х', 'к'),
    ('щ', 'ш'),
];

fn build_map(rules: &'static [(&'static str, &'static str)]) -> FxHashMap<&'static str, &'static str> {
    rules.iter().copied().collect()
}

/// Lookup map over [`CONSONANT_CLUSTER_RULES`].
pub static CONSONANT_CLUSTERS: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| build_map(CONSONANT_CLUSTER_RULES));

/// Lookup map over [`VOWEL_IOTATION_RULES`].
pub static VOWEL_IOTATION: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| build_map(VOWEL_IOTATION_RULES));

/// Lookup map over [`FINAL_DEVOICING_RULES`].
pub static FINAL_DEVOICING: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| build_map(FINAL_DEVOICING_RULES));

/// Lookup map over [`CONSONANCE_RULES`].
pub static CONSONANCE: Lazy<FxHashMap<char, char>> =
    Lazy::new(|| CONSONANCE_RULES.iter().copied().collect());
