//! # versemeter
//!
//! Metre and rhyme analysis for Russian verse with explicit stress marks.
//!
//! Stressed vowels are written with a combining acute accent (`U+0301`)
//! after them. From such lines the crate derives:
//!
//! - the stress scheme, one bit per syllable;
//! - every classical foot (iambus, choree, dactyl, amphibrach, anapest) the
//!   scheme is consistent with, catalectic endings included;
//! - the clause (tail from the last stressed vowel) and the anacrusis (head
//!   through the first stress);
//! - whether two clauses rhyme, by a similarity ratio with a consonance
//!   fallback;
//! - the rhyme map and rhyme groups of a whole stanza.
//!
//! ## Example
//!
//! ```rust
//! use versemeter::prelude::*;
//!
//! let line = Line::new("Ту́чки небе́сные, ве́чные стра́нники…");
//! assert_eq!(line.stress_scheme().to_string(), "100100100100");
//! assert_eq!(line.possible_meters(), vec!["dactyl"]);
//! assert_eq!(line.clause(), "а́нники");
//!
//! assert!(rhymes_with("о́ром", "о́ром"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod error;
pub mod line;
pub mod meter;
pub mod phonetic;
pub mod rhyme;
pub mod verse;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, VerseError};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::{Result, VerseError};
    pub use crate::line::{build_line, Line, StressPolicy, StressScheme};
    pub use crate::meter::{classify, Foot, FootCategory};
    pub use crate::phonetic::{consonance_form, pseudo_phonetic, PseudoPhonetic};
    pub use crate::rhyme::{alike, rhymes_with, RhymeMatcher, RhymeVerdict, RHYME_THRESHOLD};
    pub use crate::verse::{analyze_verse, VerseAnalyzer, VerseInfo};
}
