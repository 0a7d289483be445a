//! Verse line normalization.
//!
//! A [`Line`] is built once from raw, stress-marked text. Building it
//! lowercases the input and derives two forms that the rest of the crate
//! works with:
//!
//! - the **glued** form: letters and stress marks only, every punctuation
//!   character and space removed;
//! - the **vowel** form: the glued form with every consonant removed.
//!
//! Stressed vowels are written as the vowel followed by the combining acute
//! accent [`ACUTE`] (`"о́"` is `'о'` + `'\u{301}'`).
//!
//! # Example
//!
//! ```rust
//! use versemeter::line::Line;
//!
//! let line = Line::new("Не с го́р побежа́ли ручьи́");
//! assert_eq!(line.glued(), "несго́рпобежа́лиручьи́");
//! assert_eq!(line.stress_scheme().to_string(), "01001001");
//! assert_eq!(line.possible_meters(), vec!["amphibrach"]);
//! assert_eq!(line.clause(), "и́");
//! ```

pub mod clause;
pub mod stress;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::meter;

pub use clause::StressMarks;
pub use stress::{stray_mark, StressPolicy, StressScheme};

/// Combining acute accent marking the preceding vowel as stressed.
pub const ACUTE: char = '\u{301}';

/// Characters dropped when gluing a line.
///
/// The multi-character marks `!..` and `?..` are covered by their parts.
pub const PUNCTUATION_MARKS: &[char] = &[
    ',', '.', ':', ';', '—', '–', '-', '!', '?', '…', ' ', '\'', '"', '«', '»',
];

/// Consonant letters, including the hard and soft signs.
pub const CONSONANTS: &[char] = &[
    'б', 'в', 'г', 'д', 'ж', 'з', 'й', 'к', 'л', 'м', 'н', 'п', 'р', 'с', 'т', 'ф', 'х', 'ц',
    'ч', 'ш', 'щ', 'ъ', 'ь',
];

/// Vowel letters.
pub const VOWELS: &[char] = &['а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

/// Returns true if `c` is removed when gluing a line.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION_MARKS.contains(&c)
}

/// Returns true if `c` is a consonant letter.
#[inline]
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

/// Returns true if `c` is a vowel letter.
#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Removes every character matching `drop` from `s`.
pub(crate) fn remove_chars(s: &str, drop: impl Fn(char) -> bool) -> String {
    s.chars().filter(|&c| !drop(c)).collect()
}

/// An immutable, normalized verse line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    original: String,
    glued: String,
    vowel_form: String,
}

impl Line {
    /// Normalize a raw line. Never fails; input without letters yields
    /// empty derived forms.
    pub fn new(raw: &str) -> Self {
        let original = raw.to_lowercase();
        let glued = remove_chars(&original, is_punctuation);
        let vowel_form = remove_chars(&glued, is_consonant);
        Self {
            original,
            glued,
            vowel_form,
        }
    }

    /// The lowercased input, punctuation and spacing intact.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Letters and stress marks only.
    pub fn glued(&self) -> &str {
        &self.glued
    }

    /// The glued form without consonants.
    pub fn vowel_form(&self) -> &str {
        &self.vowel_form
    }

    /// Number of stress marks in the line.
    pub fn stress_count(&self) -> usize {
        self.glued.chars().filter(|&c| c == ACUTE).count()
    }

    /// Stress scheme of the line, ignoring stray stress marks.
    pub fn stress_scheme(&self) -> StressScheme {
        StressScheme::from_vowel_form(&self.vowel_form)
    }

    /// Stress scheme of the line under an explicit policy for stray marks.
    pub fn try_stress_scheme(&self, policy: StressPolicy) -> Result<StressScheme> {
        StressScheme::extract(&self.glued, policy)
    }

    /// Names of every foot the line's stress scheme is consistent with.
    ///
    /// Two-syllable feet come before three-syllable feet, each group in
    /// declaration order. An empty result means free or irregular verse.
    pub fn possible_meters(&self) -> Vec<&'static str> {
        meter::classify(&self.stress_scheme())
            .into_iter()
            .map(|foot| foot.name())
            .collect()
    }

    /// Tail of the glued line from the last stressed vowel onward.
    pub fn clause(&self) -> String {
        clause::clause(&self.glued)
    }

    /// The whole word(s) holding the clause, punctuation stripped.
    pub fn clause_as_words(&self) -> String {
        clause::clause_as_words(&self.original)
    }

    /// Head of the glued line through the first stress mark.
    pub fn anacrusis(&self) -> String {
        clause::anacrusis(&self.glued)
    }
}

impl From<&str> for Line {
    fn from(raw: &str) -> Self {
        Line::new(raw)
    }
}

/// Build a [`Line`] from raw text.
pub fn build_line(raw: &str) -> Line {
    Line::new(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_original() {
        let line = Line::new("Моро́з-Воево́да");
        assert_eq!(line.original(), "моро́з-воево́да");
    }

    #[test]
    fn test_glued_drops_punctuation_and_spaces() {
        let line = Line::new("Мои́ боги́ни! что́ вы? где́ вы?");
        assert_eq!(line.glued(), "мои́боги́ничто́выгде́вы");
    }

    #[test]
    fn test_glued_drops_quotes_and_dashes() {
        let line = Line::new("«О, весна́ — без конца́…» 'да' \"нет\" – так");
        assert!(!line.glued().chars().any(is_punctuation));
        assert_eq!(line.glued(), "овесна́безконца́данеттак");
    }

    #[test]
    fn test_vowel_form() {
        let line = Line::new("Не ве́тер бушу́ет над бо́ром,");
        assert_eq!(line.vowel_form(), "ее́еуу́еао́о");
    }

    #[test]
    fn test_vowel_form_is_subsequence_of_glued() {
        let line = Line::new("Ту́чки небе́сные, ве́чные стра́нники…");
        let mut glued = line.glued().chars();
        for c in line.vowel_form().chars() {
            assert!(glued.any(|g| g == c), "'{}' out of order", c);
        }
    }

    #[test]
    fn test_stress_count_matches_in_both_forms() {
        let line = Line::new("Ту́чки небе́сные, ве́чные стра́нники…");
        let in_vowels = line.vowel_form().chars().filter(|&c| c == ACUTE).count();
        assert_eq!(line.stress_count(), 4);
        assert_eq!(in_vowels, 4);
    }

    #[test]
    fn test_empty_and_letterless_input() {
        for raw in ["", "   ", "!?…", "— «» —"] {
            let line = Line::new(raw);
            assert_eq!(line.glued(), "");
            assert_eq!(line.vowel_form(), "");
            assert!(line.stress_scheme().is_empty());
            assert!(line.possible_meters().is_empty());
        }
    }

    #[test]
    fn test_character_classes_are_disjoint() {
        for c in CONSONANTS {
            assert!(!is_vowel(*c));
            assert!(!is_punctuation(*c));
        }
        for c in VOWELS {
            assert!(!is_punctuation(*c));
        }
        assert!(!is_vowel(ACUTE) && !is_consonant(ACUTE) && !is_punctuation(ACUTE));
    }
}
