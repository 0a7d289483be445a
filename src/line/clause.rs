//! Clause and anacrusis extraction.
//!
//! All positions are char indices found by a single scan for [`ACUTE`].
//! The clause starts one position before the last mark (at the stressed
//! vowel itself); the anacrusis ends at the first mark, inclusive.

use smallvec::SmallVec;

use super::{is_punctuation, remove_chars, ACUTE};

/// Positions of the first and last stress mark in a char sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StressMarks {
    /// Index of the first mark
    pub first: Option<usize>,
    /// Index of the last mark
    pub last: Option<usize>,
}

impl StressMarks {
    /// Locate the stress marks in `chars`.
    pub fn scan(chars: &[char]) -> Self {
        let mut marks = Self::default();
        for (i, &c) in chars.iter().enumerate() {
            if c == ACUTE {
                marks.first.get_or_insert(i);
                marks.last = Some(i);
            }
        }
        marks
    }

    /// True if no mark was found.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }
}

type Chars = SmallVec<[char; 64]>;

/// Tail of `glued` from the stressed vowel of the last mark to the end.
pub fn clause(glued: &str) -> String {
    let chars: Chars = glued.chars().collect();
    match StressMarks::scan(&chars).last {
        Some(last) => chars[last.saturating_sub(1)..].iter().collect(),
        None => String::new(),
    }
}

/// The complete word(s) of `original` holding the clause.
///
/// Walks back from the last mark to the nearest punctuation or space, then
/// strips punctuation from the remainder of the line.
pub fn clause_as_words(original: &str) -> String {
    let chars: Chars = original.chars().collect();
    let Some(mut start) = StressMarks::scan(&chars).last else {
        return String::new();
    };
    while start > 0 && !is_punctuation(chars[start - 1]) {
        start -= 1;
    }
    let tail: String = chars[start..].iter().collect();
    remove_chars(&tail, is_punctuation)
}

/// Head of `glued` up to and including the first mark.
pub fn anacrusis(glued: &str) -> String {
    let chars: Chars = glued.chars().collect();
    match StressMarks::scan(&chars).first {
        Some(first) => chars[..=first].iter().collect(),
        None => String::new(),
    }
}
