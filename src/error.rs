//! Error types for verse analysis.
//!
//! The analysis itself is total: every infallible entry point degrades
//! malformed input to empty results. These errors only surface from the
//! `try_*` variants and from configuration validation.

use thiserror::Error;

/// Errors that can occur while analyzing verse.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VerseError {
    /// A stress mark with no vowel in front of it.
    ///
    /// Only reported under [`StressPolicy::Strict`](crate::line::StressPolicy::Strict);
    /// `position` is the char index of the stray mark in the glued line.
    #[error("Stress mark at position {position} has no preceding vowel")]
    MalformedStress {
        /// Char index of the mark in the glued line
        position: usize,
    },

    /// A character other than `0` or `1` in a textual stress scheme.
    #[error("Invalid stress scheme digit '{0}', expected '0' or '1'")]
    InvalidSchemeDigit(char),

    /// A similarity threshold outside of `[0, 1]`.
    #[error("Rhyme threshold must lie in [0, 1], got {0}")]
    InvalidThreshold(f64),

    /// A stanza without a single line.
    #[error("Verse contains no lines")]
    EmptyVerse,
}

/// A specialized `Result` type for verse analysis.
pub type Result<T> = std::result::Result<T, VerseError>;
