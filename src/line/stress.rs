//! Stress scheme extraction.
//!
//! A stress scheme holds one bit per syllable nucleus of a line. The stress
//! mark does not occupy a position of its own: it upgrades the bit of the
//! vowel right in front of it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{is_consonant, remove_chars, ACUTE};
use crate::error::{Result, VerseError};

/// What to do with a stress mark that has no vowel in front of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StressPolicy {
    /// Drop the stray mark
    #[default]
    Ignore,
    /// Fail with [`VerseError::MalformedStress`]
    Strict,
}

impl fmt::Display for StressPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StressPolicy::Ignore => write!(f, "ignore"),
            StressPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Per-syllable stress bits of a line (`true` = stressed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StressScheme {
    bits: SmallVec<[bool; 24]>,
}

impl StressScheme {
    /// Build a scheme from explicit bits.
    pub fn from_bits(bits: &[bool]) -> Self {
        Self {
            bits: SmallVec::from_slice(bits),
        }
    }

    /// Extract the scheme from a vowel form under [`StressPolicy::Ignore`].
    pub fn from_vowel_form(vowel_form: &str) -> Self {
        let mut bits = SmallVec::new();
        for c in vowel_form.chars() {
            if c == ACUTE {
                if let Some(last) = bits.last_mut() {
                    *last = true;
                }
            } else {
                bits.push(false);
            }
        }
        Self { bits }
    }

    /// Extract the scheme from a glued form (a vowel form works too).
    ///
    /// Consonants are dropped first; every remaining character other than
    /// [`ACUTE`] opens a new unstressed position. Under
    /// [`StressPolicy::Strict`] a mark at the start of the form, right after
    /// another mark or right after a consonant fails with
    /// [`VerseError::MalformedStress`].
    pub fn extract(glued: &str, policy: StressPolicy) -> Result<Self> {
        if policy == StressPolicy::Strict {
            if let Some(position) = stray_mark(glued) {
                return Err(VerseError::MalformedStress { position });
            }
        }
        Ok(Self::from_vowel_form(&remove_chars(glued, is_consonant)))
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for a line without vowels.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The raw bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of stressed syllables.
    pub fn stressed_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// True if at least one syllable is stressed.
    pub fn has_stress(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }
}

/// Char index of the first stress mark that does not follow a vowel.
pub fn stray_mark(glued: &str) -> Option<usize> {
    let mut previous: Option<char> = None;
    for (i, c) in glued.chars().enumerate() {
        if c == ACUTE && previous.map_or(true, |p| p == ACUTE || is_consonant(p)) {
            return Some(i);
        }
        previous = Some(c);
    }
    None
}

impl fmt::Display for StressScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for StressScheme {
    type Err = VerseError;

    /// Parse a string of `'0'`/`'1'` digits.
    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(VerseError::InvalidSchemeDigit(other)),
            })
            .collect::<Result<SmallVec<[bool; 24]>>>()?;
        Ok(Self { bits })
    }
}

impl Serialize for StressScheme {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StressScheme {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
