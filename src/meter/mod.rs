//! Metre classification.
//!
//! Lines are matched against two-syllable feet (iambus, choree) and
//! three-syllable feet (dactyl, amphibrach, anapest). Each foot template
//! leaves one syllable free, so a line may fit several feet at once; the
//! ambiguity is kept, never resolved.
//!
//! ```rust
//! use versemeter::line::StressScheme;
//! use versemeter::meter::{classify, Foot};
//!
//! let scheme: StressScheme = "100100100100".parse().unwrap();
//! assert_eq!(classify(&scheme), vec![Foot::Dactyl]);
//! ```

pub mod classify;
pub mod feet;

pub use classify::{classify, expected_pattern, matches};
pub use feet::{Foot, FootCategory, Slot};
