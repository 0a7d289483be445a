//! Foot definitions: base templates and catalectic tails.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One syllable position of a foot template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Must be unstressed
    Unstressed,
    /// Metrically free, either bit is accepted
    Free,
}

impl Slot {
    /// Returns true if the observed bit fits this slot.
    #[inline]
    pub fn accepts(self, stressed: bool) -> bool {
        match self {
            Slot::Unstressed => !stressed,
            Slot::Free => true,
        }
    }
}

use Slot::{Free as X, Unstressed as O};

/// Foot length class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FootCategory {
    /// Two-syllable feet
    Di,
    /// Three-syllable feet
    Tri,
}

impl FootCategory {
    /// Syllables per foot.
    pub const fn len(self) -> usize {
        match self {
            FootCategory::Di => 2,
            FootCategory::Tri => 3,
        }
    }

    /// Feet of this category in declaration order.
    pub fn feet(self) -> &'static [Foot] {
        match self {
            FootCategory::Di => &[Foot::Iambus, Foot::Choree],
            FootCategory::Tri => &[Foot::Dactyl, Foot::Amphibrach, Foot::Anapest],
        }
    }
}

/// A classical metrical foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Foot {
    /// da-DUM
    Iambus,
    /// DUM-da (trochee)
    Choree,
    /// DUM-da-da
    Dactyl,
    /// da-DUM-da
    Amphibrach,
    /// da-da-DUM
    Anapest,
}

impl Foot {
    /// Every foot, two-syllable before three-syllable.
    pub const ALL: [Foot; 5] = [
        Foot::Iambus,
        Foot::Choree,
        Foot::Dactyl,
        Foot::Amphibrach,
        Foot::Anapest,
    ];

    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Foot::Iambus => "iambus",
            Foot::Choree => "choree",
            Foot::Dactyl => "dactyl",
            Foot::Amphibrach => "amphibrach",
            Foot::Anapest => "anapest",
        }
    }

    /// Length class of the foot.
    pub const fn category(self) -> FootCategory {
        match self {
            Foot::Iambus | Foot::Choree => FootCategory::Di,
            Foot::Dactyl | Foot::Amphibrach | Foot::Anapest => FootCategory::Tri,
        }
    }

    /// Syllables per foot.
    pub const fn len(self) -> usize {
        self.category().len()
    }

    /// The repeating unit. Exactly one slot is free.
    pub fn base(self) -> &'static [Slot] {
        match self {
            Foot::Iambus => &[O, X],
            Foot::Choree => &[X, O],
            Foot::Dactyl => &[X, O, O],
            Foot::Amphibrach => &[O, X, O],
            Foot::Anapest => &[O, O, X],
        }
    }

    /// Incomplete final foot for a line leaving `remainder` syllables.
    ///
    /// The returned slice always has `remainder` slots; it is empty for a
    /// remainder of zero or one not smaller than the foot length.
    pub fn tail(self, remainder: usize) -> &'static [Slot] {
        match (self, remainder) {
            (Foot::Iambus, 1) => &[O],
            (Foot::Choree, 1) => &[X],
            (Foot::Dactyl, 1) => &[X],
            (Foot::Dactyl, 2) => &[X, O],
            (Foot::Amphibrach, 1) => &[O],
            (Foot::Amphibrach, 2) => &[O, X],
            (Foot::Anapest, 1) => &[O],
            (Foot::Anapest, 2) => &[O, O],
            _ => &[],
        }
    }
}

impl fmt::Display for Foot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Foot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Foot::ALL
            .into_iter()
            .find(|foot| foot.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown foot: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_has_one_free_slot() {
        for foot in Foot::ALL {
            assert_eq!(foot.base().len(), foot.len());
            let free = foot.base().iter().filter(|&&s| s == Slot::Free).count();
            assert_eq!(free, 1, "{} must have exactly one free slot", foot);
        }
    }

    #[test]
    fn test_tail_lengths_match_remainder() {
        for foot in Foot::ALL {
            assert!(foot.tail(0).is_empty());
            for remainder in 1..foot.len() {
                assert_eq!(foot.tail(remainder).len(), remainder, "{} r={}", foot, remainder);
            }
            assert!(foot.tail(foot.len()).is_empty());
        }
    }

    #[test]
    fn test_category_order() {
        assert_eq!(FootCategory::Di.feet(), &[Foot::Iambus, Foot::Choree]);
        assert_eq!(
            FootCategory::Tri.feet(),
            &[Foot::Dactyl, Foot::Amphibrach, Foot::Anapest]
        );
        let declared: Vec<Foot> = [FootCategory::Di, FootCategory::Tri]
            .iter()
            .flat_map(|c| c.feet().iter().copied())
            .collect();
        assert_eq!(declared, Foot::ALL.to_vec());
    }

    #[test]
    fn test_names_round_trip() {
        for foot in Foot::ALL {
            assert_eq!(foot.name().parse::<Foot>().unwrap(), foot);
        }
        assert_eq!("Dactyl".parse::<Foot>().unwrap(), Foot::Dactyl);
        assert!("trochee".parse::<Foot>().is_err());
    }
}
