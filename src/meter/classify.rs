//! Foot matching against a stress scheme.
//!
//! For a scheme of `n` syllables and a foot of length `L`, the expected
//! pattern is the foot's base repeated `n / L` times followed by its tail
//! for `n % L`. The pattern always spans the whole scheme, so a match is a
//! plain slot-by-slot comparison.

use smallvec::SmallVec;

use super::feet::{Foot, FootCategory, Slot};
use crate::line::StressScheme;

/// Expected slot pattern of `foot` over `syllables` positions.
pub fn expected_pattern(foot: Foot, syllables: usize) -> SmallVec<[Slot; 24]> {
    let (count, remainder) = (syllables / foot.len(), syllables % foot.len());
    let mut pattern = SmallVec::with_capacity(syllables);
    for _ in 0..count {
        pattern.extend_from_slice(foot.base());
    }
    if remainder > 0 {
        pattern.extend_from_slice(foot.tail(remainder));
    }
    pattern
}

/// Returns true if every syllable of `scheme` fits the pattern of `foot`.
pub fn matches(foot: Foot, scheme: &StressScheme) -> bool {
    let pattern = expected_pattern(foot, scheme.len());
    pattern.len() == scheme.len()
        && pattern
            .iter()
            .zip(scheme.bits())
            .all(|(slot, &bit)| slot.accepts(bit))
}

/// Every foot consistent with `scheme`, two-syllable feet first.
///
/// A scheme without syllables or without a single stress carries no metre
/// and yields no feet.
pub fn classify(scheme: &StressScheme) -> Vec<Foot> {
    if scheme.is_empty() || !scheme.has_stress() {
        tracing::trace!(scheme = %scheme, "no stressed syllable, skipping metre");
        return Vec::new();
    }
    let feet: Vec<Foot> = [FootCategory::Di, FootCategory::Tri]
        .iter()
        .flat_map(|category| category.feet().iter().copied())
        .filter(|&foot| matches(foot, scheme))
        .collect();
    tracing::trace!(scheme = %scheme, feet = ?feet, "classified");
    feet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;

    fn scheme(s: &str) -> StressScheme {
        s.parse().unwrap()
    }

    #[test]
    fn test_pattern_lengths() {
        for foot in Foot::ALL {
            for n in 0..20 {
                assert_eq!(expected_pattern(foot, n).len(), n, "{} n={}", foot, n);
            }
        }
    }

    #[test]
    fn test_reference_meters() {
        let cases = [
            ("Мои́ боги́ни! что́ вы? где́ вы?", vec!["iambus"]),
            ("Выхожу́ оди́н я на доро́гу...", vec!["choree"]),
            ("Ту́чки небе́сные, ве́чные стра́нники…", vec!["dactyl"]),
            ("Не с го́р побежа́ли ручьи́", vec!["amphibrach"]),
            ("О, весна́ без конца́ и без кра́ю —", vec!["anapest"]),
            ("Не ве́тер бушу́ет над бо́ром,", vec!["amphibrach"]),
        ];
        for (raw, expected) in cases {
            assert_eq!(Line::new(raw).possible_meters(), expected, "{}", raw);
        }
    }

    #[test]
    fn test_catalectic_tails() {
        // iambic tetrameter with a feminine ending
        assert_eq!(classify(&scheme("010101010")), vec![Foot::Iambus]);
        // dactyl with one and two leftover syllables
        assert!(matches(Foot::Dactyl, &scheme("1001")));
        assert!(matches(Foot::Dactyl, &scheme("10010")));
        assert!(!matches(Foot::Dactyl, &scheme("10001")));
        // amphibrach tail of two allows a final stress
        assert!(matches(Foot::Amphibrach, &scheme("01001")));
        // anapest tails are fully unstressed
        assert!(matches(Foot::Anapest, &scheme("00100")));
        assert!(!matches(Foot::Anapest, &scheme("00101")));
    }

    #[test]
    fn test_ambiguity_is_preserved() {
        // a lone stressed syllable fits choree and dactyl
        assert_eq!(classify(&scheme("1")), vec![Foot::Choree, Foot::Dactyl]);
        assert_eq!(
            classify(&scheme("0100")),
            vec![Foot::Iambus, Foot::Amphibrach]
        );
        assert_eq!(classify(&scheme("0010")), vec![Foot::Choree, Foot::Anapest]);
        assert_eq!(classify(&scheme("100")), vec![Foot::Choree, Foot::Dactyl]);
    }

    #[test]
    fn test_irregular_line_matches_nothing() {
        assert!(classify(&scheme("1111")).is_empty());
        assert!(classify(&scheme("110011")).is_empty());
    }

    #[test]
    fn test_unstressed_and_empty_schemes() {
        let zeros = scheme("00000");
        // every template accepts all zeros, the guard rejects them
        assert!(Foot::ALL.iter().all(|&foot| matches(foot, &zeros)));
        assert!(classify(&zeros).is_empty());
        assert!(classify(&StressScheme::default()).is_empty());
        assert!(Line::new("без ударений").possible_meters().is_empty());
    }

    #[test]
    fn test_idempotent() {
        let line = Line::new("Мои́ боги́ни! что́ вы? где́ вы?");
        assert_eq!(line.possible_meters(), line.possible_meters());
    }
}
