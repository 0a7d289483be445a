//! Property-based tests for the phonetic normalizer.
//!
//! 1. **Coverage**: concatenated runs reproduce the letters of the clause
//! 2. **Alternation**: adjacent runs of an unbroken clause differ in kind
//! 3. **Determinism**: normalizing twice gives the same groups
//! 4. **Consonance is vowel-free** and never longer than the input

#[cfg(test)]
mod tests {
    use super::super::application::{consonance_form, letter_groups, pseudo_phonetic};
    use super::super::types::GroupKind;
    use crate::line::{is_consonant, is_vowel, ACUTE};
    use proptest::prelude::*;

    fn arb_clause() -> impl Strategy<Value = String> {
        prop::string::string_regex("[бвгджзйклмнпрстфхцчшщъьаеёиоуыэюя\u{301}]{0,16}").unwrap()
    }

    fn arb_noisy_clause() -> impl Strategy<Value = String> {
        prop::string::string_regex("[бвдзклмнростаеиоуюя\u{301} ,x1-]{0,16}").unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn groups_cover_all_letters(clause in arb_noisy_clause()) {
            let joined: String = letter_groups(&clause).into_iter().map(|g| g.text).collect();
            let letters: String = clause
                .chars()
                .filter(|&c| is_consonant(c) || is_vowel(c) || c == ACUTE)
                .collect();
            prop_assert_eq!(joined, letters);
        }

        #[test]
        fn groups_alternate(clause in arb_clause()) {
            let groups = letter_groups(&clause);
            for pair in groups.windows(2) {
                prop_assert_ne!(pair[0].kind, pair[1].kind);
            }
        }

        #[test]
        fn group_kinds_are_homogeneous(clause in arb_clause()) {
            for group in letter_groups(&clause) {
                let consonants = group.text.chars().all(is_consonant);
                match group.kind {
                    GroupKind::Consonants => prop_assert!(consonants),
                    GroupKind::Vowels => prop_assert!(!group.text.chars().any(is_consonant)),
                }
            }
        }

        #[test]
        fn pseudo_phonetic_is_deterministic(clause in arb_clause()) {
            prop_assert_eq!(pseudo_phonetic(&clause), pseudo_phonetic(&clause));
        }

        #[test]
        fn pseudo_phonetic_keeps_group_count(clause in arb_clause()) {
            prop_assert_eq!(pseudo_phonetic(&clause).len(), letter_groups(&clause).len());
        }

        #[test]
        fn consonance_form_has_no_vowels(clause in arb_noisy_clause()) {
            let form = consonance_form(&clause);
            prop_assert!(form.iter().all(|&c| is_consonant(c)));
            prop_assert!(form.len() <= clause.chars().count());
        }
    }
}
