//! Property tests for token and pattern matching.

use proptest::prelude::*;

use ism_vocab::VocabularyDefinition;

fn sci() -> VocabularyDefinition {
    VocabularyDefinition::new(["HCS", "KDK", "SI", "TK"], ["SI-G-[A-Z]{4}", "SI-ECI-[A-Z]{3}"])
        .unwrap()
}

proptest! {
    /// Every literal token matches itself.
    #[test]
    fn literal_tokens_match(tokens in prop::collection::btree_set("[A-Z0-9-]{1,12}", 1..20)) {
        let def = VocabularyDefinition::new(tokens.clone(), Vec::<String>::new()).unwrap();
        for token in &tokens {
            prop_assert!(def.matches(token));
        }
    }

    /// Without patterns, only literal tokens match.
    #[test]
    fn non_tokens_do_not_match(
        tokens in prop::collection::btree_set("[A-Z]{2,6}", 1..10),
        candidate in "[a-z]{1,8}",
    ) {
        let def = VocabularyDefinition::new(tokens, Vec::<String>::new()).unwrap();
        prop_assert!(!def.matches(&candidate));
    }

    /// Any string generated from a pattern is accepted.
    #[test]
    fn pattern_instances_match(candidate in "SI-G-[A-Z]{4}") {
        prop_assert!(sci().matches(&candidate));
    }

    /// A pattern instance with extra trailing text is rejected.
    #[test]
    fn patterns_are_anchored(candidate in "SI-G-[A-Z]{4}", suffix in "[A-Z0-9]{1,4}") {
        let value = format!("{candidate}{suffix}");
        prop_assert!(!sci().matches(&value));
        let value = format!("{suffix}{candidate}");
        prop_assert!(!sci().matches(&value));
    }
}
