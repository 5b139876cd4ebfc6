//! Property tests for the similarity score.

use proptest::prelude::*;

use phonetree::similarity;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every string is identical to itself.
    #[test]
    fn property_reflexive(s in "(?s).{0,64}") {
        prop_assert_eq!(similarity(&s, &s), 1.0);
    }

    /// PROPERTY: argument order does not matter.
    #[test]
    fn property_symmetric(a in "[a-z0-9 ]{0,24}", b in "[a-z0-9 ]{0,24}") {
        prop_assert!((similarity(&a, &b) - similarity(&b, &a)).abs() < 1e-12);
    }

    /// PROPERTY: scores stay within [0, 1].
    #[test]
    fn property_bounded(a in "(?s).{0,48}", b in "(?s).{0,48}") {
        let score = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    /// PROPERTY: strings without a common character score zero.
    #[test]
    fn property_disjoint_alphabets_score_zero(a in "[a-m]{1,16}", b in "[n-z]{1,16}") {
        prop_assert_eq!(similarity(&a, &b), 0.0);
    }
}
