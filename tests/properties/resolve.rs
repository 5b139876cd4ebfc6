//! Property tests for option selection.

use proptest::prelude::*;

use phonetree::resolve::DEFAULT_THRESHOLD;
use phonetree::{resolve, MenuOption, PhoneTree, Target};

fn labels() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Za-z][A-Za-z ]{0,15}", 1..=8)
}

/// A root menu with one action per label, plus its effective options.
fn menu(labels: &[String]) -> Vec<MenuOption> {
    let mut tree: PhoneTree<()> = PhoneTree::default();
    let root = tree.root();
    for label in labels {
        tree.add_action(root, label.as_str()).unwrap();
    }
    tree.effective_options(root).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolution never panics, whatever the input.
    #[test]
    fn property_resolve_never_panics(
        labels in labels(),
        input in "(?s).{0,64}",
        threshold in 0.0f64..=1.0,
    ) {
        let _ = resolve(&menu(&labels), &input, threshold);
    }

    /// PROPERTY: typing a label exactly (any case) selects an option whose
    /// label folds to the same text.
    #[test]
    fn property_exact_label_wins(labels in labels(), pick in any::<prop::sample::Index>()) {
        let options = menu(&labels);
        let chosen = &options[pick.index(options.len())];

        let target = resolve(&options, &chosen.label.to_uppercase(), DEFAULT_THRESHOLD);
        let matched = options.iter().find(|o| Some(o.target) == target);

        prop_assert!(matched.is_some());
        prop_assert_eq!(
            matched.map(|o| o.label.to_lowercase()),
            Some(chosen.label.to_lowercase())
        );
    }

    /// PROPERTY: the root menu always offers exactly one exit, last.
    #[test]
    fn property_root_ends_with_single_exit(labels in labels()) {
        let options = menu(&labels);
        prop_assert_eq!(options.len(), labels.len() + 1);
        prop_assert_eq!(options.last().map(|o| o.target), Some(Target::Terminal));
        prop_assert_eq!(options.iter().filter(|o| o.target == Target::Terminal).count(), 1);
    }

    /// PROPERTY: a matched option is always one of the offered ones.
    #[test]
    fn property_result_is_an_offered_target(labels in labels(), input in "[a-z0-9]{0,12}") {
        let options = menu(&labels);
        if let Some(target) = resolve(&options, &input, DEFAULT_THRESHOLD) {
            prop_assert!(options.iter().any(|o| o.target == target));
        }
    }
}
