//! Property tests for message interpolation.

use proptest::prelude::*;

use phonetree::script::interpolate;
use phonetree::Variables;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: text without braces is returned unchanged.
    #[test]
    fn property_plain_text_unchanged(text in "[^{}]{0,64}") {
        prop_assert_eq!(interpolate(&text, &Variables::new()), text);
    }

    /// PROPERTY: interpolation never panics on arbitrary templates.
    #[test]
    fn property_never_panics(text in "(?s).{0,128}", value in ".{0,16}") {
        let mut variables = Variables::new();
        variables.insert("name".to_string(), value);
        let _ = interpolate(&text, &variables);
    }

    /// PROPERTY: a known placeholder is replaced by its value.
    #[test]
    fn property_known_name_substituted(
        prefix in "[^{}]{0,16}",
        suffix in "[^{}]{0,16}",
        value in "[^{}]{0,16}",
    ) {
        let mut variables = Variables::new();
        variables.insert("name".to_string(), value.clone());
        let rendered = interpolate(&format!("{prefix}{{name}}{suffix}"), &variables);
        prop_assert_eq!(rendered, format!("{prefix}{value}{suffix}"));
    }
}
