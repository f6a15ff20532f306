use nexus_core::{classify, Category};
use proptest::prelude::*;

proptest! {
    /// Any text lands in exactly one of the seven categories, and the same
    /// text always lands in the same one.
    #[test]
    fn classify_is_total_and_stable(text in any::<String>()) {
        let first = classify(&text);
        prop_assert!(Category::ALL.contains(&first));
        prop_assert_eq!(first, classify(&text));
    }

    /// Case never changes the outcome for ASCII input.
    #[test]
    fn classify_ignores_ascii_case(text in "[a-zA-Z ]{0,40}") {
        prop_assert_eq!(classify(&text.to_uppercase()), classify(&text.to_lowercase()));
    }

    /// A food keyword anywhere beats every later group.
    #[test]
    fn food_keyword_wins(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
        let text = format!("{prefix} uber rent mall clinic water lunch {suffix}");
        prop_assert_eq!(classify(&text), Category::Food);
    }
}

#[test]
fn test_priority_example_from_dashboard() {
    assert_eq!(classify("lunch during the uber ride"), Category::Food);
}
