//! nexus-core: Core types and utilities for the Nexus finance dashboard

pub mod finance;
pub mod money;
pub mod time;

pub use finance::{Category, PaymentMethod};
pub use money::{format_inr, group_inr};
pub use time::{format_clock, format_display_date, DISPLAY_DATE_FMT};

/// Keyword classifier mapping free text to a spending category
pub mod categorizer {
    use super::Category;

    /// Keyword groups in priority order. The first group with a keyword
    /// occurring anywhere in the lower-cased text wins.
    pub const KEYWORD_RULES: [(Category, &[&str]); 6] = [
        (
            Category::Food,
            &["food", "lunch", "dinner", "coffee", "restaurant", "burger", "pizza"],
        ),
        (
            Category::Travel,
            &["uber", "flight", "travel", "ride", "cab", "train", "metro"],
        ),
        (
            Category::Bills,
            &["rent", "electric", "bill", "subscription", "power", "netflix"],
        ),
        (
            Category::Shopping,
            &["shopping", "mall", "amazon", "flipkart", "fashion", "clothes"],
        ),
        (
            Category::Wellness,
            &["doctor", "clinic", "health", "wellness", "fitness"],
        ),
        (Category::Utilities, &["water", "gas", "utility", "internet"]),
    ];

    /// Classify a description, utterance or file name.
    ///
    /// Total over all input: anything without a known keyword is `Other`.
    pub fn classify(text: &str) -> Category {
        let lowered = text.to_lowercase();

        KEYWORD_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

}

pub use categorizer::classify;
