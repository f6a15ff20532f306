//! Rupee amount rendering with Indian digit grouping.

use num_format::{Locale, ToFormattedString as _};

/// Group digits the en-IN way: 1,50,000 rather than 150,000.
pub fn group_inr(amount: u64) -> String {
    amount.to_formatted_string(&Locale::en_IN)
}

/// Grouped amount prefixed with the rupee glyph, e.g. "₹11,200".
pub fn format_inr(amount: u64) -> String {
    format!("₹{}", group_inr(amount))
}
