//! Expense-utterance parser.
//!
//! Turns one typed or transcribed sentence into an [`ExpenseRecord`]:
//!
//!   "I spent 250 on lunch with Rhea"  ->  250 | lunch with Rhea | Food | UPI
//!   "₹1450 uber to airport via card"  ->  1450 | Voice logged expense | Travel | CARD
//!
//! Amount lookup order: `spent [₹] <number>` first, then `₹<number>` anywhere.
//! Sentences with neither are not expense-logging utterances.

use std::sync::LazyLock;

use nexus_core::{PaymentMethod, classify};
use regex::Regex;

use crate::types::ExpenseRecord;

/// Description used when the sentence has no "on <something>" clause.
pub const FALLBACK_DESCRIPTION: &str = "Voice logged expense";

// [0-9] rather than \d: Unicode digits would match but never parse as f64.
static SPENT_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)spent\s*₹?\s*([0-9]+(?:\.[0-9]+)?)").expect("invalid spent-amount pattern")
});

static GLYPH_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"₹\s*([0-9]+(?:\.[0-9]+)?)").expect("invalid glyph-amount pattern")
});

static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\s([^.,]+)").expect("invalid description pattern"));

static AMOUNT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"₹[0-9]+").expect("invalid amount-token pattern"));

static METHOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)upi|card|cash|wallet").expect("invalid method pattern"));

/// Parse an utterance into an expense.
///
/// Returns `None` when no amount can be located; callers answer those
/// conversationally instead of logging anything.
pub fn parse_expense(utterance: &str) -> Option<ExpenseRecord> {
    let amount = extract_amount(utterance)?;
    let description = extract_description(utterance);
    let category = classify(utterance);
    let method = extract_method(utterance);

    log::debug!("parsed expense: amount={amount} category={category} method={method}");

    Some(ExpenseRecord {
        amount,
        description,
        category,
        method,
    })
}

/// First amount per the lookup order, rounded half away from zero.
/// Values too large for `u64` saturate.
fn extract_amount(text: &str) -> Option<u64> {
    let caps = SPENT_AMOUNT_RE
        .captures(text)
        .or_else(|| GLYPH_AMOUNT_RE.captures(text))?;
    let raw: f64 = caps[1].parse().ok()?;
    Some(raw.round() as u64)
}

fn extract_description(text: &str) -> String {
    let Some(caps) = DESCRIPTION_RE.captures(text) else {
        return FALLBACK_DESCRIPTION.to_string();
    };

    // Only the ends are trimmed; a clause that was all amount stays empty.
    AMOUNT_TOKEN_RE
        .replace_all(caps[1].trim(), "")
        .trim()
        .to_string()
}

fn extract_method(text: &str) -> PaymentMethod {
    METHOD_RE
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_default()
}
