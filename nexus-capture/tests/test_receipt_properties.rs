use chrono::{Days, NaiveDate};
use nexus_capture::receipt::{RECEIPT_LOOKBACK_DAYS, amount_from_byte_size};
use nexus_capture::{RandomJitter, ReceiptSimulator, parse_expense, simulate_receipt};
use nexus_core::Category;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 18).unwrap()
}

proptest! {
    #[test]
    fn amount_stays_in_range(size in any::<i64>()) {
        let amount = amount_from_byte_size(size);
        prop_assert!((420..=12419).contains(&amount));
    }

    #[test]
    fn simulate_is_total(name in any::<String>(), size in any::<i64>(), seed in any::<u64>()) {
        let mut sim = ReceiptSimulator::new(fixed_today, RandomJitter::with_rng(StdRng::seed_from_u64(seed)));
        let receipt = sim.simulate(&name, size);

        prop_assert!(!receipt.merchant.is_empty());
        prop_assert!(Category::ALL.contains(&receipt.category));
        prop_assert!(receipt.date <= fixed_today());
        let earliest = fixed_today() - Days::new(u64::from(RECEIPT_LOOKBACK_DAYS - 1));
        prop_assert!(receipt.date >= earliest);
        prop_assert!(receipt.summary.contains(&receipt.merchant));
        let category_tag = format!("Tagged to {}.", receipt.category);
        prop_assert!(receipt.summary.ends_with(&category_tag));
    }

    #[test]
    fn parse_never_panics(text in any::<String>()) {
        if let Some(expense) = parse_expense(&text) {
            prop_assert_eq!(expense.description.trim(), expense.description.as_str());
        }
    }

    #[test]
    fn spent_amount_is_taken_verbatim(amount in 0u32..1_000_000) {
        let expense = parse_expense(&format!("I spent {amount} on dinner")).unwrap();
        prop_assert_eq!(expense.amount, u64::from(amount));
        prop_assert_eq!(expense.category, Category::Food);
    }
}

#[test]
fn test_system_clock_receipt_is_recent() {
    let today = chrono::Local::now().date_naive();
    let receipt = simulate_receipt("indigo-flight.pdf", 89600);

    assert_eq!(receipt.merchant, "Indigo Flight");
    assert_eq!(receipt.category, Category::Travel);
    assert!((420..=12419).contains(&receipt.amount));
    // Allow for the test straddling midnight.
    assert!(receipt.date <= today + Days::new(1));
    assert!(receipt.date >= today - Days::new(u64::from(RECEIPT_LOOKBACK_DAYS)));
    assert!(receipt.summary.contains("Indigo Flight"));
    assert!(receipt.summary.contains("11,620"));
    assert!(receipt.summary.contains("Travel"));
}
