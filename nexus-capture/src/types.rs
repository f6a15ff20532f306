use chrono::NaiveDate;
use nexus_core::{Category, PaymentMethod};
use serde::{Deserialize, Serialize};

/// An expense recognised in a typed or dictated utterance.
///
/// Carries no id or date: the ledger stamps both when the record is logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Whole rupees, rounded from whatever the speaker said
    pub amount: u64,
    pub description: String,
    pub category: Category,
    pub method: PaymentMethod,
}

/// Fields synthesized for an uploaded receipt from its file metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptExtraction {
    pub merchant: String,
    /// Always within 420..=12419
    pub amount: u64,
    pub category: Category,
    pub date: NaiveDate,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expense_record_json_shape() {
        let expense = ExpenseRecord {
            amount: 250,
            description: "lunch with Rhea".to_string(),
            category: Category::Food,
            method: PaymentMethod::Upi,
        };
        assert_eq!(
            serde_json::to_value(&expense).unwrap(),
            json!({
                "amount": 250,
                "description": "lunch with Rhea",
                "category": "Food",
                "method": "UPI",
            })
        );
    }

    #[test]
    fn test_receipt_extraction_round_trips() {
        let receipt = ReceiptExtraction {
            merchant: "Indigo Flight".to_string(),
            amount: 11620,
            category: Category::Travel,
            date: NaiveDate::from_ymd_opt(2024, 9, 5).unwrap(),
            summary: "AI extracted Indigo Flight purchase for ₹11,620 on 05 Sept 2024. Tagged to Travel."
                .to_string(),
        };
        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["date"], "2024-09-05");
        assert_eq!(value["category"], "Travel");

        let back: ReceiptExtraction = serde_json::from_value(value).unwrap();
        assert_eq!(back, receipt);
    }
}
