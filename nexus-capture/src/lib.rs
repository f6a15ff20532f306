//! nexus-capture: turns utterances and receipt uploads into structured records.

pub mod receipt;
pub mod types;
pub mod utterance;

pub use receipt::{Clock, DayJitter, RandomJitter, ReceiptSimulator, SystemClock, simulate_receipt};
pub use types::{ExpenseRecord, ReceiptExtraction};
pub use utterance::{FALLBACK_DESCRIPTION, parse_expense};
