//! nexus-ledger: dashboard state fed by the capture parsers: transaction log,
//! receipt board, assistant, group tracker and insight report.

pub mod assistant;
pub mod groups;
pub mod insights;
pub mod receipt_board;
pub mod transaction_log;

pub use assistant::{Assistant, ChatMessage, Reply, Role, WALLET_TOPUP_NOTICE};
pub use groups::{GroupTracker, SplitGroup};
pub use insights::InsightReport;
pub use receipt_board::{ReceiptBoard, ReceiptEntry, ReceiptId, ReceiptState, ReceiptStatus, stagger_delay};
pub use transaction_log::{Transaction, TransactionFilter, TransactionLog};
