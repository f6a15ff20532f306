//! Voice/typed assistant: routes each utterance either into the
//! transaction log or to a canned conversational answer.

use chrono::NaiveDateTime;
use nexus_capture::parse_expense;
use nexus_core::{format_clock, format_inr};
use serde::{Deserialize, Serialize};

use crate::transaction_log::TransactionLog;

pub const ANALYSING_REPLY: &str =
    "Nexus AI is analysing cashflow signatures. Expect an insight drop in a moment.";

pub const WALLET_TOPUP_NOTICE: &str =
    "Wallet topped up with ₹2,000 from HDFC UPI. Cashback boost: +₹120 predicted.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// "HH:MM"
    pub timestamp: String,
}

/// What the assistant did with an utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// An expense was recognised and appended to the log
    Logged { transaction_id: String, text: String },
    /// Not an expense; answered conversationally
    Conversational(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Logged { text, .. } => text,
            Reply::Conversational(text) => text,
        }
    }
}

/// Chat history for one session. Transactions live in the caller's log.
#[derive(Debug, Clone, Default)]
pub struct Assistant {
    messages: Vec<ChatMessage>,
}

impl Assistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Handle one utterance. Blank input is ignored and returns `None`.
    pub fn process(
        &mut self,
        input: &str,
        log: &mut TransactionLog,
        now: NaiveDateTime,
    ) -> Option<Reply> {
        let clean = input.trim();
        if clean.is_empty() {
            return None;
        }
        self.push(Role::User, clean, now);

        let reply = match parse_expense(clean) {
            Some(expense) => {
                let txn = log.record(expense, now.date());
                let text = format!(
                    "Logged {} under {}. Trendline updated and wallet cashback routes optimised.",
                    format_inr(txn.amount),
                    txn.category
                );
                Reply::Logged {
                    transaction_id: txn.id.clone(),
                    text,
                }
            }
            None => Reply::Conversational(conversational_reply(clean, log)),
        };

        self.push(Role::Assistant, reply.text(), now);
        Some(reply)
    }

    /// Append an assistant-originated notice (e.g. a wallet top-up).
    pub fn notify(&mut self, content: &str, now: NaiveDateTime) {
        self.push(Role::Assistant, content, now);
    }

    fn push(&mut self, role: Role, content: &str, now: NaiveDateTime) {
        let suffix = match role {
            Role::User => "user",
            Role::Assistant => "ai",
        };
        self.messages.push(ChatMessage {
            id: format!("msg-{}-{}-{suffix}", now.and_utc().timestamp_millis(), self.messages.len()),
            role,
            content: content.to_string(),
            timestamp: format_clock(now),
        });
    }
}

fn conversational_reply(input: &str, log: &TransactionLog) -> String {
    if !input.to_lowercase().contains("top spending") {
        return ANALYSING_REPLY.to_string();
    }

    let top = log
        .top_spends(3)
        .iter()
        .map(|t| format!("{} — {}", t.description, format_inr(t.amount)))
        .collect::<Vec<_>>()
        .join("; ");

    if top.is_empty() {
        return "No spends logged yet. Tell me what you spent and I will track it.".to_string();
    }
    format!("Top spends: {top}. Food wallet optimisations can trim ₹1,450 next cycle.")
}
