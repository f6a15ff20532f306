//! Plain-text rendering for terminal output.

use nexus_core::{format_display_date, format_inr};
use nexus_ledger::{ReceiptEntry, ReceiptState, SplitGroup, Transaction};

pub fn transaction_row(t: &Transaction) -> String {
    format!(
        "{} | {:<28} | {:<9} | {:>10} | {}",
        format_display_date(t.date),
        t.description,
        t.category,
        format_inr(t.amount),
        t.method
    )
}

pub fn receipt_row(r: &ReceiptEntry) -> String {
    match &r.state {
        ReceiptState::Processing => format!("[processing] {} | Detecting…", r.file_name),
        ReceiptState::Done(e) => format!(
            "[done] {} | {} | {} | {} | {}",
            r.file_name,
            e.merchant,
            format_inr(e.amount),
            format_display_date(e.date),
            e.category
        ),
    }
}

pub fn group_row(g: &SplitGroup) -> String {
    format!(
        "{} | {} | total {} | owed {} | owe {}\n    {}\n    {}",
        g.id,
        g.name,
        format_inr(g.total),
        format_inr(g.owed),
        format_inr(g.owe),
        g.suggestion,
        g.reminder
    )
}

pub fn lines<T>(items: impl IntoIterator<Item = T>, row: impl Fn(T) -> String, empty: &str) -> String {
    let rendered: Vec<String> = items.into_iter().map(row).collect();
    if rendered.is_empty() {
        empty.to_string()
    } else {
        rendered.join("\n")
    }
}
