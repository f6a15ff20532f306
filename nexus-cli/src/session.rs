//! Interactive dashboard session behind `nexus chat`.
//!
//! Plain lines go to the assistant; lines starting with `/` are commands.
//! Nothing outlives the session.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use nexus_core::{Category, PaymentMethod};
use nexus_ledger::{
    Assistant, GroupTracker, InsightReport, ReceiptBoard, TransactionFilter, TransactionLog,
    WALLET_TOPUP_NOTICE,
};
use std::path::Path;

use crate::config::ScanSection;
use crate::render;
use crate::scan::{ScanEvent, Upload, scan_uploads};

pub const HELP: &str = "\
Say what you spent (\"I spent 250 on lunch with Rhea\") or ask a question.
Commands:
  /log [filter]      recent transactions (category, method or search words)
  /receipts          receipt board
  /scan <path>...    upload receipts
  /groups            group expenses
  /group <name>      track a new group
  /suggest <id>      settle-up hint for a group
  /insights          highlights and alerts
  /topup             top up the wallet
  /export <path>     write the insight report
  /help              this text
  /quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

#[derive(Debug, Default)]
pub struct Session {
    pub log: TransactionLog,
    pub board: ReceiptBoard,
    pub groups: GroupTracker,
    pub assistant: Assistant,
    scan: ScanSection,
}

impl Session {
    pub fn new(scan: ScanSection) -> Self {
        Self {
            scan,
            ..Default::default()
        }
    }

    pub async fn handle_line(&mut self, line: &str, now: NaiveDateTime) -> Result<Outcome> {
        let line = line.trim();
        let Some(command) = line.strip_prefix('/') else {
            let reply = self
                .assistant
                .process(line, &mut self.log, now)
                .map(|r| r.text().to_string())
                .unwrap_or_default();
            return Ok(Outcome::Reply(reply));
        };

        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map(|(n, a)| (n, a.trim()))
            .unwrap_or((command, ""));

        let text = match name {
            "quit" | "exit" => return Ok(Outcome::Quit),
            "help" => HELP.to_string(),
            "log" if arg.is_empty() => {
                render::lines(self.log.recent(), render::transaction_row, "No transactions yet.")
            }
            "log" => render::lines(
                self.log.filter(&parse_filter(arg)),
                render::transaction_row,
                "No matching transactions.",
            ),
            "receipts" => render::lines(self.board.entries(), render::receipt_row, "No receipts yet."),
            "scan" => self.scan_paths(arg).await?,
            "groups" => render::lines(self.groups.groups(), render::group_row, "No groups yet."),
            "group" => match self.groups.add_group(arg) {
                Some(g) => format!("Tracking {} ({})", g.name, g.id),
                None => "Usage: /group <name>".to_string(),
            },
            "suggest" => {
                if self.groups.generate_suggestion(arg) {
                    self.groups
                        .get(arg)
                        .map(render::group_row)
                        .unwrap_or_default()
                } else {
                    format!("No group with id {arg:?}")
                }
            }
            "topup" => {
                self.assistant.notify(WALLET_TOPUP_NOTICE, now);
                WALLET_TOPUP_NOTICE.to_string()
            }
            "insights" => InsightReport::build(&self.log, now.date()).render_document(now),
            "export" => {
                if arg.is_empty() {
                    "Usage: /export <path>".to_string()
                } else {
                    let doc = InsightReport::build(&self.log, now.date()).render_document(now);
                    std::fs::write(Path::new(arg), doc).with_context(|| format!("write {arg}"))?;
                    format!("Wrote {arg}")
                }
            }
            other => format!("Unknown command /{other}. Try /help."),
        };

        Ok(Outcome::Reply(text))
    }

    async fn scan_paths(&mut self, args: &str) -> Result<String> {
        if args.is_empty() {
            return Ok("Usage: /scan <path>...".to_string());
        }
        let uploads = args
            .split_whitespace()
            .map(|p| Upload::from_path(Path::new(p)))
            .collect::<Result<Vec<_>>>()?;

        let mut rows = Vec::new();
        scan_uploads(&mut self.board, uploads, &self.scan, |event| match event {
            ScanEvent::Queued(entry) | ScanEvent::Done(entry) => {
                rows.push(render::receipt_row(entry))
            }
        })
        .await;
        Ok(rows.join("\n"))
    }
}

/// Words naming a category or payment method become exact filters; the rest
/// is the search text.
fn parse_filter(arg: &str) -> TransactionFilter {
    let mut filter = TransactionFilter::default();
    let mut search = Vec::new();
    for word in arg.split_whitespace() {
        if let Ok(category) = word.parse::<Category>() {
            filter.category = Some(category);
        } else if let Ok(method) = word.parse::<PaymentMethod>() {
            filter.method = Some(method);
        } else {
            search.push(word);
        }
    }
    if !search.is_empty() {
        filter.search = Some(search.join(" "));
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 18)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn session() -> Session {
        Session::new(ScanSection {
            base_delay_ms: 0,
            step_delay_ms: 0,
        })
    }

    async fn reply(s: &mut Session, line: &str) -> String {
        match s.handle_line(line, now()).await.unwrap() {
            Outcome::Reply(text) => text,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[tokio::test]
    async fn test_utterance_is_logged_and_listed() {
        let mut s = session();
        let text = reply(&mut s, "I spent 250 on lunch with Rhea").await;
        assert!(text.starts_with("Logged ₹250 under Food."));

        let table = reply(&mut s, "/log").await;
        assert!(table.contains("lunch with Rhea"));
    }

    #[tokio::test]
    async fn test_log_filters() {
        let mut s = session();
        reply(&mut s, "spent 320 on coffee").await;
        reply(&mut s, "spent 1450 on uber to airport via card").await;

        let travel = reply(&mut s, "/log travel card").await;
        assert!(travel.contains("uber to airport"));
        assert!(!travel.contains("coffee"));

        assert!(reply(&mut s, "/log coffee").await.contains("coffee"));
        assert_eq!(reply(&mut s, "/log wellness").await, "No matching transactions.");
    }

    #[tokio::test]
    async fn test_group_commands() {
        let mut s = session();
        assert_eq!(reply(&mut s, "/groups").await, "No groups yet.");
        assert!(reply(&mut s, "/group Bali Offsite").await.starts_with("Tracking Bali Offsite"));
        assert_eq!(reply(&mut s, "/group").await, "Usage: /group <name>");

        let id = s.groups.groups()[0].id.clone();
        let hint = reply(&mut s, &format!("/suggest {id}")).await;
        assert!(hint.contains("balancing with one transfer"));
        assert!(reply(&mut s, "/suggest grp-nope").await.starts_with("No group"));
    }

    #[tokio::test]
    async fn test_scan_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let receipt = dir.path().join("apollo_clinic.png");
        std::fs::write(&receipt, vec![0u8; 14_400]).unwrap();

        let mut s = session();
        let out = reply(&mut s, &format!("/scan {}", receipt.display())).await;
        assert!(out.starts_with("[processing] apollo_clinic.png"));
        assert!(out.contains("Apollo Clinic"));
        assert!(out.contains("₹2,220"));
        assert!(!s.board.pending());

        let doc_path = dir.path().join("summary.txt");
        let out = reply(&mut s, &format!("/export {}", doc_path.display())).await;
        assert!(out.starts_with("Wrote"));
        let doc = std::fs::read_to_string(&doc_path).unwrap();
        assert!(doc.starts_with("Nexus AI • April Summary"));
    }

    #[tokio::test]
    async fn test_topup_posts_assistant_notice() {
        let mut s = session();
        assert_eq!(reply(&mut s, "/topup").await, WALLET_TOPUP_NOTICE);

        let last = s.assistant.messages().last().unwrap();
        assert_eq!(last.role, nexus_ledger::Role::Assistant);
        assert_eq!(last.content, WALLET_TOPUP_NOTICE);
        assert!(s.log.is_empty());
    }

    #[tokio::test]
    async fn test_quit_and_unknown() {
        let mut s = session();
        assert_eq!(s.handle_line("/quit", now()).await.unwrap(), Outcome::Quit);
        assert!(reply(&mut s, "/dance").await.starts_with("Unknown command /dance"));
        assert_eq!(reply(&mut s, "   ").await, "");
    }
}
