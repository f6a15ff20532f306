//! Receipt board: uploads appear immediately as placeholders and are
//! completed later by merging a simulated extraction into them.
//!
//! The board knows nothing about timers. Hosts choose when to call
//! [`ReceiptBoard::merge`]; [`stagger_delay`] is the default schedule.

use nexus_capture::ReceiptExtraction;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1200);
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(420);

/// Summary shown while a receipt is still being "scanned".
pub const PROCESSING_SUMMARY: &str = "Auto scanning fields using Nexus OCR + GPT extraction.";

/// Opaque id the host hands back when merging
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(String);

impl ReceiptId {
    fn generate() -> Self {
        Self(format!("rc-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Processing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReceiptState {
    Processing,
    Done(ReceiptExtraction),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptEntry {
    pub id: ReceiptId,
    pub file_name: String,
    pub state: ReceiptState,
}

impl ReceiptEntry {
    pub fn status(&self) -> ReceiptStatus {
        match self.state {
            ReceiptState::Processing => ReceiptStatus::Processing,
            ReceiptState::Done(_) => ReceiptStatus::Done,
        }
    }

    pub fn extraction(&self) -> Option<&ReceiptExtraction> {
        match &self.state {
            ReceiptState::Done(extraction) => Some(extraction),
            ReceiptState::Processing => None,
        }
    }

    pub fn summary(&self) -> &str {
        self.extraction()
            .map(|e| e.summary.as_str())
            .unwrap_or(PROCESSING_SUMMARY)
    }
}

/// Newest upload first.
#[derive(Debug, Clone, Default)]
pub struct ReceiptBoard {
    entries: Vec<ReceiptEntry>,
}

impl ReceiptBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase one: show the upload right away as "processing".
    pub fn insert_placeholder(&mut self, file_name: impl Into<String>) -> ReceiptId {
        let id = ReceiptId::generate();
        self.entries.insert(
            0,
            ReceiptEntry {
                id: id.clone(),
                file_name: file_name.into(),
                state: ReceiptState::Processing,
            },
        );
        id
    }

    /// Phase two: complete a placeholder.
    ///
    /// Returns `false` without touching anything when the id is gone (the
    /// host abandoned it) or the entry already completed.
    pub fn merge(&mut self, id: &ReceiptId, extraction: ReceiptExtraction) -> bool {
        match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) if entry.state == ReceiptState::Processing => {
                log::debug!("receipt {id} done: {}", extraction.merchant);
                entry.state = ReceiptState::Done(extraction);
                true
            }
            Some(_) => {
                log::warn!("receipt {id} already completed, ignoring merge");
                false
            }
            None => {
                log::warn!("receipt {id} no longer on the board, ignoring merge");
                false
            }
        }
    }

    /// Drop an entry, typically a placeholder the user dismissed.
    pub fn abandon(&mut self, id: &ReceiptId) -> Option<ReceiptEntry> {
        let pos = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn get(&self, id: &ReceiptId) -> Option<&ReceiptEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn entries(&self) -> &[ReceiptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True while any upload is still processing
    pub fn pending(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.status() == ReceiptStatus::Processing)
    }
}

/// Delay before the `index`-th file of one upload batch completes, so a
/// batch finishes one receipt at a time.
pub fn stagger_delay(index: usize, base: Duration, step: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_add(step.saturating_mul(index))
}
