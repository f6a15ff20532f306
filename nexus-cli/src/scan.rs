//! Staged receipt scanning: every file shows up on the board as a
//! placeholder immediately and completes after its own delay.

use anyhow::{Context, Result, bail};
use nexus_capture::simulate_receipt;
use nexus_ledger::{ReceiptBoard, ReceiptEntry, ReceiptId, stagger_delay};
use std::fs;
use std::path::Path;
use tokio::task::JoinSet;

use crate::config::ScanSection;

/// What the simulator gets to see of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub byte_size: i64,
}

impl Upload {
    pub fn from_path(path: &Path) -> Result<Self> {
        let meta = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
        if !meta.is_file() {
            bail!("not a file: {}", path.display());
        }
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            file_name,
            byte_size: i64::try_from(meta.len()).unwrap_or(i64::MAX),
        })
    }
}

/// Board changes reported while a batch is scanned
#[derive(Debug, Clone, Copy)]
pub enum ScanEvent<'a> {
    /// Placeholder inserted, still processing
    Queued(&'a ReceiptEntry),
    /// Extraction merged into the placeholder
    Done(&'a ReceiptEntry),
}

/// Insert placeholders for `uploads`, then merge each simulated extraction
/// as its delay elapses. `on_event` sees every placeholder as it is inserted
/// and every entry right after its merge.
pub async fn scan_uploads(
    board: &mut ReceiptBoard,
    uploads: Vec<Upload>,
    scan: &ScanSection,
    mut on_event: impl FnMut(ScanEvent<'_>),
) -> Vec<ReceiptId> {
    let mut ids = Vec::with_capacity(uploads.len());
    for upload in &uploads {
        let id = board.insert_placeholder(upload.file_name.clone());
        if let Some(entry) = board.get(&id) {
            on_event(ScanEvent::Queued(entry));
        }
        ids.push(id);
    }

    let mut tasks = JoinSet::new();
    for (index, (id, upload)) in ids.iter().cloned().zip(uploads).enumerate() {
        let delay = stagger_delay(index, scan.base_delay(), scan.step_delay());
        tasks.spawn(async move {
            tokio::time::sleep(delay).await;
            let extraction = simulate_receipt(&upload.file_name, upload.byte_size);
            (id, extraction)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((id, extraction)) => {
                if board.merge(&id, extraction) {
                    if let Some(entry) = board.get(&id) {
                        on_event(ScanEvent::Done(entry));
                    }
                }
            }
            Err(e) => tracing::warn!("receipt task failed: {e}"),
        }
    }

    ids
}
