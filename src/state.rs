//! Per-invocation application state.
//!
//! The record cache is disposable: it is rebuilt by a full re-fetch after
//! every mutation rather than patched in place. Only the undo/redo history
//! survives between invocations, as JSON on disk.

use std::path::PathBuf;

use anyhow::{Context, Result};

use meetdash_core::filter::{self, StatusFilter};
use meetdash_core::history::History;
use meetdash_core::store::MeetingStore;
use meetdash_core::MeetingRecord;

use crate::client::RemoteStore;

pub struct AppState {
    pub records: Vec<MeetingRecord>,
    pub history: History,
    history_path: PathBuf,
}

impl AppState {
    /// Load the persisted history; the record cache starts empty.
    pub fn load(history_path: PathBuf) -> Self {
        AppState {
            records: Vec::new(),
            history: History::load(&history_path),
            history_path,
        }
    }

    /// Replace the cache with a fresh full fetch.
    pub async fn refresh(&mut self, store: &RemoteStore) -> Result<()> {
        self.records = store.list().await.context("Failed to fetch meetings")?;
        Ok(())
    }

    /// The cached records narrowed by query and status predicate.
    pub fn filtered(&self, query: Option<&str>, status: Option<StatusFilter>) -> Vec<&MeetingRecord> {
        filter::filter(&self.records, query, status)
    }

    /// Write the history stacks back to disk.
    pub fn save_history(&self) -> Result<()> {
        self.history
            .save(&self.history_path)
            .context("Failed to save undo history")
    }
}
