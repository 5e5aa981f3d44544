//! Bounded undo/redo log for record mutations.
//!
//! Every successful create/update/delete records an entry carrying enough
//! data to replay its exact inverse through a [`MeetingStore`]. The log is
//! two stacks: undoing moves an entry to the redo stack, and recording a
//! new action clears the redo stack entirely (branching history is not
//! supported). Undoing a delete re-creates the record, which yields a new
//! server id; that regenerated id replaces the dead one throughout both
//! stacks, so a later redo deletes the right record and older entries for
//! the same record stay replayable.
//!
//! On a failed replay the popped entry goes back on its stack unchanged,
//! so the log never silently drops history.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MeetdashError, MeetdashResult};
use crate::meeting::MeetingRecord;
use crate::store::MeetingStore;

/// Maximum entries kept on the undo stack; the oldest is discarded past this.
pub const MAX_HISTORY: usize = 50;

/// One reversible mutation, as observed after it succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HistoryEntry {
    /// A record was created; undone by deleting it.
    Create { record: MeetingRecord },
    /// A record was updated; undone by restoring the previous snapshot.
    Update {
        id: i64,
        previous: MeetingRecord,
        current: MeetingRecord,
    },
    /// A record was deleted; undone by re-creating its payload.
    Delete { record: MeetingRecord },
}

impl HistoryEntry {
    /// Short label for user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            HistoryEntry::Create { .. } => "meeting creation",
            HistoryEntry::Update { .. } => "meeting update",
            HistoryEntry::Delete { .. } => "meeting deletion",
        }
    }

    /// Replace references to a dead id after the server regenerated it.
    fn remap_id(&mut self, old: i64, new: i64) {
        match self {
            HistoryEntry::Create { record } | HistoryEntry::Delete { record } => {
                if record.id == old {
                    record.id = new;
                }
            }
            HistoryEntry::Update {
                id,
                previous,
                current,
            } => {
                if *id == old {
                    *id = new;
                }
                if previous.id == old {
                    previous.id = new;
                }
                if current.id == old {
                    current.id = new;
                }
            }
        }
    }
}

/// The undo and redo stacks, most recent entry last.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct History {
    undo: Vec<HistoryEntry>,
    redo: Vec<HistoryEntry>,
}

impl History {
    /// Record a new action. Trims the oldest entry past [`MAX_HISTORY`]
    /// and invalidates the redo chain.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.undo.push(entry);
        if self.undo.len() > MAX_HISTORY {
            self.undo.remove(0);
        }
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo the most recent action by applying its inverse through `store`.
    ///
    /// Returns the label of the undone action, or `None` when the stack is
    /// empty. On failure the entry is restored to the top of the undo
    /// stack and the error is returned.
    pub async fn undo<S: MeetingStore>(&mut self, store: &S) -> MeetdashResult<Option<&'static str>> {
        let Some(entry) = self.undo.pop() else {
            return Ok(None);
        };

        match apply_inverse(&entry, store).await {
            Ok((redo_entry, regenerated)) => {
                let label = redo_entry.label();
                self.redo.push(redo_entry);
                if let Some((old, new)) = regenerated {
                    self.remap_id(old, new);
                }
                Ok(Some(label))
            }
            Err(e) => {
                self.undo.push(entry);
                Err(e)
            }
        }
    }

    /// Redo the most recently undone action. Symmetric with [`History::undo`].
    pub async fn redo<S: MeetingStore>(&mut self, store: &S) -> MeetdashResult<Option<&'static str>> {
        let Some(entry) = self.redo.pop() else {
            return Ok(None);
        };

        match apply_forward(&entry, store).await {
            Ok((undo_entry, regenerated)) => {
                let label = undo_entry.label();
                self.undo.push(undo_entry);
                if let Some((old, new)) = regenerated {
                    self.remap_id(old, new);
                }
                Ok(Some(label))
            }
            Err(e) => {
                self.redo.push(entry);
                Err(e)
            }
        }
    }

    /// Load persisted stacks. A missing or unreadable file is an empty log.
    pub fn load(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Substitute a regenerated id for a dead one across both stacks.
    fn remap_id(&mut self, old: i64, new: i64) {
        for entry in self.undo.iter_mut().chain(self.redo.iter_mut()) {
            entry.remap_id(old, new);
        }
    }

    /// Persist both stacks as JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> MeetdashResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MeetdashError::Serialization(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Apply the inverse of `entry` and build the entry to park on the redo
/// stack, plus the `(dead, regenerated)` id pair when the replay created
/// a fresh record on the server.
async fn apply_inverse<S: MeetingStore>(
    entry: &HistoryEntry,
    store: &S,
) -> MeetdashResult<(HistoryEntry, Option<(i64, i64)>)> {
    match entry {
        HistoryEntry::Create { record } => {
            store.delete(record.id).await?;
            Ok((entry.clone(), None))
        }
        HistoryEntry::Update { id, previous, .. } => {
            store.update(*id, &previous.draft()).await?;
            Ok((entry.clone(), None))
        }
        HistoryEntry::Delete { record } => {
            let recreated = store.create(&record.draft()).await?;
            let mut carried = record.clone();
            carried.id = recreated.id;
            Ok((
                HistoryEntry::Delete { record: carried },
                Some((record.id, recreated.id)),
            ))
        }
    }
}

/// Re-apply `entry` forward and build the entry to park back on the undo
/// stack. Redoing a create yields a fresh record from the server, which
/// becomes the new undo target.
async fn apply_forward<S: MeetingStore>(
    entry: &HistoryEntry,
    store: &S,
) -> MeetdashResult<(HistoryEntry, Option<(i64, i64)>)> {
    match entry {
        HistoryEntry::Create { record } => {
            let created = store.create(&record.draft()).await?;
            let regenerated = Some((record.id, created.id));
            Ok((HistoryEntry::Create { record: created }, regenerated))
        }
        HistoryEntry::Update { id, current, .. } => {
            store.update(*id, &current.draft()).await?;
            Ok((entry.clone(), None))
        }
        HistoryEntry::Delete { record } => {
            store.delete(record.id).await?;
            Ok((entry.clone(), None))
        }
    }
}
