//! The CRUD seam between the history log and the dashboard server.
//!
//! The undo/redo log replays inverse operations through this trait, so the
//! transport stays swappable: the CLI implements it over HTTP, tests over
//! an in-memory map. All operations are request/response with no retry; a
//! failure leaves the caller responsible for restoring its own state.

use crate::error::MeetdashResult;
use crate::meeting::{MeetingDraft, MeetingRecord};

/// Remote storage for meeting records.
#[allow(async_fn_in_trait)]
pub trait MeetingStore {
    /// Fetch the full record set, in the server's display order.
    async fn list(&self) -> MeetdashResult<Vec<MeetingRecord>>;

    /// Fetch a single record by id.
    async fn get(&self, id: i64) -> MeetdashResult<MeetingRecord>;

    /// Create a record; the server assigns id and client_order.
    async fn create(&self, draft: &MeetingDraft) -> MeetdashResult<MeetingRecord>;

    /// Replace a record's writable fields.
    async fn update(&self, id: i64, draft: &MeetingDraft) -> MeetdashResult<MeetingRecord>;

    /// Delete a record by id.
    async fn delete(&self, id: i64) -> MeetdashResult<()>;
}
