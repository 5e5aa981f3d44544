//! Core types for the meetdash ecosystem.
//!
//! This crate provides the pieces of the meeting dashboard client that do
//! not depend on a terminal or an HTTP transport:
//! - `meeting` — the record types exchanged with the dashboard server
//! - `filter` — pure filtering over a fetched record set
//! - `schedule` — the date-prefix encoding inside the `next_meeting` field
//! - `history` — the bounded undo/redo log with exact-inverse replay
//! - `store` — the CRUD seam the history log replays through

pub mod error;
pub mod filter;
pub mod history;
pub mod meeting;
pub mod schedule;
pub mod store;

// Re-export the record types at crate root for convenience
pub use meeting::*;
