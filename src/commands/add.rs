use anyhow::Result;
use chrono::Local;
use clap::Args;
use owo_colors::OwoColorize;

use meetdash_core::MeetingDraft;
use meetdash_core::history::HistoryEntry;
use meetdash_core::schedule::Schedule;
use meetdash_core::store::MeetingStore;

use super::{create_spinner, resolve_next_meeting};
use crate::client::RemoteStore;
use crate::state::AppState;

#[derive(Args)]
pub struct AddArgs {
    /// Client name
    pub client: String,

    /// Who was present or contacted
    #[arg(long)]
    pub people: Option<String>,

    /// Agreed follow-up actions
    #[arg(long)]
    pub actions: Option<String>,

    /// Raw next-meeting text (overrides --next-date/--next-time)
    #[arg(long)]
    pub next_meeting: Option<String>,

    /// Next meeting date (ISO or natural language, e.g. "next friday")
    #[arg(long)]
    pub next_date: Option<String>,

    /// Next meeting time (e.g. "14:30" or "2:30 pm")
    #[arg(long)]
    pub next_time: Option<String>,

    /// Notes appended after the scheduled date
    #[arg(long)]
    pub notes: Option<String>,

    /// Meeting address
    #[arg(long)]
    pub address: Option<String>,

    /// Actions already taken
    #[arg(long)]
    pub actions_taken: Option<String>,
}

pub async fn run(state: &mut AppState, store: &RemoteStore, args: AddArgs) -> Result<()> {
    let next_meeting = resolve_next_meeting(
        args.next_meeting,
        args.next_date.as_deref(),
        args.next_time.as_deref(),
        args.notes.as_deref(),
        Schedule::default(),
    )?;

    let draft = MeetingDraft {
        client: args.client,
        people_connected: args.people,
        actions: args.actions,
        next_meeting,
        address: args.address,
        actions_taken: args.actions_taken,
        // The capture date is always today; the server keeps it verbatim.
        meeting_date: Some(Local::now().date_naive()),
    };

    let spinner = create_spinner("Creating meeting");
    let result = store.create(&draft).await;
    spinner.finish_and_clear();
    let record = result?;

    state.history.record(HistoryEntry::Create {
        record: record.clone(),
    });
    state.save_history()?;

    println!(
        "{}",
        format!("Created #{} for {}", record.id, record.client).green()
    );

    Ok(())
}
