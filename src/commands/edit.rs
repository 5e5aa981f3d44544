use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use meetdash_core::history::HistoryEntry;
use meetdash_core::schedule::Schedule;
use meetdash_core::store::MeetingStore;

use super::{create_spinner, resolve_next_meeting};
use crate::client::RemoteStore;
use crate::state::AppState;

#[derive(Args)]
pub struct EditArgs {
    /// Meeting id
    pub id: i64,

    /// Rename the client
    #[arg(long)]
    pub client: Option<String>,

    /// Who was present or contacted (empty string clears)
    #[arg(long)]
    pub people: Option<String>,

    /// Agreed follow-up actions (empty string clears)
    #[arg(long)]
    pub actions: Option<String>,

    /// Raw next-meeting text (overrides --next-date/--next-time)
    #[arg(long)]
    pub next_meeting: Option<String>,

    /// Next meeting date (ISO or natural language)
    #[arg(long)]
    pub next_date: Option<String>,

    /// Next meeting time
    #[arg(long)]
    pub next_time: Option<String>,

    /// Notes appended after the scheduled date
    #[arg(long)]
    pub notes: Option<String>,

    /// Meeting address (empty string clears)
    #[arg(long)]
    pub address: Option<String>,

    /// Actions already taken (empty string clears)
    #[arg(long)]
    pub actions_taken: Option<String>,
}

pub async fn run(state: &mut AppState, store: &RemoteStore, args: EditArgs) -> Result<()> {
    // The previous snapshot anchors the undo entry, so it must be fetched
    // before the mutation.
    let spinner = create_spinner("Fetching meeting");
    let result = store.get(args.id).await;
    spinner.finish_and_clear();
    let previous = result?;

    let mut draft = previous.draft();

    if let Some(client) = args.client {
        if client.trim().is_empty() {
            anyhow::bail!("Client name cannot be empty");
        }
        draft.client = client;
    }
    apply(&mut draft.people_connected, args.people);
    apply(&mut draft.actions, args.actions);
    apply(&mut draft.address, args.address);
    apply(&mut draft.actions_taken, args.actions_taken);

    let touches_next = args.next_meeting.is_some()
        || args.next_date.is_some()
        || args.next_time.is_some()
        || args.notes.is_some();
    if touches_next {
        // Merge over the current value so a partial change (say, new notes)
        // keeps the date prefix already in the field.
        let existing = Schedule::decode(draft.next_meeting.as_deref().unwrap_or_default());
        draft.next_meeting = resolve_next_meeting(
            args.next_meeting,
            args.next_date.as_deref(),
            args.next_time.as_deref(),
            args.notes.as_deref(),
            existing,
        )?;
    }

    if draft == previous.draft() {
        println!("{}", "Nothing to change".dimmed());
        return Ok(());
    }

    let spinner = create_spinner("Updating meeting");
    let result = store.update(args.id, &draft).await;
    spinner.finish_and_clear();
    let current = result?;

    state.history.record(HistoryEntry::Update {
        id: args.id,
        previous,
        current: current.clone(),
    });
    state.save_history()?;

    println!(
        "{}",
        format!("Updated #{} ({})", current.id, current.client).green()
    );

    Ok(())
}

/// A provided value replaces the field; an empty string clears it; absence
/// leaves it alone.
fn apply(field: &mut Option<String>, value: Option<String>) {
    if let Some(v) = value {
        *field = if v.trim().is_empty() { None } else { Some(v) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- apply ---

    #[test]
    fn apply_replaces_clears_and_skips() {
        let mut field = Some("old".to_string());
        apply(&mut field, Some("new".to_string()));
        assert_eq!(field.as_deref(), Some("new"));

        apply(&mut field, Some("  ".to_string()));
        assert_eq!(field, None);

        field = Some("kept".to_string());
        apply(&mut field, None);
        assert_eq!(field.as_deref(), Some("kept"));
    }
}
