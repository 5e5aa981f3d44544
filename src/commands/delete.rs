use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use meetdash_core::history::HistoryEntry;
use meetdash_core::store::MeetingStore;

use super::create_spinner;
use crate::client::RemoteStore;
use crate::state::AppState;

pub async fn run(state: &mut AppState, store: &RemoteStore, id: i64, yes: bool) -> Result<()> {
    // Snapshot first: undo re-creates the record from this payload.
    let spinner = create_spinner("Fetching meeting");
    let result = store.get(id).await;
    spinner.finish_and_clear();
    let record = result?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete #{} ({})?", record.id, record.client))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let spinner = create_spinner("Deleting meeting");
    let result = store.delete(id).await;
    spinner.finish_and_clear();
    result?;

    state.history.record(HistoryEntry::Delete {
        record: record.clone(),
    });
    state.save_history()?;

    println!(
        "{}",
        format!("Deleted #{} ({})", record.id, record.client).green()
    );

    Ok(())
}
