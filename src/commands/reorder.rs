use anyhow::Result;
use owo_colors::OwoColorize;

use meetdash_core::store::MeetingStore;

use super::create_spinner;
use crate::client::RemoteStore;

/// Move one update to another position within the same client.
/// Cross-client moves are rejected here; the server enforces this too.
/// Reordering is not recorded in the undo history.
pub async fn run(store: &RemoteStore, dragged_id: i64, target_id: i64) -> Result<()> {
    let spinner = create_spinner("Fetching meetings");
    let result = store.list().await;
    spinner.finish_and_clear();
    let records = result?;

    let dragged = records
        .iter()
        .find(|r| r.id == dragged_id)
        .ok_or_else(|| anyhow::anyhow!("Meeting #{} not found", dragged_id))?;
    let target = records
        .iter()
        .find(|r| r.id == target_id)
        .ok_or_else(|| anyhow::anyhow!("Meeting #{} not found", target_id))?;

    if dragged.client != target.client {
        anyhow::bail!(
            "Cannot move across clients: #{} belongs to {}, #{} to {}",
            dragged_id,
            dragged.client,
            target_id,
            target.client
        );
    }

    let client = dragged.client.clone();

    let spinner = create_spinner("Reordering");
    let result = store.reorder(dragged_id, target_id).await;
    spinner.finish_and_clear();
    result?;

    println!("{}", format!("Reordered {}", client).green());

    Ok(())
}
