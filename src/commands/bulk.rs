use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::client::RemoteStore;

/// Delete several meetings in one request. Bulk deletion is not undoable,
/// so the confirmation is explicit about the count.
pub async fn run(store: &RemoteStore, ids: Vec<i64>, yes: bool) -> Result<()> {
    if ids.is_empty() {
        anyhow::bail!("No meetings selected");
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete {} meeting(s)? This cannot be undone",
                ids.len()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    let spinner = create_spinner("Deleting meetings");
    let result = store.bulk_delete(ids).await;
    spinner.finish_and_clear();
    let response = result?;

    println!("{}", response.message.green());

    Ok(())
}
