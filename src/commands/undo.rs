use anyhow::Result;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::client::RemoteStore;
use crate::state::AppState;

pub async fn run(state: &mut AppState, store: &RemoteStore) -> Result<()> {
    let spinner = create_spinner("Undoing");
    let result = state.history.undo(store).await;
    spinner.finish_and_clear();

    // Refresh whether or not the replay succeeded; a partial failure must
    // not leave stale records in view.
    let refresh = state.refresh(store).await;

    match result {
        Ok(Some(label)) => {
            state.save_history()?;
            println!("{}", format!("Undone: {label}").green());
        }
        Ok(None) => println!("{}", "Nothing to undo".dimmed()),
        Err(e) => return Err(anyhow::Error::new(e).context("Undo failed")),
    }

    refresh
}
