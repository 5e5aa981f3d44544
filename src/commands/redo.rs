use anyhow::Result;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::client::RemoteStore;
use crate::state::AppState;

pub async fn run(state: &mut AppState, store: &RemoteStore) -> Result<()> {
    let spinner = create_spinner("Redoing");
    let result = state.history.redo(store).await;
    spinner.finish_and_clear();

    let refresh = state.refresh(store).await;

    match result {
        Ok(Some(label)) => {
            state.save_history()?;
            println!("{}", format!("Redone: {label}").green());
        }
        Ok(None) => println!("{}", "Nothing to redo".dimmed()),
        Err(e) => return Err(anyhow::Error::new(e).context("Redo failed")),
    }

    refresh
}
