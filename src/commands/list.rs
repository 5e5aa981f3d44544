use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use meetdash_core::filter::StatusFilter;

use super::create_spinner;
use crate::client::RemoteStore;
use crate::render::render_grouped;
use crate::state::AppState;

pub async fn run(
    state: &mut AppState,
    store: &RemoteStore,
    query: Option<String>,
    status: Option<StatusFilter>,
    client: Option<String>,
) -> Result<()> {
    let spinner = create_spinner("Fetching meetings");
    let result = state.refresh(store).await;
    spinner.finish_and_clear();
    result?;

    let mut hits = state.filtered(query.as_deref(), status);
    if let Some(name) = &client {
        hits.retain(|r| r.client.eq_ignore_ascii_case(name));
    }

    if hits.is_empty() {
        println!("{}", "No meetings found".dimmed());
        return Ok(());
    }

    let today = Local::now().date_naive();
    println!("{}", render_grouped(&hits, today));

    Ok(())
}
