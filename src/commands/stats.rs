use anyhow::Result;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::client::RemoteStore;

pub async fn run(store: &RemoteStore) -> Result<()> {
    let spinner = create_spinner("Fetching stats");
    let result = store.dashboard_stats().await;
    spinner.finish_and_clear();
    let stats = result?;

    let rows = [
        ("Total clients", stats.total_clients),
        ("Active clients", stats.active_clients),
        ("Upcoming meetings", stats.upcoming_meetings),
        ("Meetings today", stats.meetings_today),
        ("Action required", stats.action_required),
        ("Total meetings", stats.total_meetings),
    ];

    for (label, value) in rows {
        println!("{:>18}  {}", label.dimmed(), value.to_string().bold());
    }

    Ok(())
}
