use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use meetdash_core::history::HistoryEntry;
use meetdash_core::schedule::Schedule;
use meetdash_core::store::MeetingStore;

use super::create_spinner;
use crate::client::RemoteStore;
use crate::state::AppState;
use crate::utils::when;

/// Set, change or clear the scheduled date inside `next_meeting`. The
/// free-text notes after the date token are preserved across changes.
pub async fn run(
    state: &mut AppState,
    store: &RemoteStore,
    id: i64,
    date: Option<String>,
    time: Option<String>,
    notes: Option<String>,
    clear: bool,
) -> Result<()> {
    if clear && (date.is_some() || time.is_some()) {
        anyhow::bail!("--clear cannot be combined with --date or --time");
    }
    if !clear && date.is_none() && time.is_none() && notes.is_none() {
        anyhow::bail!("Provide --date, --time, --notes or --clear");
    }

    let spinner = create_spinner("Fetching meeting");
    let result = store.get(id).await;
    spinner.finish_and_clear();
    let previous = result?;

    let existing = Schedule::decode(previous.next_meeting.as_deref().unwrap_or_default());

    let schedule = if clear {
        Schedule::new(None, None, existing.notes.clone())
    } else {
        let date = match date {
            Some(input) => {
                let parsed = when::parse_date(&input)?;
                when::ensure_not_past(parsed, Local::now().date_naive())?;
                Some(parsed)
            }
            None => existing.date,
        };

        if date.is_none() && time.is_some() {
            anyhow::bail!("Meeting #{} has no date to attach a time to", id);
        }

        let time = match time {
            Some(input) => Some(when::parse_time(&input)?),
            None => existing.time,
        };

        let notes = notes.unwrap_or_else(|| existing.notes.clone());

        Schedule::new(date, time, notes)
    };

    let mut draft = previous.draft();
    draft.next_meeting = schedule.encode();

    let spinner = create_spinner("Updating meeting");
    let result = store.update(id, &draft).await;
    spinner.finish_and_clear();
    let current = result?;

    let message = match &current.next_meeting {
        Some(text) => format!("Scheduled: {text}"),
        None => "Cleared schedule".to_string(),
    };

    state.history.record(HistoryEntry::Update {
        id,
        previous,
        current,
    });
    state.save_history()?;

    println!("{}", message.green());

    Ok(())
}
