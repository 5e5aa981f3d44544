use anyhow::Result;
use chrono::Local;

use meetdash_core::store::MeetingStore;

use super::create_spinner;
use crate::client::RemoteStore;
use crate::render::render_details;

pub async fn run(store: &RemoteStore, id: i64) -> Result<()> {
    let spinner = create_spinner("Fetching meeting");
    let result = store.get(id).await;
    spinner.finish_and_clear();

    let record = result?;
    println!("{}", render_details(&record, Local::now().date_naive()));

    Ok(())
}
