use anyhow::Result;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::client::RemoteStore;

/// Trigger the server's upcoming-meetings reminder email.
pub async fn run(store: &RemoteStore) -> Result<()> {
    let spinner = create_spinner("Sending reminder");
    let result = store.send_reminder().await;
    spinner.finish_and_clear();
    let response = result?;

    if response.success {
        println!(
            "{}",
            format!(
                "Email sent! {} meeting(s) included in the reminder",
                response.count
            )
            .green()
        );
    } else {
        let message = response
            .message
            .unwrap_or_else(|| "No upcoming meetings to send".to_string());
        println!("{}", message.yellow());
    }

    Ok(())
}
