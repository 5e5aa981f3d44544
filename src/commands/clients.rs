use anyhow::Result;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::client::RemoteStore;

/// With no argument, list distinct client names. With a name, list the
/// addresses recorded for that client.
pub async fn run(store: &RemoteStore, name: Option<String>) -> Result<()> {
    match name {
        None => {
            let spinner = create_spinner("Fetching clients");
            let result = store.clients().await;
            spinner.finish_and_clear();
            let clients = result?;

            if clients.is_empty() {
                println!("{}", "No clients yet".dimmed());
                return Ok(());
            }
            for client in clients {
                println!("{}", client.name);
            }
        }
        Some(name) => {
            let spinner = create_spinner("Fetching addresses");
            let result = store.client_addresses(&name).await;
            spinner.finish_and_clear();
            let addresses = result?;

            if addresses.is_empty() {
                println!("{}", format!("No addresses recorded for {name}").dimmed());
                return Ok(());
            }
            println!("{}", name.bold());
            for address in addresses {
                println!("   {address}");
            }
        }
    }

    Ok(())
}
