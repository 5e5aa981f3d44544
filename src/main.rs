mod client;
mod commands;
mod config;
mod render;
mod state;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use meetdash_core::filter::StatusFilter;

use crate::client::RemoteStore;
use crate::commands::add::AddArgs;
use crate::commands::edit::EditArgs;
use crate::commands::export::ExportFormat;
use crate::config::GlobalConfig;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "meetdash")]
#[command(about = "Track client meetings against your meeting dashboard server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    /// A next meeting is set
    HasNext,
    /// No next meeting set
    NoNext,
    /// Actions have been taken
    HasActions,
    /// No actions taken yet
    NoActions,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::HasNext => StatusFilter::HasNextMeeting,
            StatusArg::NoNext => StatusFilter::NoNextMeeting,
            StatusArg::HasActions => StatusFilter::HasActionsTaken,
            StatusArg::NoActions => StatusFilter::NoActionsTaken,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List meetings grouped by client
    List {
        /// Free-text filter matched against every field
        query: Option<String>,

        /// Status predicate
        #[arg(long)]
        status: Option<StatusArg>,

        /// Only show this client
        #[arg(short, long)]
        client: Option<String>,
    },
    /// Show one meeting in full
    Show { id: i64 },
    /// Record a new meeting
    Add(AddArgs),
    /// Change fields of a meeting
    Edit(EditArgs),
    /// Delete a meeting
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Move an update to another position within its client
    Move { dragged_id: i64, target_id: i64 },
    /// Delete several meetings at once (not undoable)
    BulkDelete {
        #[arg(required = true)]
        ids: Vec<i64>,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Revert the most recent create, edit or delete
    Undo,
    /// Re-apply the most recently undone action
    Redo,
    /// Set or clear the scheduled date in the next-meeting field
    Schedule {
        id: i64,

        /// Date (ISO or natural language, e.g. "next friday")
        #[arg(long)]
        date: Option<String>,

        /// Time (e.g. "14:30" or "2:30 pm")
        #[arg(long)]
        time: Option<String>,

        /// Replace the notes after the date
        #[arg(long)]
        notes: Option<String>,

        /// Remove the date and time, keeping the notes
        #[arg(long)]
        clear: bool,
    },
    /// Export meetings to an Excel or PDF file
    Export {
        format: ExportFormat,

        /// Output path (default: dated filename in the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Free-text filter matched against every field
        query: Option<String>,

        /// Status predicate
        #[arg(long)]
        status: Option<StatusArg>,
    },
    /// List clients, or the addresses recorded for one client
    Clients { name: Option<String> },
    /// Dashboard counters
    Stats,
    /// Send the reminder email for upcoming meetings
    Remind,
    /// Month agenda of recorded and scheduled meetings
    Calendar {
        /// Month to show (YYYY-MM, default: the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GlobalConfig::load()?;
    let store = RemoteStore::new(&config.server_url);
    let mut state = AppState::load(config.history_path()?);

    match cli.command {
        Commands::List {
            query,
            status,
            client,
        } => {
            commands::list::run(&mut state, &store, query, status.map(Into::into), client).await
        }
        Commands::Show { id } => commands::show::run(&store, id).await,
        Commands::Add(args) => commands::add::run(&mut state, &store, args).await,
        Commands::Edit(args) => commands::edit::run(&mut state, &store, args).await,
        Commands::Delete { id, yes } => commands::delete::run(&mut state, &store, id, yes).await,
        Commands::Move {
            dragged_id,
            target_id,
        } => commands::reorder::run(&store, dragged_id, target_id).await,
        Commands::BulkDelete { ids, yes } => commands::bulk::run(&store, ids, yes).await,
        Commands::Undo => commands::undo::run(&mut state, &store).await,
        Commands::Redo => commands::redo::run(&mut state, &store).await,
        Commands::Schedule {
            id,
            date,
            time,
            notes,
            clear,
        } => commands::schedule::run(&mut state, &store, id, date, time, notes, clear).await,
        Commands::Export {
            format,
            out,
            query,
            status,
        } => {
            commands::export::run(
                &mut state,
                &store,
                format,
                out,
                query,
                status.map(Into::into),
            )
            .await
        }
        Commands::Clients { name } => commands::clients::run(&store, name).await,
        Commands::Stats => commands::stats::run(&store).await,
        Commands::Remind => commands::remind::run(&store).await,
        Commands::Calendar { month } => commands::calendar::run(&mut state, &store, month).await,
    }
}
