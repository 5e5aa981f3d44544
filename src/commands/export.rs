use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::ValueEnum;
use owo_colors::OwoColorize;

use meetdash_core::filter::StatusFilter;

use super::create_spinner;
use crate::client::RemoteStore;
use crate::state::AppState;

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

pub async fn run(
    state: &mut AppState,
    store: &RemoteStore,
    format: ExportFormat,
    out: Option<PathBuf>,
    query: Option<String>,
    status: Option<StatusFilter>,
) -> Result<()> {
    let spinner = create_spinner("Fetching meetings");
    let result = state.refresh(store).await;
    spinner.finish_and_clear();
    result?;

    let hits = state.filtered(query.as_deref(), status);
    if hits.is_empty() {
        anyhow::bail!("No meetings to export");
    }

    let ids: Vec<i64> = hits.iter().map(|r| r.id).collect();
    let count = ids.len();

    let spinner = create_spinner("Exporting");
    let result = match format {
        ExportFormat::Excel => store.export_excel(ids).await,
        ExportFormat::Pdf => store.export_pdf(ids).await,
    };
    spinner.finish_and_clear();
    let bytes = result?;

    let path = out.unwrap_or_else(|| default_filename(format, Local::now().date_naive()));
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{}",
        format!("Exported {} meeting(s) to {}", count, path.display()).green()
    );

    Ok(())
}

fn default_filename(format: ExportFormat, today: chrono::NaiveDate) -> PathBuf {
    match format {
        ExportFormat::Excel => PathBuf::from(format!("meetings_export_{today}.xlsx")),
        ExportFormat::Pdf => PathBuf::from(format!("meetings_report_{today}.pdf")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // --- default_filename ---

    #[test]
    fn filenames_carry_the_date() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 6).unwrap();
        assert_eq!(
            default_filename(ExportFormat::Excel, today),
            PathBuf::from("meetings_export_2024-12-06.xlsx")
        );
        assert_eq!(
            default_filename(ExportFormat::Pdf, today),
            PathBuf::from("meetings_report_2024-12-06.pdf")
        );
    }
}
