//! Data export command for external analysis and backup.
//!
//! Exports either a flat task table (CSV, JSON or Excel) or the full
//! portable store document (always JSON), which `import` can read back.

use crate::libs::export::{ExportData, ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Type of data to export
    #[arg(value_enum, default_value = "tasks")]
    data: ExportData,

    /// Output format for the task table export
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let store = TaskStore::load()?;

    match args.data {
        ExportData::Tasks => {
            if store.tasks().is_empty() {
                msg_info!(Message::NothingToExport);
                return Ok(());
            }
            let exporter = Exporter::new(args.format, args.output);
            exporter.export_tasks(store.tasks(), store.categories())?;
        }
        ExportData::Document => {
            // The document is JSON by definition, whatever --format says.
            let exporter = Exporter::new(ExportFormat::Json, args.output);
            exporter.export_document(&store.export())?;
        }
    }
    Ok(())
}
