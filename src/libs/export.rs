//! Data export functionality for external analysis and backup.
//!
//! Writes task snapshots or the full portable document to CSV, JSON or
//! Excel files. The portable document (see [`crate::libs::document`]) is
//! the lossless backup format; the task table exports are flat views for
//! spreadsheets and quick analysis.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::libs::export::{Exporter, ExportFormat};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! # let store = taskdeck::libs::store::TaskStore::with_defaults();
//! exporter.export_tasks(store.tasks(), store.categories())?;
//! # anyhow::Ok(())
//! ```

use crate::libs::category::Category;
use crate::libs::document::TaskDocument;
use crate::libs::messages::Message;
use crate::libs::query;
use crate::libs::task::Task;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet applications.
    Csv,
    /// Structured JSON for programmatic processing and backups.
    Json,
    /// Excel workbook with formatted headers and auto-sized columns.
    Excel,
}

/// What to export: the flat task table or the full portable document.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Flat task rows with resolved category names.
    Tasks,
    /// The complete version-tagged store document (always JSON).
    Document,
}

/// Flat task row used by the CSV/JSON/Excel table exports.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTaskRow {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub due: String,
    pub category: String,
    pub tags: String,
}

impl ExportTaskRow {
    fn from_task(task: &Task, categories: &[Category]) -> Self {
        Self {
            id: task.id.to_string(),
            title: task.title.clone(),
            status: task.status.as_str().to_string(),
            priority: task.priority.as_str().to_string(),
            due: task
                .due
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            category: query::category_name(categories, task.category_id),
            tags: task.tags.join(" "),
        }
    }
}

/// Export handler holding the chosen format and output destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path a timestamped file
    /// name is generated next to the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("taskdeck_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Exports the flat task table in the configured format.
    pub fn export_tasks(&self, tasks: &[Task], categories: &[Category]) -> Result<()> {
        let rows: Vec<ExportTaskRow> = tasks.iter().map(|t| ExportTaskRow::from_task(t, categories)).collect();

        match self.format {
            ExportFormat::Csv => self.export_tasks_csv(&rows)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_tasks_excel(&rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Writes the full portable document as pretty JSON regardless of the
    /// configured table format.
    pub fn export_document(&self, document: &TaskDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_tasks_csv(&self, rows: &[ExportTaskRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Title", "Status", "Priority", "Due", "Category", "Tags"])?;

        for row in rows {
            wtr.write_record([
                row.id.as_str(),
                row.title.as_str(),
                row.status.as_str(),
                row.priority.as_str(),
                row.due.as_str(),
                row.category.as_str(),
                row.tags.as_str(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_tasks_excel(&self, rows: &[ExportTaskRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        let headers = ["ID", "Title", "Status", "Priority", "Due", "Category", "Tags"];
        for (column, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, column as u16, *header, &header_format)?;
        }

        for (index, row) in rows.iter().enumerate() {
            let excel_row = (index + 1) as u32;
            worksheet.write_string(excel_row, 0, &row.id)?;
            worksheet.write_string(excel_row, 1, &row.title)?;
            worksheet.write_string(excel_row, 2, &row.status)?;
            worksheet.write_string(excel_row, 3, &row.priority)?;
            worksheet.write_string(excel_row, 4, &row.due)?;
            worksheet.write_string(excel_row, 5, &row.category)?;
            worksheet.write_string(excel_row, 6, &row.tags)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
