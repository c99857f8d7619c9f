//! Imports a previously exported document, replacing the current state.
//!
//! A malformed document fails the whole import; records with unknown
//! enum values are skipped and counted.

use crate::libs::document;
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path of the document to import
    #[arg(required = true)]
    file: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let contents = fs::read_to_string(&args.file)?;
    let document = document::from_json(&contents)?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmImportReplace.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut store = TaskStore::load()?;
    let skipped = store.import(&document)?;
    store.save()?;

    if skipped > 0 {
        msg_warning!(Message::ImportSkippedRecords(skipped));
    }
    msg_success!(Message::ImportCompleted(
        store.tasks().len(),
        store.categories().len(),
        skipped
    ));
    Ok(())
}
