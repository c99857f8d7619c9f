//! Application configuration initialization command.
//!
//! Interactive wizard that configures reminder lead time, quiet hours and
//! the daily summary / weekly review notifications.

use crate::libs::config::Config;
use anyhow::Result;
use clap::Args;
use std::fs;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let path = crate::libs::data_storage::DataStorage::new()
            .get_path(crate::libs::config::CONFIG_FILE_NAME)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        return Ok(());
    }

    // Runs the interactive wizard and persists the result.
    Config::init()?;
    Ok(())
}
