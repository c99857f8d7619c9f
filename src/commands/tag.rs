//! Tag registry management command.
//!
//! Tags are store-owned strings referenced by tasks. Renaming rewrites
//! the literal string on every task; removing filters it out everywhere.

use crate::libs::messages::Message;
use crate::libs::store::{canonical_tag, TaskStore};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TagArgs {
    #[command(subcommand)]
    command: TagCommand,
}

#[derive(Debug, Subcommand)]
enum TagCommand {
    /// Add a tag to the registry
    Add {
        /// Tag name; the leading '#' is optional
        name: String,
    },
    /// List all tags
    List,
    /// Rename a tag everywhere it is used
    Rename {
        /// Current tag name
        old: String,
        /// New tag name
        new: String,
    },
    /// Remove a tag from the registry and from every task
    Remove {
        /// Tag name to remove
        tag: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show tasks carrying a specific tag
    Tasks {
        /// Tag name
        tag: String,
    },
}

pub fn cmd(args: TagArgs) -> Result<()> {
    match args.command {
        TagCommand::Add { name } => handle_add(name),
        TagCommand::List => handle_list(),
        TagCommand::Rename { old, new } => handle_rename(old, new),
        TagCommand::Remove { tag, yes } => handle_remove(tag, yes),
        TagCommand::Tasks { tag } => handle_tasks(tag),
    }
}

fn handle_add(name: String) -> Result<()> {
    let mut store = TaskStore::load()?;

    if store.has_tag(&name) {
        msg_error!(Message::TagAlreadyExists(name));
        return Ok(());
    }

    let tag = store.add_tag(&name)?;
    store.save()?;

    msg_success!(Message::TagAdded(tag));
    Ok(())
}

fn handle_list() -> Result<()> {
    let store = TaskStore::load()?;
    let tags = store.tags();

    if tags.is_empty() {
        msg_info!(Message::NoTagsFound);
        return Ok(());
    }

    msg_print!(Message::TagListHeader, true);
    View::tags(tags)?;
    Ok(())
}

fn handle_rename(old: String, new: String) -> Result<()> {
    let mut store = TaskStore::load()?;
    store.rename_tag(&old, &new)?;
    store.save()?;

    msg_success!(Message::TagRenamed(canonical_tag(&old)?, canonical_tag(&new)?));
    Ok(())
}

fn handle_remove(tag: String, yes: bool) -> Result<()> {
    let mut store = TaskStore::load()?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveTag(tag.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let touched = store.remove_tag(&tag)?;
    store.save()?;

    msg_success!(Message::TagRemoved(canonical_tag(&tag)?, touched));
    Ok(())
}

fn handle_tasks(tag: String) -> Result<()> {
    let store = TaskStore::load()?;
    let tag = canonical_tag(&tag)?;

    let tasks: Vec<_> = store
        .tasks()
        .iter()
        .filter(|t| t.tags.contains(&tag))
        .cloned()
        .collect();
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(tag), true);
    View::tasks(&tasks, store.categories())?;
    Ok(())
}
