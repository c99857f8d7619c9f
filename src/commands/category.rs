//! Category management command.
//!
//! Deleting a category detaches it from every referencing task; the
//! tasks themselves are never touched beyond clearing the reference.

use crate::libs::category::{Category, CategoryColor, CategoryIcon};
use crate::libs::messages::Message;
use crate::libs::store::TaskStore;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: CategoryCommand,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Category icon
        #[arg(short, long, value_enum, default_value = "folder")]
        icon: CategoryIcon,
        /// Category color
        #[arg(short, long, value_enum, default_value = "blue")]
        color: CategoryColor,
    },
    /// List all categories
    List,
    /// Edit a category
    Edit {
        /// Category name or id prefix
        category: String,
    },
    /// Delete a category, detaching it from its tasks
    Delete {
        /// Category name or id prefix
        category: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: CategoryArgs) -> Result<()> {
    match args.command {
        CategoryCommand::Create { name, icon, color } => handle_create(name, icon, color),
        CategoryCommand::List => handle_list(),
        CategoryCommand::Edit { category } => handle_edit(category),
        CategoryCommand::Delete { category, yes } => handle_delete(category, yes),
    }
}

fn handle_create(name: String, icon: CategoryIcon, color: CategoryColor) -> Result<()> {
    let mut store = TaskStore::load()?;
    store.add_category(Category::new(&name, icon, color))?;
    store.save()?;

    msg_success!(Message::CategoryCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let store = TaskStore::load()?;
    let categories = store.categories();

    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    msg_print!(Message::CategoryListHeader, true);
    View::categories(categories)?;
    Ok(())
}

fn handle_edit(needle: String) -> Result<()> {
    let mut store = TaskStore::load()?;
    let category = match store.find_category(&needle) {
        Some(category) => category.clone(),
        None => {
            msg_error!(Message::CategoryNotFound(needle));
            return Ok(());
        }
    };

    let theme = ColorfulTheme::default();
    let name: String = Input::with_theme(&theme)
        .with_prompt("Category name")
        .default(category.name.clone())
        .interact_text()?;
    let icon: String = Input::with_theme(&theme)
        .with_prompt("Icon")
        .default(category.icon.as_str().to_string())
        .validate_with(|input: &String| {
            CategoryIcon::parse(input).map(|_| ()).ok_or("unknown icon")
        })
        .interact_text()?;
    let color: String = Input::with_theme(&theme)
        .with_prompt("Color")
        .default(category.color.as_str().to_string())
        .validate_with(|input: &String| {
            CategoryColor::parse(input).map(|_| ()).ok_or("unknown color")
        })
        .interact_text()?;

    // The prompts validate the strings, so parse can only fall back to
    // the current values.
    let parsed_icon = CategoryIcon::parse(&icon).unwrap_or(category.icon);
    let parsed_color = CategoryColor::parse(&color).unwrap_or(category.color);
    let mut updated = category;
    updated.name = name.clone();
    updated.icon = parsed_icon;
    updated.color = parsed_color;

    store.update_category(updated)?;
    store.save()?;

    msg_success!(Message::CategoryUpdated(name));
    Ok(())
}

fn handle_delete(needle: String, yes: bool) -> Result<()> {
    let mut store = TaskStore::load()?;
    let category = match store.find_category(&needle) {
        Some(category) => category.clone(),
        None => {
            msg_error!(Message::CategoryNotFound(needle));
            return Ok(());
        }
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteCategory(category.name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let detached = store.delete_category(category.id)?;
    store.save()?;

    msg_success!(Message::CategoryDeleted(category.name, detached));
    Ok(())
}
