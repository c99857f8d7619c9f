//! Console table rendering for tasks, categories, tags and reminders.

use crate::libs::category::Category;
use crate::libs::notify::TriggerDescriptor;
use crate::libs::query;
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], categories: &[Category]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "DUE", "CATEGORY", "TAGS"]);
        for task in tasks {
            table.add_row(row![
                short_id(task),
                task.title,
                task.status.as_str(),
                task.priority.as_str(),
                task.due.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_else(|| "-".to_string()),
                query::category_name(categories, task.category_id),
                task.tags.join(" ")
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders a category-grouped view, one table per group in key order.
    pub fn grouped(groups: &BTreeMap<String, Vec<Task>>, categories: &[Category]) -> Result<()> {
        for (name, tasks) in groups {
            println!("\n📁 {} ({})", name, tasks.len());
            Self::tasks(tasks, categories)?;
        }
        Ok(())
    }

    pub fn categories(categories: &[Category]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "ICON", "COLOR"]);
        for category in categories {
            table.add_row(row![
                &category.id.to_string()[..8],
                category.name,
                category.icon.as_str(),
                category.color.as_str()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tags(tags: &[String]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["TAG"]);
        for tag in tags {
            table.add_row(row![tag]);
        }
        table.printstd();

        Ok(())
    }

    pub fn triggers(triggers: &[TriggerDescriptor]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["IDENTIFIER", "FIRES AT", "REPEATS", "TITLE", "BODY"]);
        for trigger in triggers {
            table.add_row(row![
                trigger.identifier,
                trigger.fire_at.format("%Y-%m-%d %H:%M"),
                if trigger.repeats { "yes" } else { "no" },
                trigger.title,
                trigger.body
            ]);
        }
        table.printstd();

        Ok(())
    }
}

fn short_id(task: &Task) -> String {
    task.id.to_string()[..8].to_string()
}
