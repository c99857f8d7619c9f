pub mod add;
pub mod category;
pub mod complete;
pub mod delete;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod notify;
pub mod reorder;
pub mod restore;
pub mod tag;
pub mod today;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Capture a new task into the Inbox")]
    Add(add::AddArgs),
    #[command(about = "List tasks with sorting, filtering and grouping")]
    List(list::ListArgs),
    #[command(about = "Move an Inbox task to Today")]
    Today(today::TodayArgs),
    #[command(about = "Complete a task")]
    Complete(complete::CompleteArgs),
    #[command(about = "Restore a completed task to its previous bucket")]
    Restore(restore::RestoreArgs),
    #[command(about = "Delete a task permanently")]
    Delete(delete::DeleteArgs),
    #[command(about = "Reorder tasks within a bucket")]
    Reorder(reorder::ReorderArgs),
    #[command(about = "Manage categories")]
    Category(category::CategoryArgs),
    #[command(about = "Manage tags")]
    Tag(tag::TagArgs),
    #[command(about = "Inspect pending reminders")]
    Notify(notify::NotifyArgs),
    #[command(about = "Export tasks or the full store document")]
    Export(export::ExportArgs),
    #[command(about = "Import a previously exported document")]
    Import(import::ImportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        if crate::libs::messages::macros::is_debug_mode() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args).await,
            Commands::List(args) => list::cmd(args),
            Commands::Today(args) => today::cmd(args),
            Commands::Complete(args) => complete::cmd(args),
            Commands::Restore(args) => restore::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Reorder(args) => reorder::cmd(args),
            Commands::Category(args) => category::cmd(args),
            Commands::Tag(args) => tag::cmd(args),
            Commands::Notify(args) => notify::cmd(args),
            Commands::Export(args) => export::cmd(args).await,
            Commands::Import(args) => import::cmd(args),
        }
    }
}
