//! # Taskdeck - GTD-style personal task management
//!
//! A command-line utility for capturing tasks, planning the day, and
//! keeping reminders consistent with task changes.
//!
//! ## Features
//!
//! - **Task Lifecycle**: Inbox → Today → Done workflow with restore
//! - **Task Management**: Create, update, reorder, complete and delete
//! - **Views**: Sort and filter by manual order, priority, due date,
//!   category, creation time or title; group by category
//! - **Reminders**: Due-date and custom-time triggers with quiet hours,
//!   daily summary and weekly review
//! - **Categories & Tags**: Shared categories and a store-owned tag
//!   registry
//! - **Data Exchange**: Portable JSON document plus CSV/JSON/Excel
//!   table exports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
