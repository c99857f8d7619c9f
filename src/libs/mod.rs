//! Core library modules for the taskdeck application.
//!
//! Serves as the main entry point for all taskdeck library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Task Management**: Entity model, lifecycle store, recurrence
//! - **Views**: Stateless query engine and console rendering
//! - **Reminders**: Trigger derivation and scheduling boundary
//! - **Interchange**: Portable document codec and file export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::libs::store::TaskStore;
//! use taskdeck::libs::task::Task;
//!
//! let mut store = TaskStore::with_defaults();
//! store.add(Task::new("Capture this thought"))?;
//! # Ok::<(), taskdeck::libs::store::StoreError>(())
//! ```

pub mod category;
pub mod config;
pub mod data_storage;
pub mod document;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod notify;
pub mod query;
pub mod recurrence;
pub mod store;
pub mod task;
pub mod view;
