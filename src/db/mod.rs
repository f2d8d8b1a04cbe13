//! Database layer for tsk.
//!
//! A single SQLite file (`tasks.db`) inside the data directory holds one
//! `tasks` table. [`db::Db`] opens the file and inspects the schema catalog;
//! [`tasks::TaskStore`] creates the table on first use and runs every task
//! query.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsk::db::tasks::TaskStore;
//! use tsk::libs::task::TaskFilter;
//! use std::path::Path;
//!
//! let mut store = TaskStore::open(Path::new("/tmp/tsk"))?;
//! let id = store.insert("Write report", "Work")?;
//! let tasks = store.get_tasks(&TaskFilter::default())?;
//! # Ok::<(), tsk::libs::error::TaskError>(())
//! ```

/// Connection handling and schema catalog lookups.
pub mod db;

/// Task CRUD operations and the filtered query builder.
pub mod tasks;
