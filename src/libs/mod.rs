//! Library modules behind the tsk commands.
//!
//! - **task**: the task entity, status cycle and partial updates
//! - **error**: the error type returned by the store
//! - **data_storage** / **config**: where files live and what the user configured
//! - **messages** / **view**: console output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsk::db::tasks::TaskStore;
//! use tsk::libs::data_storage::DataStorage;
//! use tsk::libs::task::{Status, TaskUpdate};
//!
//! let dir = DataStorage::new().dir()?;
//! let mut store = TaskStore::open(&dir)?;
//! let id = store.insert("Implement feature", "Backend")?;
//! store.update(&TaskUpdate::new(id).status(Status::InProgress))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod task;
pub mod view;
