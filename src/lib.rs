//! # tsk
//!
//! A personal task tracker for the command line. Tasks have a name, an
//! optional project, a status (`todo`, `in progress`, `done`) and a creation
//! time, and are kept in a SQLite file in the user's data directory.
//!
//! ## Features
//!
//! - **Task store**: add, list, update and delete tasks ([`db::tasks::TaskStore`])
//! - **Partial updates**: change only the fields you pass ([`libs::task::TaskUpdate`])
//! - **Filtering**: list by status and/or project ([`libs::task::TaskFilter`])
//! - **Status cycling**: move a task forward or back through its statuses
//! - **Output**: terminal tables or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
