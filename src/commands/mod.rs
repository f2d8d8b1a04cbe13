//! Command-line interface for tsk.
//!
//! Every subcommand lives in its own module with an `Args` struct and a
//! `cmd` entry point. Commands that touch the database also expose `run`,
//! which takes the data directory explicitly.

pub mod add;
pub mod config;
pub mod delete;
pub mod list;
pub mod locate;
pub mod progress;
pub mod update;

use crate::libs::data_storage::DataStorage;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use progress::Direction;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task with an optional project name", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "List your tasks")]
    List(list::ListArgs),
    #[command(about = "Update a task by ID", arg_required_else_help = true)]
    Update(update::UpdateArgs),
    #[command(about = "Delete a task by ID", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Move a task to its next status", arg_required_else_help = true)]
    Advance(progress::ProgressArgs),
    #[command(about = "Move a task back to its previous status", arg_required_else_help = true)]
    Revert(progress::ProgressArgs),
    #[command(about = "Show or change settings")]
    Config(config::ConfigArgs),
    #[command(name = "where", about = "Show where your tasks are stored")]
    Where,
}

#[derive(Debug, Parser)]
#[command(name = "tsk", author, version, about = "A command-line task tracker", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Update(args) => update::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Advance(args) => progress::cmd(args, Direction::Forward),
            Commands::Revert(args) => progress::cmd(args, Direction::Back),
            Commands::Config(args) => config::cmd(args),
            Commands::Where => locate::cmd(),
        }
    }
}

/// Resolves the data directory for commands, creating it when missing.
pub fn data_dir() -> Result<PathBuf> {
    DataStorage::new()
        .dir()
        .map_err(|error| msg_error_anyhow!(Message::DataDirectoryUnavailable(error.to_string())))
}

/// Parses a task ID given on the command line.
pub fn parse_id(value: &str) -> Result<u32, TaskError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| TaskError::InvalidArgument(Message::InvalidTaskId(value.to_string()).to_string()))
}
