use crate::{
    commands::parse_id,
    db::tasks::TaskStore,
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ProgressArgs {
    #[arg(required = true, help = "Task ID")]
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

pub fn cmd(args: ProgressArgs, direction: Direction) -> Result<()> {
    run(args, direction, &super::data_dir()?)
}

pub fn run(args: ProgressArgs, direction: Direction, dir: &Path) -> Result<()> {
    let id = parse_id(&args.id)?;
    let mut store = TaskStore::open(dir)?;
    let task = match direction {
        Direction::Forward => store.advance(id)?,
        Direction::Back => store.revert(id)?,
    };

    msg_success!(Message::TaskStatusChanged(task.id, task.name, task.status));

    Ok(())
}
