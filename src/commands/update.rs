use crate::{
    commands::parse_id,
    db::tasks::TaskStore,
    libs::{
        messages::Message,
        task::{Status, TaskUpdate},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(required = true, help = "Task ID")]
    pub id: String,
    #[arg(short, long, help = "New task name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New project, pass an empty string to clear it")]
    pub project: Option<String>,
    #[arg(short, long, help = "New status (todo, in-progress, done or 0-2)")]
    pub status: Option<String>,
}

pub fn cmd(args: UpdateArgs) -> Result<()> {
    run(args, &super::data_dir()?)
}

/// Only the flags that were given change the task. Numeric status codes
/// outside 0-2 are treated as `todo`.
pub fn run(args: UpdateArgs, dir: &Path) -> Result<()> {
    let update = TaskUpdate {
        id: parse_id(&args.id)?,
        name: args.name,
        project: args.project,
        status: args.status.as_deref().map(str::parse::<Status>).transpose()?,
    };
    let mut store = TaskStore::open(dir)?;

    if update.is_empty() {
        store.get_task(update.id)?;
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let task = store.update(&update)?;
    msg_success!(Message::TaskUpdated(task.id, task.name));

    Ok(())
}
