use crate::{
    db::tasks::TaskStore,
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true, help = "Task name")]
    pub name: String,
    #[arg(short, long, default_value = "", help = "Project the task belongs to")]
    pub project: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    run(args, &super::data_dir()?)
}

pub fn run(args: AddArgs, dir: &Path) -> Result<()> {
    let mut store = TaskStore::open(dir)?;
    let id = store.insert(&args.name, &args.project)?;

    msg_success!(Message::TaskCreated(id, args.name));

    Ok(())
}
