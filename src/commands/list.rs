use crate::{
    db::tasks::TaskStore,
    libs::{
        config::Config,
        messages::Message,
        task::{Status, TaskFilter},
        view::View,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, help = "Only show tasks of this project")]
    pub project: Option<String>,
    #[arg(short, long, help = "Only show tasks with this status (todo, in-progress, done or 0-2)")]
    pub status: Option<String>,
    #[arg(long, help = "Print tasks as JSON")]
    pub json: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    run(args, &super::data_dir()?)
}

pub fn run(args: ListArgs, dir: &Path) -> Result<()> {
    let filter = TaskFilter {
        status: args.status.as_deref().map(str::parse::<Status>).transpose()?,
        project: args.project,
    };
    let tasks = TaskStore::open(dir)?.get_tasks(&filter)?;

    if args.json {
        return View::tasks_json(&tasks);
    }
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&tasks, &Config::load_or_default(dir))
}
