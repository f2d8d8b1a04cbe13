use crate::{
    commands::parse_id,
    db::tasks::TaskStore,
    libs::messages::Message,
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(required = true, help = "Task ID")]
    pub id: String,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    run(args, &super::data_dir()?)
}

pub fn run(args: DeleteArgs, dir: &Path) -> Result<()> {
    let id = parse_id(&args.id)?;

    match TaskStore::open(dir)?.delete(id)? {
        0 => msg_info!(Message::TaskNothingDeleted(id)),
        _ => msg_success!(Message::TaskDeleted(id)),
    }

    Ok(())
}
