use crate::{
    libs::{config::Config, messages::Message, view::is_valid_date_format},
    msg_bail_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long, help = "Date format for the CREATED column, e.g. %Y-%m-%d")]
    pub date_format: Option<String>,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    run(args, &super::data_dir()?)
}

/// Without flags, prints the current configuration. A malformed
/// `config.json` is replaced by defaults plus the given settings.
pub fn run(args: ConfigArgs, dir: &Path) -> Result<()> {
    let mut config = Config::load_or_default(dir);

    let Some(date_format) = args.date_format else {
        let current = serde_json::to_string_pretty(&config)?;
        msg_print!(current);
        return Ok(());
    };

    if !is_valid_date_format(&date_format) {
        msg_bail_anyhow!(Message::InvalidDateFormat(date_format));
    }
    config.date_format = date_format;
    config.save(dir)?;
    msg_success!(Message::ConfigSaved);

    Ok(())
}
