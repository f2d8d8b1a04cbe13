use crate::{
    libs::messages::Message,
    msg_print,
};
use anyhow::Result;

/// Prints the directory holding the database and the config file.
pub fn cmd() -> Result<()> {
    let dir = super::data_dir()?;
    msg_print!(Message::DataDirectory(dir.display().to_string()));

    Ok(())
}
