use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {}

/// Runs the interactive configuration wizard and persists the result.
pub fn cmd(_init_args: InitArgs) -> Result<()> {
    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);

    Ok(())
}
