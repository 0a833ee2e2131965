#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{AliasAction, AppCommands, Cli};
use anyhow::{Context, Result};
use clap::Parser;
use shopdesk::domain::config::ShopdeskConfig;
use shopdesk::kernel::config::load_config;
use shopdesk_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: ShopdeskConfig =
        load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
    let _log = Logger::from_config(env!("CARGO_BIN_NAME"), &config.logging)?;

    match cli.command {
        AppCommands::CanChange { multistore, context, id } => {
            handlers::can_change(config, multistore, context, id)?;
        },
        AppCommands::Aliases { action } => match action {
            AliasAction::Search { query, limit } => {
                handlers::search_aliases(config, &query, limit)?;
            },
        },
    }

    Ok(())
}
