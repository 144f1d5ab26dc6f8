mod args;
mod handlers;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use lingo::domain::config::{LingoConfig, LoggingConfig};
use lingo::kernel::config::load_config;
use lingo_logger::{Logger, parse_level};
use std::io::Write;
use std::path::Path;
use tracing::debug;

const LOGGER_NAME: &str = "lingo";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config: LingoConfig = load_config(cli.config.as_deref())?;
    if let Some(culture) = cli.culture {
        config.culture = Some(culture);
    }

    let _logger = init_logging(&config.logging)?;

    let base_dir = cli.config.as_deref().and_then(Path::parent);
    let registry = lingo::open(&config, base_dir).context("Failed to open resource registry")?;
    debug!(command = ?cli.command, "Running command");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Names => handlers::names(&registry, &mut out)?,
        Command::Get { dictionary, key } => handlers::get(&registry, dictionary, key, &mut out)?,
        Command::Show { dictionary } => handlers::show(&registry, dictionary, &mut out)?,
        Command::Paths { dictionary } => handlers::paths(&registry, dictionary, &mut out)?,
    }
    out.flush()?;

    Ok(())
}

fn init_logging(config: &LoggingConfig) -> Result<Logger> {
    let builder = Logger::builder().name(LOGGER_NAME).level(parse_level(&config.level)?);
    let builder = if config.json { builder.json() } else { builder };

    let logger = match &config.path {
        Some(path) => builder.path(path).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
