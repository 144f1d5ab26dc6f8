//! Command-line interface definition.

use clap::{Parser, Subcommand};
use lingo::domain::Culture;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lingo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect culture-aware resource dictionaries")]
pub(crate) struct Cli {
    /// Configuration file (defaults to `lingo.*` in the working directory)
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Culture to activate before running the command (overrides the config)
    #[arg(short = 'l', long, global = true)]
    pub(crate) culture: Option<Culture>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List registered dictionary names
    Names,
    /// Print one resource value
    Get {
        /// Logical dictionary name
        dictionary: String,
        /// Resource key (nested keys are dotted, e.g. `menu.file.open`)
        key: String,
    },
    /// Print every entry of the active bundle, sorted by key
    Show {
        /// Logical dictionary name
        dictionary: String,
    },
    /// Print the culture → path table of a dictionary
    Paths {
        /// Logical dictionary name
        dictionary: String,
    },
}
