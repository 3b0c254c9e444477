//! Command-line interface.
//!
//! Running with no subcommand performs a registry build, so the binary can
//! stand in for a zero-argument build script.

mod docs;
mod registry;
mod serve;

use clap::{Parser, Subcommand};

use crate::config::Config;

pub use docs::cmd_docs;
pub use registry::{cmd_build, cmd_info, cmd_list};
pub use serve::cmd_serve;

#[derive(Parser, Debug)]
#[command(
    name = "nativeui-registry",
    version,
    about = "Build and serve the nativeui component registry"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate public/r/<name>.json for every component in registry/
    Build,

    /// Generate a docs page for every published registry item
    Docs,

    /// Serve registry items over HTTP
    Serve,

    /// List components in the published registry index
    List,

    /// Show details of one published component
    Info {
        /// Component name (e.g. "badge" or "badge.json")
        name: String,
    },
}

/// Run a parsed command.
pub async fn run_command(command: Option<Command>, config: &Config) -> anyhow::Result<()> {
    match command.unwrap_or(Command::Build) {
        Command::Build => cmd_build(config),
        Command::Docs => cmd_docs(config),
        Command::Serve => cmd_serve(config).await,
        Command::List => cmd_list(config).await,
        Command::Info { name } => cmd_info(config, &name).await,
    }
}
