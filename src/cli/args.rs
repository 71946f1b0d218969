//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `status`: Report missing and outdated translations per locale
//! - `locales`: Print the locales configured in the Astro configuration
//! - `prepare`: Prepare a missing or outdated translation
//! - `init`: Initialize a configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Status(cmd)) => cmd.common.verbose,
            Some(Command::Locales(cmd)) => cmd.common.verbose,
            Some(Command::Prepare(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory searched for the Astro configuration (overrides config file)
    /// Can be specified multiple times: --config-dir docs --config-dir .
    #[arg(long = "config-dir")]
    pub config_dir: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Locale directories to report (default: all)
    pub locales: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Give up after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PrepareCommand {
    /// Locale directory of the translation
    pub locale: String,

    /// Page id, relative to the locale directory (e.g. `guides/intro.md`)
    pub page_id: String,

    /// Actually create the translation file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report missing and outdated translations for each locale
    Status(StatusCommand),
    /// Print the locales of the Starlight configuration
    Locales(LocalesCommand),
    /// Prepare a missing or outdated translation of a page
    Prepare(PrepareCommand),
    /// Initialize a new .starlight-i18n.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
