//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run translation checks (placeholders, markup)
//! - `init`: Initialize transcheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

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
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that load locale files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing the locale files (overrides config file)
    pub messages_root: Option<PathBuf>,

    /// Reference locale every other locale is checked against (overrides config file)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// Glob matched against locale file names (overrides config file)
    #[arg(long)]
    pub file_pattern: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Checks to run (default: all)
    #[arg(long = "rule", value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check locale files for broken placeholders and unbalanced markup
    Check(CheckCommand),
    /// Initialize a new .transcheckrc.json configuration file
    Init,
}
