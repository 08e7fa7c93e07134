//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Compile the translation files and write the Go package
//! - `check`: Compile and cross-check the translation files without writing
//! - `init`: Initialize the lingo configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory containing the <locale>.toml files (overrides config file)
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Locale every other locale is checked against (overrides config file)
    #[arg(short, long)]
    pub base_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory to write the generated package to (overrides config file)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Go package name (default: base name of the output directory)
    #[arg(short, long)]
    pub package: Option<String>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate type-safe Go translation functions
    Generate(GenerateCommand),
    /// Check that every locale compiles and matches the base locale
    Check(CheckCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
}
