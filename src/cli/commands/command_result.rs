use std::path::PathBuf;

use crate::{cli::exit_status::ExitStatus, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    /// `None` when issues kept the package from being written.
    Generate(Option<GenerateSummary>),
    Check,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub locales: Vec<String>,
    pub output_dir: PathBuf,
    pub package_name: String,
    pub file_count: usize,
}

/// Result of running lingo commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found while compiling, sorted.
    pub issues: Vec<Issue>,
    /// Number of locale catalog files that were compiled.
    pub locale_files_checked: usize,
}

impl CommandResult {
    /// Warnings alone do not fail a command.
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
