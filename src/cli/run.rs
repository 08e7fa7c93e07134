//! Dispatches parsed arguments to the command handlers.
//!
//! `generate` and `check` return a [`CommandResult`] that is reported here;
//! `init` prints its own outcome.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, generate::generate, init::init},
    exit_status::ExitStatus,
    report,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd).map(finish),
        Some(Command::Check(cmd)) => check(cmd).map(finish),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

fn finish(result: CommandResult) -> ExitStatus {
    report::print(&result);
    result.exit_status()
}
