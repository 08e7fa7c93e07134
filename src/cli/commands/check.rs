use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    helper::{compile_issues, finish},
    {CommandResult, CommandSummary},
};
use crate::core::CompileContext;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CompileContext::new(&cmd.common)?;
    let issues = compile_issues(&ctx);
    Ok(finish(CommandSummary::Check, issues, ctx.locales.len()))
}
