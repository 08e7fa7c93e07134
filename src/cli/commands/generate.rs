use std::path::Path;

use anyhow::Result;

use super::super::args::GenerateCommand;
use super::{
    helper::{compile_issues, finish, has_errors},
    {CommandResult, CommandSummary, GenerateSummary},
};
use crate::{
    core::CompileContext,
    emit::{render_package, write_package},
};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    generate_in(Path::new("."), &cmd)
}

/// Run `generate` with `root_dir` as the working directory.
pub fn generate_in(root_dir: &Path, cmd: &GenerateCommand) -> Result<CommandResult> {
    let ctx = CompileContext::with_root(root_dir, &cmd.common, |config| {
        if let Some(ref output_dir) = cmd.output_dir {
            config.output_dir = output_dir.to_string_lossy().to_string();
        }
        if let Some(ref package) = cmd.package {
            config.package_name = Some(package.clone());
        }
    })?;

    let issues = compile_issues(&ctx);
    if has_errors(&issues) {
        return Ok(finish(
            CommandSummary::Generate(None),
            issues,
            ctx.locales.len(),
        ));
    }

    let package_name = ctx.config.resolved_package_name()?;
    let files = render_package(&package_name, &ctx.base_locale, &ctx.catalogs())?;
    write_package(&ctx.output_dir, &files, ctx.verbose)?;

    let summary = GenerateSummary {
        locales: ctx.locale_names().iter().map(|l| l.to_string()).collect(),
        output_dir: ctx.output_dir.clone(),
        package_name,
        file_count: files.len(),
    };
    Ok(finish(
        CommandSummary::Generate(Some(summary)),
        issues,
        ctx.locales.len(),
    ))
}
