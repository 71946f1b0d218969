use anyhow::Result;

use super::super::args::LocalesCommand;
use super::{CommandResult, CommandSummary, LocalesSummary, helper::finish};
use crate::core::StatusContext;

pub fn locales(cmd: LocalesCommand) -> Result<CommandResult> {
    let ctx = StatusContext::new(&cmd.common)?;
    let config = ctx.load_locales_config()?;

    Ok(finish(
        CommandSummary::Locales(LocalesSummary {
            format: cmd.format,
            config_file: ctx.display_path(&ctx.project.config),
            content_dir: ctx.display_path(&ctx.project.content),
            config,
        }),
        false,
    ))
}
