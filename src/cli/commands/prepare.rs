use anyhow::Result;

use super::super::args::PrepareCommand;
use super::{CommandResult, CommandSummary, PrepareSummary, helper::finish};
use crate::core::{
    Cancellation, StatusContext,
    translation::{PreparedTranslation, find_translation, prepare_translation},
};

pub fn prepare(cmd: PrepareCommand) -> Result<CommandResult> {
    let ctx = StatusContext::new(&cmd.common)?;
    let (_, statuses) = ctx.get_content_pages_statuses(&Cancellation::none())?;

    let status = find_translation(&statuses, &cmd.locale, &cmd.page_id)?;
    let prepared = prepare_translation(
        ctx.workspace(),
        ctx.git()?,
        &ctx.project,
        &cmd.locale,
        status,
        cmd.apply,
    )?;

    let (source, translation) = match &prepared {
        PreparedTranslation::Missing {
            source,
            translation,
            ..
        }
        | PreparedTranslation::Outdated {
            source,
            translation,
            ..
        } => (ctx.display_path(source), ctx.display_path(translation)),
    };

    Ok(finish(
        CommandSummary::Prepare(PrepareSummary {
            prepared,
            source_path: source,
            translation_path: translation,
        }),
        false,
    ))
}
