//! Preparing a missing or outdated translation for a translator.

use std::path::PathBuf;

use tracing::debug;

use super::{
    content::raw_frontmatter,
    git::{VersionControl, reference_commit_before},
    project::StarlightProject,
    status::{PageStatus, PageStatusesByLocale},
    workspace::Workspace,
};
use crate::error::{Result, TranslationError};

/// Outcome of preparing a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparedTranslation {
    /// A new translation file seeded with the source frontmatter.
    Missing {
        id: String,
        source: PathBuf,
        translation: PathBuf,
        contents: String,
        written: bool,
    },
    /// Changes of the source page since the translation was last updated.
    Outdated {
        id: String,
        source: PathBuf,
        translation: PathBuf,
        /// Source commit the translation was based on.
        reference: String,
        /// Latest source commit.
        last: String,
        diff: String,
        /// Source page as it was at `reference`.
        reference_source: String,
    },
}

/// Look up the status of `id` in `locale`.
pub fn find_translation<'a>(
    statuses: &'a PageStatusesByLocale,
    locale: &str,
    id: &str,
) -> Result<&'a PageStatus> {
    let locale_statuses = statuses
        .get(locale)
        .ok_or_else(|| TranslationError::UnknownLocale(locale.to_string()))?;

    let status = locale_statuses
        .statuses
        .iter()
        .find(|status| status.source.id == id)
        .ok_or_else(|| TranslationError::UnknownPage(id.to_string()))?;

    Ok(status)
}

/// Prepare the translation of one page in `locale_directory`.
///
/// Missing pages get a new file holding the source frontmatter, written only
/// when `apply` is set and never over an existing file. Outdated pages get the
/// source diff since the commit their translation was based on.
pub fn prepare_translation(
    workspace: &impl Workspace,
    vcs: &(impl VersionControl + ?Sized),
    project: &StarlightProject,
    locale_directory: &str,
    status: &PageStatus,
    apply: bool,
) -> Result<PreparedTranslation> {
    if status.missing {
        prepare_missing(workspace, project, locale_directory, status, apply)
    } else if status.outdated {
        prepare_outdated(vcs, status)
    } else {
        Err(TranslationError::UpToDate {
            id: status.source.id.clone(),
            locale: locale_directory.to_string(),
        }
        .into())
    }
}

fn prepare_missing(
    workspace: &impl Workspace,
    project: &StarlightProject,
    locale_directory: &str,
    status: &PageStatus,
    apply: bool,
) -> Result<PreparedTranslation> {
    let source = &status.source;
    let translation = source
        .id
        .split('/')
        .fold(project.content.join(locale_directory), |path, segment| {
            path.join(segment)
        });

    if workspace.exists(&translation) {
        return Err(TranslationError::AlreadyExists(translation).into());
    }

    let source_content = workspace.read_file(&source.file)?;
    let contents = format!("{}\n\n", raw_frontmatter(&source_content));

    if apply {
        workspace.write_file(&translation, &contents)?;
        debug!(path = %translation.display(), "created translation file");
    }

    Ok(PreparedTranslation::Missing {
        id: source.id.clone(),
        source: source.file.clone(),
        translation,
        contents,
        written: apply,
    })
}

fn prepare_outdated(
    vcs: &(impl VersionControl + ?Sized),
    status: &PageStatus,
) -> Result<PreparedTranslation> {
    let page = status
        .page
        .as_ref()
        .ok_or(TranslationError::MissingPageReference)?;
    let source = &status.source;

    let commits = vcs.log(&source.file)?;
    let reference = reference_commit_before(&commits, page.changes.last.date)
        .ok_or_else(|| TranslationError::NoReferenceCommit(source.id.clone()))?;

    let last = &source.changes.last.reference;
    let diff = vcs.diff(&source.file, &reference.hash, last)?;
    let reference_source = vcs.show_at_ref(&source.file, &reference.hash)?;

    Ok(PreparedTranslation::Outdated {
        id: source.id.clone(),
        source: source.file.clone(),
        translation: page.file.clone(),
        reference: reference.hash.clone(),
        last: last.clone(),
        diff,
        reference_source,
    })
}
