//! Content inventory: discovery, locale classification and history of pages.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::{
    cancel::Cancellation,
    git::{GitFileChanges, VersionControl, file_changes},
    locales::LocalesConfig,
    workspace::Workspace,
};
use crate::{
    error::Result,
    utils::{OrderedMap, to_slash_path},
};

/// Extensions Astro treats as Markdown content.
pub const CONTENT_EXTENSIONS: [&str; 8] = [
    "md", "mdx", "mdoc", "markdown", "mdown", "mkdn", "mkd", "mdwn",
];

/// A content page of one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Path relative to the locale directory; the same page in two locales has the same id.
    pub id: String,
    pub file: PathBuf,
    pub changes: GitFileChanges,
    /// `None` for pages living directly in the content root.
    pub locale_directory: Option<String>,
}

/// Pages by locale directory key, then by id.
pub type ContentInventory = OrderedMap<OrderedMap<Page>>;

/// Split a content-relative path into its id and locale directory.
///
/// The first segment is a locale directory when it names a configured locale
/// or the default locale. Anything else belongs to the default locale and
/// keeps its full path as id.
///
/// Matching only the keys of `locales` would miss a default locale kept in
/// its own directory: with `{ en, ja }` and `defaultLocale: 'en'`, the page
/// `en/index.md` must share the id `index.md` with `ja/index.md`.
pub fn classify(relative_path: &str, config: &LocalesConfig) -> (String, Option<String>) {
    match relative_path.split_once('/') {
        Some((directory, id)) if config.is_locale_directory(directory) => {
            (id.to_string(), Some(directory.to_string()))
        }
        _ => (relative_path.to_string(), None),
    }
}

/// Discover every content page below `content_root` with its history.
///
/// History queries run in parallel; the result keeps discovery order. A page
/// whose history cannot be read fails the whole inventory.
pub fn build_inventory(
    workspace: &impl Workspace,
    vcs: &(impl VersionControl + ?Sized),
    content_root: &Path,
    config: &LocalesConfig,
    cancellation: &Cancellation,
) -> Result<Vec<Page>> {
    cancellation.check()?;

    let files = workspace.find_files(content_root, &CONTENT_EXTENSIONS);
    debug!(content_root = %content_root.display(), files = files.len(), "discovered content files");

    files
        .par_iter()
        .map(|file| -> Result<Page> {
            cancellation.check()?;

            let relative = to_slash_path(file.strip_prefix(content_root).unwrap_or(file));
            let (id, locale_directory) = classify(&relative, config);
            let changes = file_changes(vcs, file)?;

            cancellation.check()?;

            Ok(Page {
                id,
                file: file.clone(),
                changes,
                locale_directory,
            })
        })
        .collect()
}

/// Group pages by locale directory, then by id.
///
/// Pages without a locale directory go to the default locale. Within a
/// locale, the last page with a given id wins.
pub fn partition(pages: Vec<Page>, config: &LocalesConfig) -> ContentInventory {
    let mut inventory = ContentInventory::new();

    for page in pages {
        let directory = page
            .locale_directory
            .clone()
            .unwrap_or_else(|| config.default_locale.clone());

        inventory
            .entry(directory)
            .or_default()
            .insert(page.id.clone(), page);
    }

    inventory
}

/// The leading `---` fenced frontmatter block of a page, fences included.
///
/// Returns an empty string when the page has no frontmatter.
pub fn raw_frontmatter(content: &str) -> &str {
    let mut lines = content.split_inclusive('\n');

    let Some(opening) = lines.next().filter(|line| line.trim_end() == "---") else {
        return "";
    };

    let mut end = opening.len();
    for line in lines {
        if line.trim_end() == "---" {
            return &content[..end + line.trim_end().len()];
        }
        end += line.len();
    }

    ""
}
