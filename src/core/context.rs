use std::{
    io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use anyhow::{Context as _, anyhow};
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        cancel::Cancellation,
        content::{build_inventory, partition},
        git::{GitCli, VersionControl},
        locales::{LocalesConfig, extract_locales_config_from_code},
        project::{StarlightProject, locate_project},
        status::{PageStatusesByLocale, compute_statuses},
        workspace::{LocalWorkspace, Workspace},
    },
    error::{Error, Result},
};

/// Extract the locales configuration of a located project.
///
/// JSON imports are read relative to the directory of the configuration file.
pub fn load_locales_config(
    workspace: &impl Workspace,
    project: &StarlightProject,
) -> Result<LocalesConfig> {
    let code = workspace.read_file(&project.config)?;
    let config_directory = project.config_directory();
    let reader = |relative_path: &str| -> io::Result<String> {
        workspace
            .read_file(&config_directory.join(relative_path))
            .map_err(|error| match error {
                Error::Io { source, .. } => source,
                other => io::Error::other(other.to_string()),
            })
    };

    let file_name = project
        .config
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    extract_locales_config_from_code(&code, &file_name, &reader)
}

/// Locate, extract, inventory and compare in one pass.
///
/// The result is a fresh snapshot: nothing is cached between calls.
pub fn get_content_pages_statuses(
    workspace: &impl Workspace,
    vcs: &(impl VersionControl + ?Sized),
    project: &StarlightProject,
    cancellation: &Cancellation,
) -> Result<(LocalesConfig, PageStatusesByLocale)> {
    let locales_config = load_locales_config(workspace, project)?;
    let pages = build_inventory(
        workspace,
        vcs,
        &project.content,
        &locales_config,
        cancellation,
    )?;
    let inventory = partition(pages, &locales_config);

    debug!(locales = inventory.len(), "partitioned content pages");

    let statuses = compute_statuses(&locales_config, &inventory)?;
    Ok((locales_config, statuses))
}

/// Project-level state shared by the CLI commands and the MCP tools.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--config-dir docs`)
/// 2. `.starlight-i18n.json` config file
/// 3. Built-in defaults
pub struct StatusContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Whether the configuration came from a file.
    pub config_from_file: bool,

    /// Canonical project root.
    pub root_dir: PathBuf,

    /// The located Starlight site.
    pub project: StarlightProject,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    workspace: LocalWorkspace,

    /// Repository handle, resolved on first use.
    git: OnceLock<GitCli>,
}

impl StatusContext {
    /// Create a new `StatusContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The project root does not exist
    /// - Config file is invalid
    /// - No Astro configuration file is found in the configured directories
    pub fn new(common_args: &CommonArgs) -> anyhow::Result<Self> {
        let verbose = common_args.verbose;

        let root = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let root_dir = root
            .canonicalize()
            .with_context(|| anyhow!("Invalid project root: {:?}", root))?;

        let config_result = load_config(&root_dir)?;

        if verbose && !config_result.from_file {
            eprintln!("Note: No .starlight-i18n.json found, using default configuration");
        }

        let mut config = config_result.config;

        if !common_args.config_dir.is_empty() {
            config.config_directories = common_args.config_dir.clone();
            config.validate()?;
        }

        let workspace = LocalWorkspace::new(&root_dir, &config.ignores, verbose);
        let project = locate_project(&workspace, &config.config_directories)?;

        Ok(Self {
            config,
            config_from_file: config_result.from_file,
            root_dir,
            project,
            verbose,
            workspace,
            git: OnceLock::new(),
        })
    }

    pub fn workspace(&self) -> &LocalWorkspace {
        &self.workspace
    }

    /// The git repository of the project.
    pub fn git(&self) -> Result<&GitCli> {
        if let Some(git) = self.git.get() {
            return Ok(git);
        }
        let git = GitCli::discover(&self.root_dir)?;
        Ok(self.git.get_or_init(|| git))
    }

    pub fn load_locales_config(&self) -> Result<LocalesConfig> {
        load_locales_config(&self.workspace, &self.project)
    }

    pub fn get_content_pages_statuses(
        &self,
        cancellation: &Cancellation,
    ) -> Result<(LocalesConfig, PageStatusesByLocale)> {
        get_content_pages_statuses(&self.workspace, self.git()?, &self.project, cancellation)
    }

    /// Render a path relative to the project root for display.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root_dir) {
            Ok(relative) => crate::utils::to_slash_path(relative),
            Err(_) => path.display().to_string(),
        }
    }
}
