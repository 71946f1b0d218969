use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use super::helpers::{json_result, load_context, paginate, status_items};
use super::types::{
    ConfigDto, ConfigValues, GetConfigParams, GetLocalesParams, GetTranslationStatusParams,
    LocaleInfo, LocaleStatusResult, LocalesResult, PrepareTranslationParams,
    PreparedTranslationResult, TranslationStatusResult,
};
use crate::{
    config::load_config,
    core::{
        Cancellation,
        translation::{PreparedTranslation, find_translation, prepare_translation},
    },
};

#[derive(Clone)]
pub struct StarlightI18nMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for StarlightI18nMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl StarlightI18nMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool configuration
    #[tool(
        description = "Get the starlight-i18n configuration of a project (.starlight-i18n.json or defaults)."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Get the locales of the Starlight configuration
    #[tool(
        description = "Get the default locale and the locales to translate, as configured in the Astro configuration file of the Starlight site."
    )]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let config = ctx.load_locales_config().map_err(|e| {
            McpError::internal_error(format!("Failed to extract locales: {}", e), None)
        })?;

        let locales = config
            .locales
            .iter()
            .map(|(directory, locale)| LocaleInfo {
                directory: directory.to_string(),
                label: locale.label.clone(),
                lang: locale.lang.clone(),
            })
            .collect();

        json_result(&LocalesResult {
            config_file: ctx.display_path(&ctx.project.config),
            content_dir: ctx.display_path(&ctx.project.content),
            default_locale: config.default_locale,
            locales,
        })
    }

    /// Get missing and outdated pages per locale
    #[tool(
        description = "Get the translation status of every locale: counts of up-to-date, missing and outdated pages, and a paginated list of the pages that need work."
    )]
    pub async fn get_translation_status(
        &self,
        params: Parameters<GetTranslationStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(20).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = load_context(&params.0.project_root_path)?;
        let (_, statuses) = ctx
            .get_content_pages_statuses(&Cancellation::none())
            .map_err(|e| McpError::internal_error(format!("Status failed: {}", e), None))?;

        if let Some(locale) = &params.0.locale
            && !statuses.contains_key(locale)
        {
            return Err(McpError::invalid_params(
                format!("Unknown locale '{}'.", locale),
                None,
            ));
        }

        let locales = statuses
            .iter()
            .filter(|(directory, _)| {
                params
                    .0
                    .locale
                    .as_deref()
                    .is_none_or(|locale| locale == *directory)
            })
            .map(|(directory, locale_statuses)| {
                let (items, pagination) =
                    paginate(status_items(&ctx, locale_statuses), offset, limit);

                LocaleStatusResult {
                    directory: directory.to_string(),
                    label: locale_statuses.locale.label.clone(),
                    lang: locale_statuses.locale.lang.clone(),
                    up_to_date_count: locale_statuses.up_to_date_count(),
                    missing_count: locale_statuses.missing().count(),
                    outdated_count: locale_statuses.outdated().count(),
                    items,
                    pagination,
                }
            })
            .collect();

        json_result(&TranslationStatusResult { locales })
    }

    /// Prepare a missing or outdated translation without writing anything
    #[tool(
        description = "Prepare the translation of one page. For a missing page, returns the path and initial contents of the new file. For an outdated page, returns the diff of the source page since the translation was last updated and the source as it was then. Never writes files."
    )]
    pub async fn prepare_translation(
        &self,
        params: Parameters<PrepareTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let (_, statuses) = ctx
            .get_content_pages_statuses(&Cancellation::none())
            .map_err(|e| McpError::internal_error(format!("Status failed: {}", e), None))?;

        let status = find_translation(&statuses, &params.0.locale, &params.0.page_id)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let git = ctx
            .git()
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let prepared = prepare_translation(
            ctx.workspace(),
            git,
            &ctx.project,
            &params.0.locale,
            status,
            false,
        )
        .map_err(|e| McpError::internal_error(format!("Preparation failed: {}", e), None))?;

        let result = match prepared {
            PreparedTranslation::Missing {
                id,
                source,
                translation,
                contents,
                ..
            } => PreparedTranslationResult::Missing {
                id,
                source_path: ctx.display_path(&source),
                translation_path: ctx.display_path(&translation),
                contents,
            },
            PreparedTranslation::Outdated {
                id,
                source,
                translation,
                reference,
                last,
                diff,
                reference_source,
            } => PreparedTranslationResult::Outdated {
                id,
                source_path: ctx.display_path(&source),
                translation_path: ctx.display_path(&translation),
                reference,
                last,
                diff,
                reference_source,
            },
        };

        json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for StarlightI18nMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "starlight-i18n helps AI agents keep the translations of an Astro Starlight documentation site up to date.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get the default locale and the locales to translate\n\
                 3. get_translation_status - Get missing and outdated pages per locale (paginated)\n\
                 4. prepare_translation - Get what is needed to translate one page\n\n\
                 Recommended Workflow:\n\
                 1. Use get_translation_status to find pages that need work\n\
                 2. Use prepare_translation on a page\n\
                 3. For a missing page, create the file with the returned contents and translate the source\n\
                 4. For an outdated page, apply the returned diff to the translation"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = StarlightI18nMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
