//! Helper functions for MCP server operations.

use std::path::PathBuf;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use super::types::{Pagination, StatusItem, StatusKind};
use crate::{
    cli::CommonArgs,
    core::{LocaleStatuses, StatusContext},
};

/// Build a project context for `project_root_path`, reporting failures as
/// tool errors.
pub fn load_context(project_root_path: &str) -> Result<StatusContext, McpError> {
    let args = CommonArgs {
        root: Some(PathBuf::from(project_root_path)),
        ..Default::default()
    };

    StatusContext::new(&args)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

/// Serialize a tool result as pretty JSON text.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Missing and outdated pages of a locale, in status order.
pub fn status_items(ctx: &StatusContext, statuses: &LocaleStatuses) -> Vec<StatusItem> {
    statuses
        .statuses
        .iter()
        .filter(|status| !status.is_up_to_date())
        .map(|status| StatusItem {
            id: status.source.id.clone(),
            status: if status.missing {
                StatusKind::Missing
            } else {
                StatusKind::Outdated
            },
            source_path: ctx.display_path(&status.source.file),
            translation_path: status.page.as_ref().map(|page| ctx.display_path(&page.file)),
        })
        .collect()
}

/// Apply offset/limit to `items`.
pub fn paginate<T>(items: Vec<T>, offset: usize, limit: usize) -> (Vec<T>, Pagination) {
    let total_count = items.len();
    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total_count;

    (
        page,
        Pagination {
            offset,
            limit,
            has_more,
        },
    )
}
