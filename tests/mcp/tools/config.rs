use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use starlight_i18n::mcp::{
    StarlightI18nMcpServer,
    types::{GetConfigParams, GetLocalesParams},
};

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_file(".git/HEAD", "ref: refs/heads/main\n").unwrap();
    let server = StarlightI18nMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["configDirectories"], json!(["."]));
    assert_eq!(json_result["config"]["ignores"], json!([]));
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "configDirectories": ["docs"],
            "ignores": ["**/drafts/**"]
        }))
        .unwrap();

    let server = StarlightI18nMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["configDirectories"], json!(["docs"]));
    assert_eq!(json_result["config"]["ignores"], json!(["**/drafts/**"]));
}

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales() {
    let fixture = McpTestFixture::with_site().unwrap();
    let server = StarlightI18nMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(
        json_result,
        json!({
            "configFile": "astro.config.mjs",
            "contentDir": "src/content/docs",
            "defaultLocale": "en",
            "locales": [
                { "directory": "fr", "label": "Français", "lang": "fr" },
                { "directory": "de", "label": "Deutsch" }
            ]
        })
    );
}

#[tokio::test]
async fn test_get_locales_without_project() {
    let fixture = McpTestFixture::new().unwrap();
    let server = StarlightI18nMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let error = server.get_locales(params).await.unwrap_err();

    assert!(
        error
            .message
            .contains("Failed to find a Starlight instance in the current workspace.")
    );
    assert!(fixture.root_path().exists());
}
