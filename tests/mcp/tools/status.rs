use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use starlight_i18n::mcp::{StarlightI18nMcpServer, types::GetTranslationStatusParams};

use crate::{McpTestFixture, extract_tool_result_json};

fn params(fixture: &McpTestFixture, locale: Option<&str>) -> GetTranslationStatusParams {
    GetTranslationStatusParams {
        project_root_path: fixture.root(),
        locale: locale.map(str::to_string),
        limit: None,
        offset: None,
    }
}

#[tokio::test]
async fn test_translation_status_all_locales() {
    let fixture = McpTestFixture::with_site().unwrap();
    let server = StarlightI18nMcpServer::new();

    let result = server
        .get_translation_status(Parameters(params(&fixture, None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    let french = &json_result["locales"][0];
    assert_eq!(french["directory"], "fr");
    assert_eq!(french["upToDateCount"], 1);
    assert_eq!(french["missingCount"], 0);
    assert_eq!(french["outdatedCount"], 1);
    assert_eq!(
        french["items"],
        json!([{
            "id": "guide.md",
            "status": "outdated",
            "sourcePath": "src/content/docs/en/guide.md",
            "translationPath": "src/content/docs/fr/guide.md"
        }])
    );

    let german = &json_result["locales"][1];
    assert_eq!(german["directory"], "de");
    assert_eq!(german["missingCount"], 2);
    assert_eq!(german["items"][0]["status"], "missing");
    assert!(german["items"][0].get("translationPath").is_none());
}

#[tokio::test]
async fn test_translation_status_single_locale_with_pagination() {
    let fixture = McpTestFixture::with_site().unwrap();
    let server = StarlightI18nMcpServer::new();

    let mut params = params(&fixture, Some("de"));
    params.limit = Some(1);

    let result = server
        .get_translation_status(Parameters(params))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 1);
    assert_eq!(locales[0]["items"].as_array().unwrap().len(), 1);
    assert_eq!(
        locales[0]["pagination"],
        json!({ "offset": 0, "limit": 1, "hasMore": true })
    );
}

#[tokio::test]
async fn test_translation_status_unknown_locale() {
    let fixture = McpTestFixture::with_site().unwrap();
    let server = StarlightI18nMcpServer::new();

    let error = server
        .get_translation_status(Parameters(params(&fixture, Some("es"))))
        .await
        .unwrap_err();

    assert_eq!(error.message, "Unknown locale 'es'.");
}
