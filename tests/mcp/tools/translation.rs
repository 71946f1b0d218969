use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use starlight_i18n::mcp::{StarlightI18nMcpServer, types::PrepareTranslationParams};

use crate::{McpTestFixture, extract_tool_result_json};

fn params(fixture: &McpTestFixture, locale: &str, page_id: &str) -> PrepareTranslationParams {
    PrepareTranslationParams {
        project_root_path: fixture.root(),
        locale: locale.to_string(),
        page_id: page_id.to_string(),
    }
}

#[tokio::test]
async fn test_prepare_missing_translation_writes_nothing() {
    let fixture = McpTestFixture::with_site().unwrap();
    let server = StarlightI18nMcpServer::new();

    let result = server
        .prepare_translation(Parameters(params(&fixture, "de", "guide.md")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["kind"], "missing");
    assert_eq!(json_result["translationPath"], "src/content/docs/de/guide.md");
    assert_eq!(json_result["contents"], "---\ntitle: Guide\n---\n\n");
    assert!(
        !fixture
            .root_path()
            .join("src/content/docs/de/guide.md")
            .exists()
    );
}

#[tokio::test]
async fn test_prepare_outdated_translation() {
    let fixture = McpTestFixture::with_site().unwrap();
    let server = StarlightI18nMcpServer::new();

    let result = server
        .prepare_translation(Parameters(params(&fixture, "fr", "guide.md")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["kind"], "outdated");
    assert_eq!(json_result["sourcePath"], "src/content/docs/en/guide.md");
    assert_eq!(json_result["translationPath"], "src/content/docs/fr/guide.md");
    assert_ne!(json_result["reference"], json_result["last"]);
    assert!(json_result["diff"].as_str().unwrap().contains("+Step two."));
    assert_eq!(
        json_result["referenceSource"],
        "---\ntitle: Guide\n---\n\nStep one.\n"
    );
}

#[tokio::test]
async fn test_prepare_unknown_page() {
    let fixture = McpTestFixture::with_site().unwrap();
    let server = StarlightI18nMcpServer::new();

    let error = server
        .prepare_translation(Parameters(params(&fixture, "fr", "nope.md")))
        .await
        .unwrap_err();

    assert_eq!(
        error.message,
        "Failed to find a page with id 'nope.md' in the default locale."
    );
}
