use rmcp::handler::server::wrapper::Parameters;
use varscout::{
    core::extract::ScopeTracking,
    mcp::{VarscoutMcpServer, types::ScanVariablesParams},
};

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json, fixture_project};

fn params(path: String) -> ScanVariablesParams {
    ScanVariablesParams {
        path,
        scope: None,
        data_type: None,
        scope_tracking: None,
        limit: None,
        offset: None,
    }
}

fn names(result: &serde_json::Value) -> Vec<&str> {
    result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect()
}

// ============================================================================
// scan_variables tests
// ============================================================================

#[tokio::test]
async fn test_scan_variables_all() {
    let fixture = fixture_project().unwrap();
    let server = VarscoutMcpServer::new();

    let result = server
        .scan_variables(Parameters(params(fixture.root())))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 6);
    assert_eq!(json_result["fileCount"], 2);
    assert_eq!(json_result["parseErrors"].as_array().unwrap().len(), 0);
    assert_eq!(
        names(&json_result),
        vec!["DEBUG", "NAME", "count", "items", "RATE", "alias"]
    );
    assert_pagination(&json_result, 0, 50, false);

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items[0]["dataType"], "bool");
    assert_eq!(items[0]["defaultValue"], false);
    assert_eq!(items[2]["scope"], "Function: main");
    assert_eq!(items[3]["dataType"], "function_call");
    assert_eq!(items[3]["defaultValue"], "(None)");
    assert_eq!(items[4]["scope"], "Global");
    assert_eq!(items[5]["dataType"], "variable");
    assert!(
        items[4]["sourceFile"]
            .as_str()
            .unwrap()
            .ends_with("util.py")
    );
}

#[tokio::test]
async fn test_scan_variables_pagination() {
    let fixture = fixture_project().unwrap();
    let server = VarscoutMcpServer::new();

    let mut p = params(fixture.root());
    p.limit = Some(2);
    p.offset = Some(1);

    let result = server.scan_variables(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 6);
    assert_eq!(names(&json_result), vec!["NAME", "count"]);
    assert_pagination(&json_result, 1, 2, true);
}

#[tokio::test]
async fn test_scan_variables_offset_past_end() {
    let fixture = fixture_project().unwrap();
    let server = VarscoutMcpServer::new();

    let mut p = params(fixture.root());
    p.offset = Some(10);

    let result = server.scan_variables(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(names(&json_result).is_empty());
    assert_pagination(&json_result, 10, 50, false);
}

#[tokio::test]
async fn test_scan_variables_limit_is_capped() {
    let fixture = fixture_project().unwrap();
    let server = VarscoutMcpServer::new();

    let mut p = params(fixture.root());
    p.limit = Some(10_000);

    let result = server.scan_variables(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 200, false);
}

#[tokio::test]
async fn test_scan_variables_filters() {
    let fixture = fixture_project().unwrap();
    let server = VarscoutMcpServer::new();

    let mut p = params(fixture.root());
    p.scope = Some("Function: main".to_string());
    let result = server.scan_variables(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(names(&json_result), vec!["count", "items"]);
    assert_eq!(json_result["totalCount"], 2);

    let mut p = params(fixture.root());
    p.data_type = Some("str".to_string());
    let result = server.scan_variables(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(names(&json_result), vec!["NAME"]);
}

#[tokio::test]
async fn test_scan_variables_unknown_data_type() {
    let fixture = fixture_project().unwrap();
    let server = VarscoutMcpServer::new();

    let mut p = params(fixture.root());
    p.data_type = Some("string".to_string());

    assert!(server.scan_variables(Parameters(p)).await.is_err());
}

#[tokio::test]
async fn test_scan_variables_scope_tracking_override() {
    let fixture = McpTestFixture::with_files(&[(
        "mod.py",
        "def setup():\n    local = 1\nafter = 2\n",
    )])
    .unwrap();
    let server = VarscoutMcpServer::new();

    let result = server
        .scan_variables(Parameters(params(fixture.root())))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"][1]["scope"], "Function: setup");

    let mut p = params(fixture.root());
    p.scope_tracking = Some(ScopeTracking::Lexical);
    let result = server.scan_variables(Parameters(p)).await.unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"][1]["scope"], "Global");
}

#[tokio::test]
async fn test_scan_variables_reports_parse_errors() {
    let fixture = McpTestFixture::with_files(&[
        ("broken.py", "def broken(:\n"),
        ("fine.py", "value = None\n"),
    ])
    .unwrap();
    let server = VarscoutMcpServer::new();

    let result = server
        .scan_variables(Parameters(params(fixture.root())))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["dataType"], "NoneType");
    assert!(json_result["items"][0]["defaultValue"].is_null());

    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("broken.py")
    );
}

#[tokio::test]
async fn test_scan_variables_invalid_path() {
    let fixture = McpTestFixture::new().unwrap();
    let server = VarscoutMcpServer::new();

    let missing = fixture.root_path().join("missing");
    let result = server
        .scan_variables(Parameters(params(missing.to_string_lossy().to_string())))
        .await;

    assert!(result.is_err());
}
