//! End-to-end tool calls through the in-process dispatcher

use museum_mcp::{LogFormat, MuseumConfig, MuseumMcpServer};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{json, Value};

fn server() -> MuseumMcpServer {
    MuseumMcpServer::from_config(&MuseumConfig::default()).expect("built-in catalog loads")
}

/// Parse the single JSON text block of a successful tool result
fn body(result: &CallToolResult) -> Value {
    assert_ne!(result.is_error, Some(true), "tool reported an error");
    match &result.content[0].raw {
        RawContent::Text(text) => serde_json::from_str(&text.text).expect("tool returned JSON"),
        other => panic!("expected text content, got {:?}", other),
    }
}

async fn call(server: &MuseumMcpServer, name: &str, params: Value) -> Value {
    let result = server.call_tool(name, params).await.expect("tool call succeeds");
    body(&result)
}

#[tokio::test]
async fn search_elements_by_layer_and_tag() {
    let server = server();
    let value = call(
        &server,
        "search_elements",
        json!({ "layer": "organism", "tags": ["hero"], "limit": 2 }),
    )
    .await;

    assert_eq!(value["count"], 2);
    let ids: Vec<&str> = value["elements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["hero-split", "hero-centered"]);
}

#[tokio::test]
async fn search_elements_accepts_empty_arguments() {
    let server = server();
    let value = call(&server, "search_elements", json!({})).await;
    assert_eq!(value["count"], 10);
}

#[tokio::test]
async fn search_components_by_zone() {
    let server = server();
    let value = call(
        &server,
        "search_components",
        json!({ "zone": "glass-conservatory", "query": "hero" }),
    )
    .await;

    assert_eq!(value["count"], 1);
    assert_eq!(value["components"][0]["id"], "glass-hero");
    assert_eq!(value["components"][0]["is_interactive"], true);
}

#[tokio::test]
async fn get_element_reports_kind() {
    let server = server();

    let component = call(&server, "get_element", json!({ "id": "neon-hero" })).await;
    assert_eq!(component["kind"], "component");
    assert_eq!(component["zone"], "neon-alley");

    let element = call(&server, "get_element", json!({ "id": "login-form" })).await;
    assert_eq!(element["kind"], "element");
    assert_eq!(element["layer"], "molecule");
}

#[tokio::test]
async fn missing_entities_are_tool_errors() {
    let server = server();
    for (tool, id) in [
        ("get_element", "ghost"),
        ("get_theme", "vaporwave"),
        ("get_zone", "attic"),
    ] {
        let result = server.call_tool(tool, json!({ "id": id })).await.unwrap();
        assert_eq!(result.is_error, Some(true), "{} should report not found", tool);
    }
}

#[tokio::test]
async fn get_zone_includes_components() {
    let server = server();
    let value = call(&server, "get_zone", json!({ "id": "void-observatory" })).await;
    assert_eq!(value["name"], "Void Observatory");
    assert_eq!(value["component_count"], 2);
    assert_eq!(value["components"][0]["id"], "starfield");
}

#[tokio::test]
async fn list_themes_returns_six() {
    let server = server();
    let value = call(&server, "list_themes", json!({})).await;
    assert_eq!(value["count"], 6);
    assert_eq!(value["themes"].as_array().unwrap().len(), 6);

    let theme = call(&server, "get_theme", json!({ "id": "sunset" })).await;
    assert_eq!(theme["palette"]["primary"], "#f97316");
}

#[tokio::test]
async fn search_zones_with_and_without_query() {
    let server = server();

    let all = call(&server, "search_zones", json!({})).await;
    assert_eq!(all["count"], 6);

    let neon = call(&server, "search_zones", json!({ "query": "Cyberpunk" })).await;
    assert_eq!(neon["count"], 1);
    assert_eq!(neon["zones"][0]["id"], "neon-alley");

    let none = call(&server, "search_zones", json!({ "query": "xyznonexistent123" })).await;
    assert_eq!(none["count"], 0);
    assert_eq!(none["zones"], json!([]));
}

#[tokio::test]
async fn list_categories_for_layer() {
    let server = server();
    let value = call(&server, "list_categories", json!({ "layer": "template" })).await;
    assert_eq!(value["count"], 3);
    for category in value["categories"].as_array().unwrap() {
        assert_eq!(category["layer"], "template");
        assert!(category["count"].as_u64().unwrap() >= 1);
    }
}

#[tokio::test]
async fn suggest_components_shape() {
    let server = server();
    let value = call(
        &server,
        "suggest_components",
        json!({ "description": "landing page", "aesthetic": "neon" }),
    )
    .await;

    assert_eq!(value["query"], "landing page");
    assert_eq!(value["aesthetic"], "neon");
    assert_eq!(value["count"], 4);
    assert_eq!(value["suggestions"][0]["reason"], "Hero section for landing pages");
    assert_eq!(value["suggestions"][0]["suggested_zone"], "Neon Alley");
}

#[tokio::test]
async fn suggest_with_no_arguments_is_empty() {
    let server = server();
    let value = call(&server, "suggest_components", json!({})).await;

    assert_eq!(value["query"], "");
    assert_eq!(value["count"], 0);
    assert_eq!(value["suggestions"], json!([]));
}

#[tokio::test]
async fn suggest_without_aesthetic_reports_null() {
    let server = server();
    let value = call(
        &server,
        "suggest_components",
        json!({ "description": "Build a login form" }),
    )
    .await;

    assert!(value["aesthetic"].is_null());
    assert!(value["count"].as_u64().unwrap() > 0);
    assert!(value["suggestions"][0].get("suggested_zone").is_none());
}

#[tokio::test]
async fn catalog_status_partitions_layers() {
    let server = server();
    let value = call(&server, "get_catalog_status", json!({})).await;
    let per_layer: u64 = value["elements_per_layer"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(Some(per_layer), value["elements"].as_u64());
}

#[tokio::test]
async fn invalid_layer_is_rejected() {
    let server = server();
    let result = server
        .call_tool("search_elements", json!({ "layer": "galaxy" }))
        .await;
    assert!(matches!(result, Err(museum_mcp::ToolCallError::InvalidParams(_))));
}

const TOML_CATALOG: &str = r#"
[[zones]]
id = "lab"
name = "Test Lab"
aesthetic = "sterile white benches"
tags = ["clean"]

[[themes]]
id = "t1"
name = "One"
description = ""

[[themes]]
id = "t2"
name = "Two"
description = ""

[[themes]]
id = "t3"
name = "Three"
description = ""

[[themes]]
id = "t4"
name = "Four"
description = ""

[[themes]]
id = "t5"
name = "Five"
description = ""

[[themes]]
id = "t6"
name = "Six"
description = ""

[[categories]]
id = "buttons"
name = "Buttons"
description = "Clickable things"
layer = "atom"

[[components]]
id = "lab-button"
name = "Lab Button"
description = "Very clean button"
zone = "lab"
categories = ["buttons"]
tags = ["button"]

[[elements]]
id = "plain-button"
name = "Plain Button"
description = "Nothing fancy"
layer = "atom"
category = "buttons"
tags = ["button"]
"#;

#[tokio::test]
async fn serves_catalog_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, TOML_CATALOG).unwrap();

    let config = MuseumConfig {
        catalog_path: Some(path),
        log_format: LogFormat::Text,
    };
    let server = MuseumMcpServer::from_config(&config).unwrap();

    let status = call(&server, "get_catalog_status", json!({})).await;
    assert_eq!(status["components"], 1);
    assert_eq!(status["elements"], 1);

    let value = call(&server, "search_components", json!({ "zone": "lab" })).await;
    assert_eq!(value["components"][0]["id"], "lab-button");
}
