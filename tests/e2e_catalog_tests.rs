//! End-to-end tests for the catalog endpoints
//!
//! Tests the service info, project listing and lookup, stats and health.

mod common;

use common::{
    write_catalog_file, TestClient, TestServer, BUILTIN_CATEGORIES, BUILTIN_PROJECTS_COUNT,
    DOCS_ID, EAIB_ID, EAIB_NAME,
};
use hub_catalog_server::catalog::load_catalog;
use reqwest::StatusCode;

// =============================================================================
// Service Info
// =============================================================================

#[tokio::test]
async fn test_root_returns_service_info() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_root().await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "HaloAI Studios Hub API");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["status"], "running");
}

// =============================================================================
// Projects
// =============================================================================

#[tokio::test]
async fn test_list_projects_returns_builtin_catalog() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_projects().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/json"));

    let projects: Vec<serde_json::Value> = response.json().await.unwrap();
    assert_eq!(projects.len(), BUILTIN_PROJECTS_COUNT);
    assert_eq!(projects[0]["id"], EAIB_ID);
    assert_eq!(projects[5]["id"], DOCS_ID);
    for project in &projects {
        assert_eq!(project["status"], "ready");
        assert_eq!(
            project["url"].as_str().unwrap(),
            format!("/{}", project["id"].as_str().unwrap())
        );
    }
}

#[tokio::test]
async fn test_get_project_by_id() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_project(EAIB_ID).await;
    assert_eq!(response.status(), StatusCode::OK);

    let project: serde_json::Value = response.json().await.unwrap();
    assert_eq!(project["id"], EAIB_ID);
    assert_eq!(project["name"], EAIB_NAME);
    assert_eq!(project["url"], "/eaib");
}

#[tokio::test]
async fn test_get_nonexistent_project_returns_404() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_project("nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Project not found" }));
}

// =============================================================================
// Stats and Health
// =============================================================================

#[tokio::test]
async fn test_stats_match_catalog() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_stats().await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats: serde_json::Value = response.json().await.unwrap();
    assert_eq!(stats["totalProjects"], BUILTIN_PROJECTS_COUNT);
    assert_eq!(stats["activeProjects"], BUILTIN_PROJECTS_COUNT);
    assert_eq!(stats["categories"], serde_json::json!(BUILTIN_CATEGORIES));
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_health().await;
    assert_eq!(response.status(), StatusCode::OK);

    let health: serde_json::Value = response.json().await.unwrap();
    assert_eq!(health["status"], "healthy");
    assert!(health["timestamp"].as_str().unwrap().ends_with('Z'));
    assert!(health["uptime"].as_f64().unwrap() >= 0.0);
}

// =============================================================================
// Unknown Routes
// =============================================================================

#[tokio::test]
async fn test_unknown_routes_return_404() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    for path in ["/api/unknown", "/nothing/here", "/api/projects/eaib/extra"] {
        let response = client.get_path(path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Route not found");
    }

    let response = client.post_path("/api/projects").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Catalog File
// =============================================================================

#[tokio::test]
async fn test_serves_catalog_loaded_from_file() {
    let file = write_catalog_file(
        r#"[
            {"id": "alpha", "name": "Alpha", "description": "First", "status": "ready", "category": "ai"},
            {"id": "beta", "name": "Beta", "description": "Second", "status": "beta", "category": "ai"}
        ]"#,
    );
    let catalog = load_catalog(Some(file.path())).unwrap();
    let server = TestServer::spawn_with_catalog(catalog).await;
    let client = TestClient::new(server.base_url.clone());

    let projects: Vec<serde_json::Value> = client.get_projects().await.json().await.unwrap();
    assert_eq!(projects.len(), 2);
    assert!(projects[0].get("url").is_none());

    let stats: serde_json::Value = client.get_stats().await.json().await.unwrap();
    assert_eq!(stats["totalProjects"], 2);
    assert_eq!(stats["activeProjects"], 1);
    assert_eq!(stats["categories"], serde_json::json!(["ai"]));

    let response = client.get_project("beta").await;
    assert_eq!(response.status(), StatusCode::OK);
}
