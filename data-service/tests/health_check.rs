mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
    assert!(body["database"].is_string());
    assert!(body["uptime"].as_f64().is_some());

    app.cleanup().await;
}

#[tokio::test]
async fn health_reports_database_healthy_after_first_use() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // First write establishes the cached connection
    let response = client
        .post(format!("{}/api/data", app.address))
        .json(&serde_json::json!({ "content": "warm up" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["database"], "healthy");

    app.cleanup().await;
}

#[tokio::test]
async fn root_reports_service_metadata() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Data Manager API");
    assert_eq!(body["status"], "running");
    assert!(body["version"].is_string());
    assert!(body["database"].is_string());
    assert_eq!(body["endpoints"]["addData"], "POST /api/data");
    assert_eq!(body["endpoints"]["fetchData"], "GET /api/data");

    app.cleanup().await;
}
