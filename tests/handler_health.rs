mod common;

use serde_json::json;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "0 links stored");
    assert_eq!(json["checks"]["resolver"]["message"], "fake resolver");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::create_test_server();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("store").is_some());
    assert!(json["checks"].get("resolver").is_some());
}

#[tokio::test]
async fn test_health_counts_links() {
    let server = common::create_test_server();

    for path in ["/a", "/b"] {
        server
            .post("/api/shorturl")
            .json(&json!({ "url": format!("https://example.com{path}") }))
            .await
            .assert_status_ok();
    }

    let json = server.get("/health").await.json::<serde_json::Value>();
    assert_eq!(json["checks"]["store"]["message"], "2 links stored");
}
