mod common;

use serde_json::json;

#[tokio::test]
async fn test_shorten_then_redirect() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorturl")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com");
    let code = json["short_url"].as_str().unwrap().to_string();
    assert!(!code.is_empty());

    let response = server.get(&format!("/api/shorturl/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_preserves_url_byte_for_byte() {
    let server = common::create_test_server();
    let original = "https://www.example.com/a/b?x=1&y=%20z#section";

    let code = server
        .post("/api/shorturl")
        .json(&json!({ "url": original }))
        .await
        .json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/api/shorturl/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), original);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server();

    let response = server.get("/api/shorturl/doesnotexist123").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "short url not found");
}

#[tokio::test]
async fn test_redirect_missing_code() {
    let server = common::create_test_server();

    let response = server.get("/api/shorturl").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "url code is missing");
}

#[tokio::test]
async fn test_redirect_blank_code() {
    let server = common::create_test_server();

    let response = server.get("/api/shorturl/%20").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_codes_from_one_server_are_independent() {
    let server = common::create_test_server();
    let mut issued = Vec::new();

    for target in [
        "https://example.com/1",
        "https://example.com/2",
        "https://rust-lang.org/",
    ] {
        let code = server
            .post("/api/shorturl")
            .json(&json!({ "url": target }))
            .await
            .json::<serde_json::Value>()["short_url"]
            .as_str()
            .unwrap()
            .to_string();
        issued.push((code, target));
    }

    for (code, target) in issued {
        let response = server.get(&format!("/api/shorturl/{code}")).await;
        assert_eq!(response.status_code(), 302);
        assert_eq!(response.header("location"), target);
    }
}

#[tokio::test]
async fn test_cors_headers_present() {
    let server = common::create_test_server();

    let response = server
        .get("/api/shorturl/doesnotexist123")
        .add_header("Origin", "https://client.example")
        .await;

    response.assert_status_not_found();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
