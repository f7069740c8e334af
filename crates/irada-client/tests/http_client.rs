// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP content client tests against a wiremock server.

use irada_client::HttpContentClient;
use irada_config::{ApiConfig, AuthScheme};
use irada_core::{ContactMessage, ContentClient, IradaError, PageQuery};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpContentClient {
    HttpContentClient::from_config(&ApiConfig {
        endpoint: server.uri(),
        key: Some("test-key".into()),
        ..ApiConfig::default()
    })
    .unwrap()
}

fn blog(id: &str, category: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "slug": format!("slug-{id}"),
        "title": format!("Title {id}"),
        "meta": "summary",
        "category": category,
        "tags": ["rust"],
        "viewsCount": 10,
        "likesCount": 1,
        "publishedAt": "2025-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn fetch_page_decodes_list_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "blogs": [blog("a", "Tech"), blog("b", "Life")],
                "pagination": {
                    "currentPage": 2,
                    "totalPages": 3,
                    "totalBlogs": 25,
                    "limit": 10,
                    "hasNextPage": true,
                    "hasPrevPage": true
                }
            }
        })))
        .mount(&server)
        .await;

    let page = client(&server)
        .fetch_page(&PageQuery::first().at_page(2))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, "a");
    assert_eq!(page.pagination.current_page, 2);
    assert_eq!(page.pagination.total_items, 25);
    assert!(page.has_next());
}

#[tokio::test]
async fn fetch_page_sends_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .and(query_param("category", "Tech"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"blogs": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .fetch_page(&PageQuery::first().with_category("Tech").with_limit(10))
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert!(!page.has_next());
}

#[tokio::test]
async fn bearer_auth_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"blogs": []}})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).fetch_page(&PageQuery::first()).await.unwrap();
}

#[tokio::test]
async fn api_key_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"blogs": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpContentClient::from_config(&ApiConfig {
        endpoint: server.uri(),
        key: Some("test-key".into()),
        auth: AuthScheme::ApiKey,
        ..ApiConfig::default()
    })
    .unwrap();
    client.fetch_page(&PageQuery::featured()).await.unwrap();
}

#[tokio::test]
async fn fetch_item_decodes_single_envelope() {
    let server = MockServer::start().await;
    let mut body = blog("x1", "Tech");
    body["content"] = json!("<h2>Intro</h2>");
    Mock::given(method("GET"))
        .and(path("/api/blogs/slug-x1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": body})))
        .mount(&server)
        .await;

    let item = client(&server).fetch_item("slug-x1").await.unwrap();
    assert_eq!(item.id, "x1");
    assert_eq!(item.content, "<h2>Intro</h2>");
}

#[tokio::test]
async fn fetch_item_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blogs/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Blog not found"})))
        .mount(&server)
        .await;

    let err = client(&server).fetch_item("missing").await.unwrap_err();
    assert!(err.is_not_found(), "got: {err}");
}

#[tokio::test]
async fn fetch_item_without_data_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let err = client(&server).fetch_item("ghost").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn non_2xx_is_server_error_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "database down"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_page(&PageQuery::first())
        .await
        .unwrap_err();
    match err {
        IradaError::Server { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database down");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_page(&PageQuery::first())
        .await
        .unwrap_err();
    assert!(matches!(err, IradaError::Server { status: 200, .. }), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpContentClient::from_config(&ApiConfig {
        endpoint: format!("http://{addr}"),
        key: Some("k".into()),
        ..ApiConfig::default()
    })
    .unwrap();
    let err = client.fetch_page(&PageQuery::first()).await.unwrap_err();
    assert!(matches!(err, IradaError::Transport { .. }), "got {err:?}");
}

#[tokio::test]
async fn submit_message_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .and(body_json(json!({
            "senderEmail": "ada@example.com",
            "name": "Ada",
            "message": "Hello from the tests"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client(&server)
        .submit_message(&ContactMessage {
            sender_email: "ada@example.com".into(),
            name: "Ada".into(),
            message: "Hello from the tests".into(),
        })
        .await
        .unwrap();
    assert_eq!(reply["success"], true);
}

#[tokio::test]
async fn missing_key_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = HttpContentClient::from_config(&ApiConfig {
        endpoint: server.uri(),
        key: None,
        ..ApiConfig::default()
    });
    assert!(matches!(result, Err(IradaError::Config(_))));
}
