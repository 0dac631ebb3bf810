//! Tests for the HTTP transport module

use super::*;
use crate::error::Error;
use crate::types::{BackoffType, Method};
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(base_url)
        .no_rate_limit()
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(1),
            Duration::from_millis(5),
        )
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert!(config.base_url.is_none());
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("metal-api/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/metal/v1/")
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .header(AUTH_TOKEN_HEADER, "secret")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.base_url.as_deref(),
        Some("https://api.example.com/metal/v1/")
    );
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert_eq!(
        config.default_headers.get(AUTH_TOKEN_HEADER),
        Some(&"secret".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_build_url() {
    let client = test_client("https://api.example.com/metal/v1/");
    assert_eq!(
        client.build_url("/batches/abc?include=facility"),
        "https://api.example.com/metal/v1/batches/abc?include=facility"
    );
    assert_eq!(
        client.build_url("https://other.example.com/x?page=2"),
        "https://other.example.com/x?page=2"
    );
    assert_eq!(
        client.build_url("?page=2"),
        "https://api.example.com/metal/v1/?page=2"
    );
}

#[test]
fn test_build_url_does_not_repeat_base_prefix() {
    let client = test_client("https://api.example.com/metal/v1/");
    assert_eq!(
        client.build_url("/metal/v1/projects/p1/batches?page=2"),
        "https://api.example.com/metal/v1/projects/p1/batches?page=2"
    );
    assert_eq!(
        client.build_url("/metal/v10/things"),
        "https://api.example.com/metal/v1/metal/v10/things"
    );

    let rootless = test_client("https://api.example.com");
    assert_eq!(
        rootless.build_url("/projects/p1"),
        "https://api.example.com/projects/p1"
    );
}

#[test]
fn test_calculate_backoff() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Exponential,
            Duration::from_millis(100),
            Duration::from_millis(500),
        )
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(400));
    assert_eq!(client.calculate_backoff(3), Duration::from_millis(500));
}

#[test]
fn test_debug_redacts_token() {
    let config = HttpClientConfig::builder()
        .header(AUTH_TOKEN_HEADER, "super-secret")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}

#[tokio::test]
async fn test_send_get_decodes_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/batches/abc"))
        .and(query_param("include", "facility"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "r1")
                .set_body_json(json!({"id": "abc", "state": "completed"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let response = client
        .send(
            Method::GET,
            "/batches/abc?include=facility",
            None,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body["state"], "completed");
    assert_eq!(
        response.headers.get("x-request-id").unwrap().to_str().unwrap(),
        "r1"
    );
}

#[tokio::test]
async fn test_send_post_body_and_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects/p1/devices/batch"))
        .and(header(AUTH_TOKEN_HEADER, "token-1"))
        .and(body_json(json!({"batches": []})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"batches": []})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header(AUTH_TOKEN_HEADER, "token-1")
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let response = client
        .send(
            Method::POST,
            "/projects/p1/devices/batch",
            Some(json!({"batches": []})),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_send_empty_body_is_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/batches/abc"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let response = client
        .send(Method::DELETE, "/batches/abc", None, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.status, 204);
    assert!(response.body.is_null());
    let decoded = response.decode::<()>().unwrap();
    assert_eq!(decoded.status, 204);
}

#[tokio::test]
async fn test_send_client_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/batches/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"errors":["Not found"]}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client
        .send(Method::GET, "/batches/missing", None, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    assert!(!err.is_retryable());
    assert!(err.to_string().contains("Not found"));
}

#[tokio::test]
async fn test_send_retries_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let response = client
        .send(Method::GET, "/flaky", None, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.body["ok"], true);
}

#[tokio::test]
async fn test_send_gives_up_after_max_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(1)
        .no_rate_limit()
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(1),
            Duration::from_millis(1),
        )
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .send(Method::GET, "/down", None, &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_send_throttled_by_rate_limiter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/limited"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .rate_limit(RateLimiterConfig::new(20, 1))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let cancel = CancellationToken::new();

    let started = std::time::Instant::now();
    client.send(Method::GET, "/limited", None, &cancel).await.unwrap();
    client.send(Method::GET, "/limited", None, &cancel).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(40));
}

#[tokio::test]
async fn test_send_cancelled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = client
        .send(Method::GET, "/slow", None, &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Cancelled));
}

#[test]
fn test_decode_type_mismatch() {
    let response = ApiResponse {
        body: json!({"id": 5}),
        status: 200,
        headers: reqwest::header::HeaderMap::new(),
    };

    #[derive(serde::Deserialize, Debug)]
    struct Named {
        #[allow(dead_code)]
        name: String,
    }

    assert!(matches!(
        response.decode::<Named>(),
        Err(Error::JsonParse(_))
    ));
}
