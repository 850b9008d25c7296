use std::fs;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use fallbacks_catalog::builtin_catalog;
use fallbacks_server::{AppState, ServerConfig, build_router};
use http_body_util::BodyExt;
use serde_json::Value as JsonValue;
use tempfile::TempDir;
use tower::ServiceExt;

const RETRY_PATH: &str = "app/components/error-boundaries/RetryErrorBoundary.tsx";

fn test_state(config: ServerConfig) -> (TempDir, Arc<AppState>) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path().join("app/components/error-boundaries");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("RetryErrorBoundary.tsx"),
        "export function RetryErrorBoundary() { return null; }\n",
    )
    .unwrap();
    fs::write(dir.join("Empty.tsx"), "").unwrap();
    fs::write(dir.join("Prose.js"), "nothing to see here\n").unwrap();

    let config = ServerConfig {
        template_root: tmp.path().to_path_buf(),
        ..config
    };
    let catalog = builtin_catalog().expect("builtin catalog");
    (tmp, Arc::new(AppState::new(config, catalog)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn download(path: &str) -> Request<Body> {
    get(&format!("/api/download-template?path={path}"))
}

async fn json_body(resp: Response<Body>) -> (StatusCode, JsonValue) {
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let json: JsonValue = serde_json::from_slice(&bytes).expect("valid JSON response");
    (status, json)
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let (_tmp, state) = test_state(ServerConfig::default());
    let expected = state.catalog.len();
    let resp = build_router(state).oneshot(get("/health")).await.unwrap();
    let (status, json) = json_body(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["templates"], expected);
}

#[tokio::test]
async fn serves_template_with_download_headers() {
    let (_tmp, state) = test_state(ServerConfig::default());
    let resp = build_router(state).oneshot(download(RETRY_PATH)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(
        headers[header::CONTENT_TYPE],
        "text/typescript; charset=utf-8"
    );
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"RetryErrorBoundary.tsx\""
    );
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=3600");
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");

    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert!(body.starts_with(b"export function RetryErrorBoundary"));
}

#[tokio::test]
async fn missing_path_is_bad_request() {
    let (_tmp, state) = test_state(ServerConfig::default());
    let resp = build_router(state)
        .oneshot(get("/api/download-template"))
        .await
        .unwrap();
    let (status, json) = json_body(resp).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Template path is required");
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn error_statuses_follow_failure_cause() {
    let (_tmp, state) = test_state(ServerConfig::default());
    let router = build_router(state);
    let cases = [
        ("../../etc/passwd", StatusCode::BAD_REQUEST),
        ("src/main.tsx", StatusCode::BAD_REQUEST),
        ("templates/Missing.tsx", StatusCode::NOT_FOUND),
        ("app/components/error-boundaries/Empty.tsx", StatusCode::UNPROCESSABLE_ENTITY),
        ("app/components/error-boundaries/Prose.js", StatusCode::UNPROCESSABLE_ENTITY),
    ];
    for (path, expected) in cases {
        let resp = router.clone().oneshot(download(path)).await.unwrap();
        let (status, json) = json_body(resp).await;
        assert_eq!(status, expected, "path {path}");
        assert_eq!(json["status"], expected.as_u16());
    }
}

#[tokio::test]
async fn oversized_template_is_rejected() {
    let (_tmp, state) = test_state(ServerConfig {
        max_template_bytes: 10,
        ..ServerConfig::default()
    });
    let resp = build_router(state).oneshot(download(RETRY_PATH)).await.unwrap();
    let (status, _) = json_body(resp).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let (_tmp, state) = test_state(ServerConfig::default());
    let router = build_router(state);
    for method in ["POST", "PUT", "DELETE"] {
        let req = Request::builder()
            .method(method)
            .uri(format!("/api/download-template?path={RETRY_PATH}"))
            .body(Body::empty())
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.headers()[header::ALLOW], "GET");
        let (status, json) = json_body(resp).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn clients_are_rate_limited_independently() {
    let (_tmp, state) = test_state(ServerConfig {
        rate_limit_max_attempts: 2,
        ..ServerConfig::default()
    });
    let router = build_router(state);
    let from = |ip: &str| {
        Request::builder()
            .uri(format!("/api/download-template?path={RETRY_PATH}"))
            .header("x-forwarded-for", ip)
            .body(Body::empty())
            .unwrap()
    };

    for _ in 0..2 {
        let resp = router.clone().oneshot(from("198.51.100.4")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    let resp = router.clone().oneshot(from("198.51.100.4")).await.unwrap();
    let (status, json) = json_body(resp).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"], "Too many requests. Please try again later.");

    let resp = router.clone().oneshot(from("198.51.100.5, 10.0.0.1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let (_tmp, state) = test_state(ServerConfig::default());
    let resp = build_router(state).oneshot(get("/api/nothing")).await.unwrap();
    let (status, json) = json_body(resp).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn repeated_path_key_serves_first_value() {
    let (_tmp, state) = test_state(ServerConfig::default());
    let resp = build_router(state)
        .oneshot(get(&format!(
            "/api/download-template?path={RETRY_PATH}&path=templates/Other.tsx"
        )))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn rejected_requests_count_against_the_quota() {
    let (_tmp, state) = test_state(ServerConfig {
        rate_limit_max_attempts: 1,
        ..ServerConfig::default()
    });
    let router = build_router(state);
    let from = |uri: &str| {
        Request::builder()
            .uri(uri)
            .header("x-forwarded-for", "203.0.113.7")
            .body(Body::empty())
            .unwrap()
    };

    let resp = router
        .clone()
        .oneshot(from("/api/download-template?other=1"))
        .await
        .unwrap();
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let (status, json) = json_body(resp).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Template path is required");

    let resp = router
        .clone()
        .oneshot(from(&format!("/api/download-template?path={RETRY_PATH}")))
        .await
        .unwrap();
    let (status, json) = json_body(resp).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["status"], 429);
}
